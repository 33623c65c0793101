//! Recording doubles for the tracking contract, shared by the adapter
//! tests.

use std::sync::{Arc, Mutex};

use crate::error::TrackingError;
use crate::metric::Metric;
use crate::notification::{
    NotificationContent, NotificationContentHandler, NotificationRequest, NotificationResponse,
    NotificationResponseCompletion,
};
use crate::token::DeviceToken;
use crate::tracking::{Tracking, TrackingCompletion, TrackingOutcome};

/// One observed call into the recording backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingCall {
    Register(DeviceToken),
    Delete,
    Metric {
        delivery_id: String,
        event: Metric,
        device_token: String,
    },
    Notification {
        identifier: String,
    },
    TimeWillExpire,
    Response {
        identifier: String,
    },
}

/// Tracking double that records every call and resolves completions
/// synchronously with a preconfigured outcome.
pub struct RecordingTracking {
    calls: Mutex<Vec<TrackingCall>>,
    outcome: TrackingOutcome,
    recognizes: bool,
}

impl RecordingTracking {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(vec![]),
            outcome: TrackingOutcome::Success,
            recognizes: true,
        })
    }

    pub fn failing(error: TrackingError) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(vec![]),
            outcome: TrackingOutcome::Failure { error },
            recognizes: true,
        })
    }

    /// A backend that does not recognize notification payloads as its own.
    #[cfg(feature = "notification-extension")]
    pub fn unrecognizing() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(vec![]),
            outcome: TrackingOutcome::Success,
            recognizes: false,
        })
    }

    pub fn calls(&self) -> Vec<TrackingCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: TrackingCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Tracking for RecordingTracking {
    fn register_device_token(&self, token: DeviceToken, on_complete: Arc<dyn TrackingCompletion>) {
        self.record(TrackingCall::Register(token));
        on_complete.on_complete(self.outcome.clone());
    }

    fn delete_device_token(&self, on_complete: Arc<dyn TrackingCompletion>) {
        self.record(TrackingCall::Delete);
        on_complete.on_complete(self.outcome.clone());
    }

    fn track_metric(&self, delivery_id: String, event: Metric, device_token: String) {
        self.record(TrackingCall::Metric {
            delivery_id,
            event,
            device_token,
        });
    }

    fn did_receive_notification(
        &self,
        request: Arc<NotificationRequest>,
        content_handler: Arc<dyn NotificationContentHandler>,
    ) -> bool {
        self.record(TrackingCall::Notification {
            identifier: request.identifier(),
        });
        if self.recognizes {
            content_handler.handle(NotificationContent {
                payload: request.payload(),
            });
        }
        self.recognizes
    }

    fn service_extension_time_will_expire(&self) {
        self.record(TrackingCall::TimeWillExpire);
    }

    fn user_notification_center_response(
        &self,
        response: NotificationResponse,
        completion_handler: Arc<dyn NotificationResponseCompletion>,
    ) -> bool {
        self.record(TrackingCall::Response {
            identifier: response.identifier,
        });
        if self.recognizes {
            completion_handler.on_complete();
        }
        self.recognizes
    }
}

/// Completion double that records every outcome it is resolved with.
pub struct RecordingCompletion {
    outcomes: Mutex<Vec<TrackingOutcome>>,
}

impl RecordingCompletion {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(vec![]),
        })
    }

    pub fn outcomes(&self) -> Vec<TrackingOutcome> {
        self.outcomes.lock().unwrap().clone()
    }
}

impl TrackingCompletion for RecordingCompletion {
    fn on_complete(&self, outcome: TrackingOutcome) {
        self.outcomes.lock().unwrap().push(outcome);
    }
}

/// Content handler double that records what the backend hands back.
#[cfg(feature = "notification-extension")]
pub struct RecordingContentHandler {
    contents: Mutex<Vec<NotificationContent>>,
}

#[cfg(feature = "notification-extension")]
impl RecordingContentHandler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            contents: Mutex::new(vec![]),
        })
    }

    pub fn contents(&self) -> Vec<NotificationContent> {
        self.contents.lock().unwrap().clone()
    }
}

#[cfg(feature = "notification-extension")]
impl NotificationContentHandler for RecordingContentHandler {
    fn handle(&self, content: NotificationContent) {
        self.contents.lock().unwrap().push(content);
    }
}

#[cfg(feature = "notification-extension")]
pub struct NoopContentHandler;

#[cfg(feature = "notification-extension")]
impl NotificationContentHandler for NoopContentHandler {
    fn handle(&self, _content: NotificationContent) {}
}

#[cfg(feature = "notification-extension")]
pub struct NoopResponseCompletion;

#[cfg(feature = "notification-extension")]
impl NotificationResponseCompletion for NoopResponseCompletion {
    fn on_complete(&self) {}
}
