use std::sync::Arc;

use crate::metric::Metric;
#[cfg(feature = "notification-extension")]
use crate::notification::{
    NotificationContentHandler, NotificationRequest, NotificationResponse,
    NotificationResponseCompletion,
};
use crate::reconciler::{self, RegistrationEvent};
use crate::token::{normalize, Provider, TokenValue};
use crate::tracking::{Tracking, TrackingCompletion, TrackingOutcome};

/// Completion for the fire-and-forget FCM paths.
///
/// The FCM delegate contract is synchronous and void, so backend outcomes
/// have no caller to go to. Failures are still logged for operability;
/// that does not change the observable contract.
struct FireAndForget;

impl TrackingCompletion for FireAndForget {
    fn on_complete(&self, outcome: TrackingOutcome) {
        if let TrackingOutcome::Failure { error } = outcome {
            log::debug!("fire-and-forget tracking call failed: {error}");
        }
    }
}

/// Adapter for the FCM messaging-delegate callbacks.
///
/// Unlike the APN surface, the FCM delegate contract exposes no completion
/// continuation: registration and deletion are fire-and-forget, and
/// backend errors on this path are swallowed by provider convention.
/// Nothing is cached or deduplicated across invocations.
#[derive(uniffi::Object)]
pub struct MessagingPushFcm {
    tracking: Arc<dyn Tracking>,
}

#[uniffi::export]
impl MessagingPushFcm {
    /// Binds the adapter to the host's tracking backend.
    #[must_use]
    #[uniffi::constructor]
    pub fn new(tracking: Arc<dyn Tracking>) -> Self {
        Self { tracking }
    }

    /// Registers `fcm_token` as this installation's device token.
    ///
    /// `None` means FCM has no token to report yet; the call is a no-op,
    /// never a deletion. A present token is forwarded unmodified.
    pub fn register_device_token(&self, fcm_token: Option<String>) {
        let event = normalize(
            Provider::Fcm,
            fcm_token.map(|value| TokenValue::Text { value }),
        )
        .map(RegistrationEvent::TokenReceived);
        reconciler::dispatch(
            &self.tracking,
            reconciler::decide(event),
            Arc::new(FireAndForget),
        );
    }

    /// FCM issued or rotated the registration token.
    ///
    /// Delegates to [`Self::register_device_token`] with identical
    /// semantics.
    pub fn did_receive_registration_token(&self, fcm_token: Option<String>) {
        self.register_device_token(fcm_token);
    }

    /// The OS could not register this installation for remote
    /// notifications.
    ///
    /// `error` is an opaque trigger: it is logged but never inspected.
    /// Whatever token the backend still holds is deleted.
    pub fn did_fail_to_register(&self, error: &str) {
        log::info!("fcm registration failed, deleting device token: {error}");
        reconciler::dispatch(
            &self.tracking,
            reconciler::decide(Some(RegistrationEvent::RegistrationFailed)),
            Arc::new(FireAndForget),
        );
    }

    /// Deletes whatever device token the backend currently holds for this
    /// installation.
    pub fn delete_device_token(&self) {
        reconciler::dispatch(
            &self.tracking,
            reconciler::decide(Some(RegistrationEvent::TokenCleared)),
            Arc::new(FireAndForget),
        );
    }

    /// Forwards a delivery metric to the backend, arguments unchanged.
    pub fn track_metric(&self, delivery_id: String, event: Metric, device_token: String) {
        log::debug!("forwarding {event} metric for delivery {delivery_id}");
        self.tracking.track_metric(delivery_id, event, device_token);
    }
}

#[cfg(feature = "notification-extension")]
#[uniffi::export]
impl MessagingPushFcm {
    /// Offers an incoming notification to the tracking backend for content
    /// handling.
    ///
    /// Returns whether the backend recognized the notification as one of
    /// its own. When this returns `false`, `content_handler` will not be
    /// called by the backend and the host must complete the request
    /// itself. Content is routed, never interpreted here.
    #[must_use]
    pub fn did_receive_notification_request(
        &self,
        request: Arc<NotificationRequest>,
        content_handler: Arc<dyn NotificationContentHandler>,
    ) -> bool {
        self.tracking
            .did_receive_notification(request, content_handler)
    }

    /// The OS is about to cut the service extension off; forwarded so the
    /// backend stops mutating content and presents what it has.
    pub fn service_extension_time_will_expire(&self) {
        self.tracking.service_extension_time_will_expire();
    }

    /// Routes the person's response to a delivered notification.
    ///
    /// Returns whether the backend recognized and handled the response;
    /// when `false`, `completion_handler` will not be called by the
    /// backend.
    #[must_use]
    pub fn did_receive_notification_response(
        &self,
        response: NotificationResponse,
        completion_handler: Arc<dyn NotificationResponseCompletion>,
    ) -> bool {
        self.tracking
            .user_notification_center_response(response, completion_handler)
    }
}
