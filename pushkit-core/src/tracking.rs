//! The contract consumed from the host's tracking SDK.

use std::sync::Arc;

use crate::error::TrackingError;
use crate::metric::Metric;
use crate::notification::{
    NotificationContentHandler, NotificationRequest, NotificationResponse,
    NotificationResponseCompletion,
};
use crate::token::DeviceToken;

/// Outcome of one asynchronous tracking operation.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum TrackingOutcome {
    /// The backend accepted the operation.
    Success,
    /// The backend failed or rejected the operation.
    Failure {
        /// The backend's error, forwarded verbatim.
        error: TrackingError,
    },
}

/// Continuation resolved when an asynchronous tracking operation settles.
///
/// Resolved exactly once per operation, on every path.
#[uniffi::export(with_foreign)]
pub trait TrackingCompletion: Send + Sync {
    /// Delivers the final outcome.
    fn on_complete(&self, outcome: TrackingOutcome);
}

/// The tracking backend this adapter layer forwards into.
///
/// Implemented by the host's tracking SDK, which owns token persistence,
/// token canonicalization, network delivery, retries and metric batching.
/// Registering the same token twice must be equivalent to registering it
/// once: the adapters perform no deduplication of their own and rely on
/// that idempotence.
///
/// Implementations must be thread-safe: OS callbacks arrive on arbitrary
/// host threads, and the adapters forward them from whichever thread
/// invoked them.
#[uniffi::export(with_foreign)]
pub trait Tracking: Send + Sync {
    /// Registers `token` as this installation's active device token for
    /// the token's provider, superseding any previously registered token.
    /// Resolves `on_complete` exactly once with the outcome.
    fn register_device_token(&self, token: DeviceToken, on_complete: Arc<dyn TrackingCompletion>);

    /// Deletes whatever device token is currently registered for this
    /// installation. Resolves `on_complete` exactly once with the outcome.
    fn delete_device_token(&self, on_complete: Arc<dyn TrackingCompletion>);

    /// Records that the delivery identified by `delivery_id`, addressed to
    /// `device_token`, reached the `event` milestone.
    fn track_metric(&self, delivery_id: String, event: Metric, device_token: String);

    /// Offers an incoming notification to the backend for content
    /// handling. Returns whether the backend recognized the notification
    /// as one of its own; when this returns `false`, `content_handler`
    /// will not be called by the backend.
    fn did_receive_notification(
        &self,
        request: Arc<NotificationRequest>,
        content_handler: Arc<dyn NotificationContentHandler>,
    ) -> bool;

    /// The OS is about to stop the service extension: the backend must
    /// abandon any in-flight content work and present what it has.
    fn service_extension_time_will_expire(&self);

    /// Routes the person's response to a delivered notification. Returns
    /// whether the backend recognized and handled the response.
    fn user_notification_center_response(
        &self,
        response: NotificationResponse,
        completion_handler: Arc<dyn NotificationResponseCompletion>,
    ) -> bool;
}
