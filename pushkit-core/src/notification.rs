//! Value types and continuations for the host's notification-extension
//! surface.
//!
//! Notification content is routed between the OS surface and the tracking
//! backend without being interpreted here: payloads are validated as JSON
//! once at the FFI boundary and forwarded byte-for-byte afterwards.

use crate::error::PushKitError;

/// An incoming notification as handed to a notification service extension:
/// the OS-assigned request identifier plus the raw payload.
#[derive(Debug, Clone, uniffi::Object)]
pub struct NotificationRequest {
    identifier: String,
    payload: String,
}

#[uniffi::export]
impl NotificationRequest {
    /// Wraps an incoming notification request.
    ///
    /// `payload` must be the JSON serialization of the notification's
    /// `userInfo` dictionary. It is validated here and carried verbatim
    /// from then on.
    ///
    /// # Errors
    /// Returns [`PushKitError::InvalidPayload`] if `payload` is not valid
    /// JSON.
    #[uniffi::constructor]
    pub fn new(identifier: String, payload: String) -> Result<Self, PushKitError> {
        serde_json::from_str::<serde_json::Value>(&payload)
            .map_err(|e| PushKitError::InvalidPayload(e.to_string()))?;
        Ok(Self {
            identifier,
            payload,
        })
    }

    /// The OS-assigned identifier of this request.
    #[must_use]
    pub fn identifier(&self) -> String {
        self.identifier.clone()
    }

    /// The raw notification payload, byte-for-byte as provided by the
    /// host.
    #[must_use]
    pub fn payload(&self) -> String {
        self.payload.clone()
    }
}

/// Displayable notification content produced by the tracking backend,
/// handed back to the OS through a [`NotificationContentHandler`].
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct NotificationContent {
    /// Serialized content payload, verbatim from the backend.
    pub payload: String,
}

/// The person's response to a delivered notification.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct NotificationResponse {
    /// Identifier of the notification that was responded to.
    pub identifier: String,
    /// The action the person took (e.g. the default open action or a
    /// custom action button).
    pub action_identifier: String,
    /// Raw payload of the responded-to notification.
    pub payload: String,
}

/// Continuation through which the tracking backend delivers (possibly
/// mutated) notification content back to the OS.
#[uniffi::export(with_foreign)]
pub trait NotificationContentHandler: Send + Sync {
    /// Hands the content to display back to the OS. Called at most once,
    /// and only when the backend recognized the notification as its own.
    fn handle(&self, content: NotificationContent);
}

/// Continuation the OS expects once a notification response has been
/// processed.
#[uniffi::export(with_foreign)]
pub trait NotificationResponseCompletion: Send + Sync {
    /// Signals that response handling finished.
    fn on_complete(&self);
}
