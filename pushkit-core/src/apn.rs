use std::sync::Arc;

use crate::reconciler::{self, RegistrationEvent};
use crate::token::{normalize, Provider, TokenValue};
use crate::tracking::{Tracking, TrackingCompletion};

/// Adapter for the APN application-delegate callbacks.
///
/// Bind one instance to the host's tracking backend and forward the
/// delegate calls into it. Every invocation results in exactly one backend
/// call and resolves its completion exactly once; nothing is cached or
/// deduplicated across invocations.
#[derive(uniffi::Object)]
pub struct MessagingPushApn {
    tracking: Arc<dyn Tracking>,
}

#[uniffi::export]
impl MessagingPushApn {
    /// Binds the adapter to the host's tracking backend.
    #[must_use]
    #[uniffi::constructor]
    pub fn new(tracking: Arc<dyn Tracking>) -> Self {
        Self { tracking }
    }

    /// The OS registered this installation for remote notifications and
    /// issued `device_token`.
    ///
    /// APN reports a token unconditionally on this callback, so the action
    /// is always a registration, superseding whatever the backend holds.
    /// The token bytes are forwarded unmodified.
    pub fn did_register_for_remote_notifications(
        &self,
        device_token: Vec<u8>,
        on_complete: Arc<dyn TrackingCompletion>,
    ) {
        log::debug!("apn issued a device token ({} bytes)", device_token.len());
        let event = normalize(
            Provider::Apn,
            Some(TokenValue::Binary {
                bytes: device_token,
            }),
        )
        .map(RegistrationEvent::TokenReceived);
        reconciler::dispatch(&self.tracking, reconciler::decide(event), on_complete);
    }

    /// The OS could not register this installation for remote
    /// notifications.
    ///
    /// `error` is an opaque trigger: it is logged but never inspected.
    /// Whatever token the backend still holds is deleted, so a failed
    /// registration can never leave a stale push address behind.
    pub fn did_fail_to_register_for_remote_notifications(
        &self,
        error: &str,
        on_complete: Arc<dyn TrackingCompletion>,
    ) {
        log::info!("apn registration failed, deleting device token: {error}");
        reconciler::dispatch(
            &self.tracking,
            reconciler::decide(Some(RegistrationEvent::RegistrationFailed)),
            on_complete,
        );
    }
}
