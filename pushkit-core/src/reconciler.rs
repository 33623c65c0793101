//! Registration decision core shared by both provider adapters.
//!
//! Each OS callback is translated into at most one [`RegistrationEvent`]
//! and mapped onto a single backend action here, so the two providers
//! cannot drift apart in how they treat failure or absent tokens.

use std::sync::Arc;

use crate::token::DeviceToken;
use crate::tracking::{Tracking, TrackingCompletion, TrackingOutcome};

/// A registration lifecycle signal, translated from one provider callback.
///
/// Values are created per invocation and never persisted; token
/// persistence belongs to the tracking backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationEvent {
    /// The provider issued (or re-issued) a device token.
    TokenReceived(DeviceToken),
    /// The provider reported that registration failed. The underlying OS
    /// error is an opaque trigger and is not carried here.
    RegistrationFailed,
    /// The host asked for the currently registered token to be discarded.
    TokenCleared,
}

/// What one callback invocation does against the tracking backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Register `DeviceToken` as the installation's current push address.
    Register(DeviceToken),
    /// Delete whatever token the backend holds for this installation.
    Delete,
    /// Do nothing.
    Ignore,
}

/// Maps a lifecycle signal onto the backend action.
///
/// `None` is the "provider has no token" case and must stay a no-op: only
/// an explicit failure or clearing invalidates a previously registered
/// token. Both of those map to `Delete`: a stale or partial registration
/// is never left behind in the backend.
pub fn decide(event: Option<RegistrationEvent>) -> Action {
    match event {
        Some(RegistrationEvent::TokenReceived(token)) => Action::Register(token),
        Some(RegistrationEvent::RegistrationFailed | RegistrationEvent::TokenCleared) => {
            Action::Delete
        }
        None => Action::Ignore,
    }
}

/// Executes one action against the backend, resolving `on_complete`
/// exactly once on every path.
///
/// `Ignore` resolves the completion immediately with success: a no-op has
/// no failure mode, and callers with a completion contract still get their
/// exactly-once signal.
pub fn dispatch(
    tracking: &Arc<dyn Tracking>,
    action: Action,
    on_complete: Arc<dyn TrackingCompletion>,
) {
    match action {
        Action::Register(token) => {
            log::info!("registering {} device token", token.provider);
            tracking.register_device_token(token, on_complete);
        }
        Action::Delete => {
            log::info!("deleting registered device token");
            tracking.delete_device_token(on_complete);
        }
        Action::Ignore => {
            log::debug!("no token available, leaving registration untouched");
            on_complete.on_complete(TrackingOutcome::Success);
        }
    }
}
