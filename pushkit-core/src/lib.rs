#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
//! Core crate for `PushKit`.
//!
//! Forwards push-notification lifecycle events (device-token registration
//! and failure, delivery metrics, notification-extension content) from the
//! APN and FCM callback surfaces into a host-provided tracking backend.
//! The backend owns token persistence, canonicalization and network
//! delivery; this crate only decides *what* to forward and routes it.

mod error;
pub use error::*;

mod token;
pub use token::*;

mod metric;
pub use metric::*;

mod notification;
pub use notification::*;

mod tracking;
pub use tracking::*;

mod apn;
pub use apn::*;

mod fcm;
pub use fcm::*;

pub mod logger;

// private modules
mod reconciler;

#[cfg(test)]
mod testing;

uniffi::setup_scaffolding!("pushkit_core");
