#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
//! Umbrella crate for `PushKit`.
//!
//! Re-exports the full `pushkit-core` API and builds the `staticlib` and
//! `cdylib` artifacts the foreign bindings link against.

pub use pushkit_core::*;
