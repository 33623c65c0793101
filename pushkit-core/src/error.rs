use thiserror::Error;

/// Error outputs from `PushKit`.
#[derive(Debug, Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum PushKitError {
    /// The presented notification payload is not valid JSON
    #[error("invalid_payload: {0}")]
    InvalidPayload(String),
}

/// Failure kinds reported by the tracking backend.
///
/// These are produced by the host's tracking SDK and forwarded verbatim to
/// completion callbacks; this crate never interprets or recovers from them.
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Enum)]
pub enum TrackingError {
    /// The tracking backend has not been initialized by the host yet.
    #[error("not_initialized")]
    NotInitialized,
    /// No profile is identified, so the backend has nothing to attach a
    /// device token to.
    #[error("no_profile_identified")]
    NoProfileIdentified,
    /// The backend could not reach its delivery endpoint.
    #[error("network_error: {error}")]
    Network {
        /// Transport diagnostic, verbatim from the backend.
        error: String,
    },
    /// The delivery endpoint rejected the operation.
    #[error("rejected: {error}")]
    Rejected {
        /// Server-side reason, verbatim from the backend.
        error: String,
    },
}
