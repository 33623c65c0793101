use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A push provider capable of addressing this installation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    uniffi::Enum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// Apple's push notification delivery service.
    Apn,
    /// Google's cross-platform push delivery service.
    Fcm,
}

/// The raw token representation a provider hands over.
///
/// APN reports binary tokens, FCM reports string tokens. Neither is
/// re-encoded here: hex-encoding and any other canonicalization belong to
/// the tracking backend.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum TokenValue {
    /// A binary device token, as issued by APN.
    Binary {
        /// Token bytes exactly as handed over by the OS.
        bytes: Vec<u8>,
    },
    /// A string device token, as issued by FCM.
    Text {
        /// Token string exactly as handed over by the OS.
        value: String,
    },
}

/// The push address of this installation for one provider.
///
/// At most one token is active per provider per installation at any time;
/// a newer successful registration supersedes whatever the tracking
/// backend currently holds for that provider.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct DeviceToken {
    /// The provider this token belongs to.
    pub provider: Provider,
    /// The raw token value, unmodified.
    pub value: TokenValue,
}

impl DeviceToken {
    /// Builds an APN token from the bytes the OS handed over.
    #[must_use]
    pub const fn apn(bytes: Vec<u8>) -> Self {
        Self {
            provider: Provider::Apn,
            value: TokenValue::Binary { bytes },
        }
    }

    /// Builds an FCM token from the string the OS handed over.
    #[must_use]
    pub const fn fcm(value: String) -> Self {
        Self {
            provider: Provider::Fcm,
            value: TokenValue::Text { value },
        }
    }
}

/// Wraps a raw provider token if one is present.
///
/// `None` means the provider has no token to report; callers must treat
/// that as a no-op, never as an error. Present tokens pass through
/// unchanged, empty ones included; only a genuinely absent token is
/// distinct from "the token is now invalid".
#[must_use]
pub fn normalize(provider: Provider, raw: Option<TokenValue>) -> Option<DeviceToken> {
    raw.map(|value| DeviceToken { provider, value })
}
