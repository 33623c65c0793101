use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A delivery-lifecycle milestone reached by one push notification.
///
/// Metrics are pure values: they are forwarded to the tracking backend
/// together with the delivery identifier and the device token the
/// notification was addressed to, with no transformation. The `snake_case`
/// wire names below are what delivery payloads and the backend's analytics
/// endpoints use.
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
pub enum Metric {
    /// The notification reached the device.
    Delivered,
    /// The person opened the notification.
    Opened,
    /// The person completed the action the notification asked for.
    Converted,
}
