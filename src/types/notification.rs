use serde::{Deserialize, Serialize};

/// Kind of a derived notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Expiring,
}

/// A derived notification. Never persisted; regenerated from the domain
/// collection on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// RFC 3339 timestamp of when the notification was generated.
    pub timestamp: String,
}
