use serde::{Deserialize, Serialize};

/// Server-assigned notification identifier.
pub type NotificationId = i64;

/// An admin-facing event (typically a new order), as returned by
/// `GET /notifications/unread`. Unknown fields from the server are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
}

impl Notification {
    pub fn new(id: NotificationId, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

/// A displayed alert. Lives until the user dismisses it; there is no timeout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertInstance {
    pub notification: Notification,
    pub shown_at_ms: f64,
}

/// What a single poll did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickOutcome {
    pub fetched: usize,
    pub presented: usize,
}
