use super::types::NotificationId;
use thiserror::Error;

/// Failure of a call to the notification endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: HTTP {status}")]
    Server { status: u16 },
}

#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to fetch unread notifications: {0}")]
    FetchFailure(#[from] ApiError),
    #[error("Failed to mark notification {id} as read: {source}")]
    MarkReadFailure { id: NotificationId, source: ApiError },
    #[error("Persisted seen notifications are corrupt: {0}")]
    PersistedStateCorrupt(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NotificationError {
    pub fn storage(message: impl Into<String>) -> Self {
        NotificationError::Storage(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        NotificationError::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_fetch_failure_wraps_api_error() {
        let err: NotificationError = ApiError::Server { status: 503 }.into();
        assert_eq!(
            err.to_string(),
            "Failed to fetch unread notifications: Server error: HTTP 503"
        );
    }

    #[test]
    fn test_mark_read_failure_exposes_source() {
        let err = NotificationError::MarkReadFailure {
            id: 3,
            source: ApiError::Network("connection reset".to_string()),
        };
        assert!(err.to_string().contains("notification 3"));
        assert!(err.source().is_some());
    }
}
