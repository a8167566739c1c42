use crate::domain::notifications::{ApiError, Notification, NotificationId};
use async_trait::async_trait;

/// Port for the storefront notification endpoints.
#[async_trait(?Send)]
pub trait NotificationApiPort {
    /// Fetch the notifications the server still considers unread, in server order.
    async fn fetch_unread(&self) -> Result<Vec<Notification>, ApiError>;

    /// Acknowledge a notification. Calling it for an already-read
    /// notification must not fail.
    async fn mark_read(&self, id: NotificationId) -> Result<(), ApiError>;
}
