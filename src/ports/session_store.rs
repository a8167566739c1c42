use crate::domain::notifications::NotificationError;

/// Port for session-scoped key-value storage.
///
/// Values survive a page reload within the same browser session but not a new
/// session. In the browser this is `window.sessionStorage`.
pub trait SessionStorePort {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), NotificationError>;
}
