use crate::domain::notifications::NotificationError;
use crate::global::get_session_storage;
use crate::ports::SessionStorePort;

/// `window.sessionStorage`: survives reloads of the tab, cleared with the session.
#[derive(Clone, Copy)]
pub struct SessionStorage;

impl SessionStorage {
    /// Fails when the page has no session storage (workers, disabled storage).
    pub fn new() -> Result<Self, NotificationError> {
        get_session_storage()?;
        Ok(Self)
    }
}

impl SessionStorePort for SessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_session_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), NotificationError> {
        get_session_storage()?.set_item(key, value)?;
        Ok(())
    }
}
