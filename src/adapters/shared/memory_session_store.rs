use crate::domain::notifications::NotificationError;
use crate::ports::SessionStorePort;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Session store that lives as long as the process (or the worker).
///
/// Used where `sessionStorage` does not exist, and as the store in tests.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
    writes: Mutex<usize>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.lock()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl SessionStorePort for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), NotificationError> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        *self.writes.lock() += 1;
        Ok(())
    }
}
