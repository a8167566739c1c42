use super::error::NotificationError;
use super::types::NotificationId;
use crate::platform::Platform;
use crate::ports::{LoggerPort, SessionStorePort};
use std::collections::HashSet;
use std::rc::Rc;

/// Session storage key for the seen IDs. Kept apart from any other session cache.
pub const DEFAULT_SEEN_STORAGE_KEY: &str = "admin_seen_notification_ids";

/// Notification IDs already surfaced during this browser session.
///
/// Grows monotonically. Every insertion is written through to session storage
/// as a JSON array of integers, so a page reload does not re-alert.
pub struct SeenSet {
    ids: HashSet<NotificationId>,
    store: Rc<dyn SessionStorePort>,
    key: String,
    logger: &'static dyn LoggerPort,
}

impl SeenSet {
    /// Rebuilds the set from session storage. Missing or unreadable state
    /// yields an empty set.
    pub fn load(platform: &Platform, key: &str) -> Self {
        let store = platform.session_store();
        let logger = platform.logger();

        let ids = match store.get(key) {
            Some(raw) => parse_seen_ids(&raw).unwrap_or_else(|e| {
                logger.warn(&format!("{e}; starting with an empty set"));
                HashSet::new()
            }),
            None => HashSet::new(),
        };

        Self {
            ids,
            store,
            key: key.to_string(),
            logger,
        }
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.ids.contains(&id)
    }

    /// Records `id` and persists the whole set. Returns `false` if it was
    /// already present, in which case nothing is written.
    pub fn add(&mut self, id: NotificationId) -> bool {
        if !self.ids.insert(id) {
            return false;
        }

        if let Err(e) = self.persist() {
            self.logger
                .warn(&format!("Failed to persist seen notification {id}: {e}"));
        }

        true
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Sorted snapshot of the recorded IDs.
    pub fn ids(&self) -> Vec<NotificationId> {
        let mut ids: Vec<_> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    fn persist(&self) -> Result<(), NotificationError> {
        let encoded = serialize_seen_ids(&self.ids)?;
        self.store.set(&self.key, &encoded)
    }
}

pub fn parse_seen_ids(raw: &str) -> Result<HashSet<NotificationId>, NotificationError> {
    serde_json::from_str::<Vec<NotificationId>>(raw)
        .map(|ids| ids.into_iter().collect())
        .map_err(|e| NotificationError::PersistedStateCorrupt(e.to_string()))
}

pub fn serialize_seen_ids(ids: &HashSet<NotificationId>) -> Result<String, NotificationError> {
    let mut sorted: Vec<_> = ids.iter().copied().collect();
    sorted.sort_unstable();
    serde_json::to_string(&sorted).map_err(|e| NotificationError::storage(e.to_string()))
}
