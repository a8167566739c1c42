pub mod center;
pub mod error;
pub mod poller;
pub mod presenter;
pub mod seen_set;
pub mod types;

pub use center::NotificationCenter;
pub use error::{ApiError, NotificationError};
pub use poller::{Poller, PollerHandle};
pub use presenter::AlertPresenter;
pub use seen_set::{parse_seen_ids, serialize_seen_ids, SeenSet, DEFAULT_SEEN_STORAGE_KEY};
pub use types::{AlertInstance, Notification, NotificationId, TickOutcome};

#[cfg(test)]
pub(crate) mod test_support;
