/// Adapters that compile for every target.

pub mod http_api;
pub mod memory_session_store;

pub use http_api::HttpNotificationApi;
pub use memory_session_store::MemorySessionStore;
