/// Adapters module - platform-specific implementations of ports.

pub mod globals;
pub mod shared;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub use wasm::{Clock, ConsoleLogger, PostMessageAlertSink, SessionStorage, Timer};
#[cfg(not(target_arch = "wasm32"))]
pub use native::{Clock, ConsoleLogger, LogAlertSink, Timer};

pub use globals::{clock, logger};
pub use shared::{HttpNotificationApi, MemorySessionStore};

use crate::ports::SessionStorePort;
use std::rc::Rc;

/// Session storage for the current target: `window.sessionStorage` in a
/// browser window, process memory elsewhere (workers, native hosts).
pub fn default_session_store() -> Rc<dyn SessionStorePort> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Ok(storage) = SessionStorage::new() {
            return Rc::new(storage);
        }
        logger().warn("sessionStorage unavailable; seen notifications will not survive a reload");
    }

    Rc::new(MemorySessionStore::new())
}
