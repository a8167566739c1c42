use crate::ports::LoggerPort;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen]
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::SeqCst);
}

pub fn is_debug() -> bool {
    DEBUG_MODE.load(Ordering::SeqCst)
}

/// Console timer that spans an async operation. Only active in debug mode;
/// the timer ends when the guard is dropped.
pub struct Timing {
    logger: &'static dyn LoggerPort,
    label: String,
    enabled: bool,
}

impl Timing {
    pub fn start(logger: &'static dyn LoggerPort, label: impl Into<String>) -> Self {
        let label = label.into();
        let enabled = is_debug();
        if enabled {
            logger.time(&label);
        }
        Self {
            logger,
            label,
            enabled,
        }
    }
}

impl Drop for Timing {
    fn drop(&mut self) {
        if self.enabled {
            self.logger.time_end(&self.label);
        }
    }
}
