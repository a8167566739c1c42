use crate::domain::notifications::NotificationError;
use wasm_bindgen::prelude::*;
use web_sys::{self, DedicatedWorkerGlobalScope, Storage, Window};

pub fn get_global_scope() -> Result<JsValue, NotificationError> {
    // Try worker scope first
    if let Ok(scope) = js_sys::global().dyn_into::<DedicatedWorkerGlobalScope>() {
        return Ok(JsValue::from(scope));
    }

    // Fallback to window
    let window = web_sys::window().ok_or_else(|| {
        NotificationError::storage("Neither DedicatedWorkerGlobalScope nor Window found")
    })?;
    Ok(JsValue::from(window))
}

pub fn window() -> Result<Window, NotificationError> {
    get_global_scope()?
        .dyn_into::<Window>()
        .map_err(|_| NotificationError::storage("Not running in a window context"))
}

/// `window.sessionStorage`. Fails in workers and when storage is disabled.
pub fn get_session_storage() -> Result<Storage, NotificationError> {
    window()?
        .session_storage()?
        .ok_or_else(|| NotificationError::storage("sessionStorage is not available"))
}
