use crate::domain::notifications::Notification;
use crate::global::get_global_scope;
use crate::ports::AlertSinkPort;
use serde::Serialize;
use wasm_bindgen::JsCast;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    AdminNotification,
}

#[derive(Serialize)]
pub struct Message<'a, T> {
    pub event: EventType,
    pub data: &'a T,
}

/// Hands alerts to the page's toast layer through `postMessage`.
///
/// The page listens for `{ event: "adminNotification", data: { id, message } }`,
/// renders a toast that does not expire, and calls `dismiss(id)` on close.
#[derive(Clone, Copy, Default)]
pub struct PostMessageAlertSink;

impl PostMessageAlertSink {
    pub fn new() -> Self {
        Self
    }
}

impl AlertSinkPort for PostMessageAlertSink {
    fn show(&self, notification: &Notification) -> Result<(), String> {
        let global_scope = get_global_scope().map_err(|e| e.to_string())?;

        let msg = Message {
            event: EventType::AdminNotification,
            data: notification,
        };
        let js_value = serde_wasm_bindgen::to_value(&msg)
            .map_err(|e| format!("Failed to serialize: {:?}", e))?;

        if let Ok(worker_scope) = global_scope
            .clone()
            .dyn_into::<web_sys::DedicatedWorkerGlobalScope>()
        {
            worker_scope
                .post_message(&js_value)
                .map_err(|e| format!("{:?}", e))?;
        } else if let Ok(window) = global_scope.dyn_into::<web_sys::Window>() {
            window
                .post_message(&js_value, "*")
                .map_err(|e| format!("{:?}", e))?;
        } else {
            return Err("Unknown global scope".to_string());
        }

        Ok(())
    }
}
