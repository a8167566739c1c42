use super::converters;
use crate::adapters::{HttpNotificationApi, PostMessageAlertSink};
use crate::config::PollerConfig;
use crate::domain::notifications::NotificationCenter;
use crate::platform::Platform;
use serde::Deserialize;
use serde_wasm_bindgen::from_value;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StartOptions {
    poll_interval_ms: Option<u32>,
    storage_key: Option<String>,
    bearer_token: Option<String>,
}

impl StartOptions {
    fn into_config(self, api_base_url: &str) -> PollerConfig {
        let mut config = PollerConfig::new(api_base_url);
        if let Some(ms) = self.poll_interval_ms {
            config = config.with_poll_interval(Duration::from_millis(u64::from(ms)));
        }
        if let Some(key) = self.storage_key {
            config = config.with_seen_storage_key(key);
        }
        if let Some(token) = self.bearer_token {
            config = config.with_bearer_token(token);
        }
        config
    }
}

/// Admin notification poller owned by the admin view. Call `stop()` (or
/// `free()`) when the view unmounts.
#[wasm_bindgen]
pub struct AdminNotifications {
    center: Rc<NotificationCenter>,
}

/// Starts polling `GET {api_base_url}/notifications/unread` right away and
/// posts an `adminNotification` message for each notification not seen in
/// this session.
#[wasm_bindgen]
pub fn start_admin_notifications(
    api_base_url: &str,
    options: JsValue,
) -> Result<AdminNotifications, JsValue> {
    let options: StartOptions = if options.is_undefined() || options.is_null() {
        StartOptions::default()
    } else {
        from_value(options)?
    };
    let config = options.into_config(api_base_url);

    let api = HttpNotificationApi::from_config(&config)?;
    let platform = Platform::new();
    let (center, driver) = NotificationCenter::start(
        &platform,
        &config,
        Rc::new(api),
        Rc::new(PostMessageAlertSink::new()),
    );
    wasm_bindgen_futures::spawn_local(driver);

    Ok(AdminNotifications {
        center: Rc::new(center),
    })
}

#[wasm_bindgen]
impl AdminNotifications {
    /// Closes the alert and marks the notification read. Resolves to `false`
    /// when no alert with that id is open.
    pub fn dismiss(&self, id: f64) -> Result<js_sys::Promise, JsValue> {
        let id = converters::js_number_to_id(id)?;
        let center = self.center.clone();
        Ok(future_to_promise(async move {
            Ok(JsValue::from_bool(center.dismiss(id).await))
        }))
    }

    /// Polls immediately. Resolves to `{ fetched, presented }`.
    pub fn poll_now(&self) -> js_sys::Promise {
        let center = self.center.clone();
        future_to_promise(async move {
            let outcome = center.poll_now().await;
            converters::to_js_value(&outcome)
        })
    }

    pub fn active_alerts(&self) -> Result<JsValue, JsValue> {
        converters::to_js_value(&self.center.active_alerts())
    }

    pub fn stop(&self) {
        self.center.stop();
    }

    pub fn is_running(&self) -> bool {
        self.center.is_running()
    }
}

impl Drop for AdminNotifications {
    fn drop(&mut self) {
        self.center.stop();
    }
}
