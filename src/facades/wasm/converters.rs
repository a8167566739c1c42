use crate::domain::notifications::NotificationId;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

pub fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

pub fn to_js_value<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(to_js_error)
}

/// JS numbers are doubles; only whole values within the safe integer range are IDs.
pub fn js_number_to_id(value: f64) -> Result<NotificationId, JsValue> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    if value.fract() != 0.0 || value.abs() > MAX_SAFE_INTEGER {
        return Err(JsValue::from_str(&format!(
            "Invalid notification id: {value}"
        )));
    }
    Ok(value as NotificationId)
}
