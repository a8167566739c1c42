use crate::ports::LoggerPort;
use wasm_bindgen::prelude::*;

const PREFIX: &str = "[admin-notifications]";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn time(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = timeEnd)]
    fn time_end(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        log(&format!("{PREFIX} {message}"));
    }

    fn error(&self, message: &str) {
        error(&format!("{PREFIX} {message}"));
    }

    fn warn(&self, message: &str) {
        warn(&format!("{PREFIX} {message}"));
    }

    // Labels are passed through unprefixed so timeEnd matches time.
    fn time(&self, label: &str) {
        time(label);
    }

    fn time_end(&self, label: &str) {
        time_end(label);
    }
}
