/// WASM adapters - implementations using browser APIs.

pub mod alert_sink;
pub mod clock;
pub mod console_logger;
pub mod error_conversions;
pub mod session_storage;
pub mod timer;

pub use alert_sink::PostMessageAlertSink;
pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use session_storage::SessionStorage;
pub use timer::Timer;
