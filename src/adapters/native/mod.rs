/// Native adapters - implementations for native Rust (non-WASM).

pub mod alert_sink;
pub mod clock;
pub mod console_logger;
pub mod timer;

pub use alert_sink::LogAlertSink;
pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use timer::Timer;
