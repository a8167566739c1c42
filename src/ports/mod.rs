/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// These traits are the contracts between the notification domain and the
/// infrastructure adapters, so the poller can run in the browser, natively, or
/// against in-memory fakes in tests.

pub mod alert_sink;
pub mod clock;
pub mod logger;
pub mod notification_api;
pub mod session_store;
pub mod timer;

pub use alert_sink::AlertSinkPort;
pub use clock::ClockPort;
pub use logger::LoggerPort;
pub use notification_api::NotificationApiPort;
pub use session_store::SessionStorePort;
pub use timer::TimerPort;
