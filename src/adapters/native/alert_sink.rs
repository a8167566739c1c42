use crate::domain::notifications::Notification;
use crate::ports::AlertSinkPort;

/// Native alert sink: there is no toast stack, so alerts become log records.
#[derive(Clone, Copy, Default)]
pub struct LogAlertSink;

impl LogAlertSink {
    pub fn new() -> Self {
        Self
    }
}

impl AlertSinkPort for LogAlertSink {
    fn show(&self, notification: &Notification) -> Result<(), String> {
        log::info!(
            target: "admin_notifications::alert",
            "#{}: {}",
            notification.id,
            notification.message
        );
        Ok(())
    }
}
