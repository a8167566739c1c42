use super::error::NotificationError;
use super::types::{AlertInstance, Notification, NotificationId};
use crate::platform::Platform;
use crate::ports::{AlertSinkPort, ClockPort, LoggerPort, NotificationApiPort};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shows one persistent alert per new notification and acknowledges it to the
/// server when the user dismisses it.
pub struct AlertPresenter {
    sink: Rc<dyn AlertSinkPort>,
    api: Rc<dyn NotificationApiPort>,
    logger: &'static dyn LoggerPort,
    clock: &'static dyn ClockPort,
    active: RefCell<HashMap<NotificationId, AlertInstance>>,
}

impl AlertPresenter {
    pub fn new(
        platform: &Platform,
        sink: Rc<dyn AlertSinkPort>,
        api: Rc<dyn NotificationApiPort>,
    ) -> Self {
        Self {
            sink,
            api,
            logger: platform.logger(),
            clock: platform.clock(),
            active: RefCell::new(HashMap::new()),
        }
    }

    pub fn present(&self, notification: Notification) {
        if let Err(e) = self.sink.show(&notification) {
            self.logger
                .error(&format!("Failed to show notification {}: {e}", notification.id));
        }

        let instance = AlertInstance {
            shown_at_ms: self.clock.now(),
            notification,
        };
        self.active
            .borrow_mut()
            .insert(instance.notification.id, instance);
    }

    /// Closes the alert for `id` and marks it read on the server.
    ///
    /// Returns `false` when no such alert is open, in which case no request is
    /// made. A failed mark-read is logged and not retried.
    pub async fn dismiss(&self, id: NotificationId) -> bool {
        let removed = self.active.borrow_mut().remove(&id);
        if removed.is_none() {
            return false;
        }

        if let Err(source) = self.api.mark_read(id).await {
            let err = NotificationError::MarkReadFailure { id, source };
            self.logger.warn(&err.to_string());
        }

        true
    }

    pub fn is_active(&self, id: NotificationId) -> bool {
        self.active.borrow().contains_key(&id)
    }

    pub fn active_count(&self) -> usize {
        self.active.borrow().len()
    }

    /// Open alerts, oldest first.
    pub fn active_alerts(&self) -> Vec<AlertInstance> {
        let mut alerts: Vec<_> = self.active.borrow().values().cloned().collect();
        alerts.sort_by(|a, b| {
            a.shown_at_ms
                .total_cmp(&b.shown_at_ms)
                .then(a.notification.id.cmp(&b.notification.id))
        });
        alerts
    }
}
