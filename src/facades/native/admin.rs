/// Native Rust facade for the admin notification poller.
/// Wires the HTTP client and the log-backed alert sink around the domain.
use crate::adapters::{HttpNotificationApi, LogAlertSink};
use crate::config::PollerConfig;
use crate::domain::notifications::{
    AlertInstance, NotificationCenter, NotificationError, NotificationId, TickOutcome,
};
use crate::platform::Platform;
use crate::ports::{AlertSinkPort, NotificationApiPort};
use futures::future::LocalBoxFuture;
use std::rc::Rc;

pub struct AdminNotifications {
    center: NotificationCenter,
}

impl AdminNotifications {
    /// Configures from `STOREFRONT_API_URL` and logs alerts.
    ///
    /// The returned future drives polling and needs a tokio `LocalSet`
    /// (or `current_thread` runtime with `spawn_local`).
    pub fn from_env() -> Result<(Self, LocalBoxFuture<'static, ()>), NotificationError> {
        Self::start(&PollerConfig::from_env(), Rc::new(LogAlertSink::new()))
    }

    pub fn start(
        config: &PollerConfig,
        sink: Rc<dyn AlertSinkPort>,
    ) -> Result<(Self, LocalBoxFuture<'static, ()>), NotificationError> {
        let api = HttpNotificationApi::from_config(config)?;
        Ok(Self::with_platform(&Platform::new(), config, Rc::new(api), sink))
    }

    pub fn with_platform(
        platform: &Platform,
        config: &PollerConfig,
        api: Rc<dyn NotificationApiPort>,
        sink: Rc<dyn AlertSinkPort>,
    ) -> (Self, LocalBoxFuture<'static, ()>) {
        let (center, driver) = NotificationCenter::start(platform, config, api, sink);
        (Self { center }, driver)
    }

    pub async fn dismiss(&self, id: NotificationId) -> bool {
        self.center.dismiss(id).await
    }

    pub async fn poll_now(&self) -> TickOutcome {
        self.center.poll_now().await
    }

    pub fn active_alerts(&self) -> Vec<AlertInstance> {
        self.center.active_alerts()
    }

    pub fn seen_ids(&self) -> Vec<NotificationId> {
        self.center.seen_ids()
    }

    pub fn stop(&self) {
        self.center.stop();
    }

    pub fn is_running(&self) -> bool {
        self.center.is_running()
    }
}
