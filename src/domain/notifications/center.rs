use super::poller::{Poller, PollerHandle};
use super::presenter::AlertPresenter;
use super::types::{AlertInstance, NotificationId, TickOutcome};
use crate::config::PollerConfig;
use crate::platform::Platform;
use crate::ports::{AlertSinkPort, NotificationApiPort};
use futures::future::LocalBoxFuture;
use std::cell::RefCell;
use std::rc::Rc;

/// The admin notification feature wired together: poller, seen set, alert
/// presenter, and the handle that tears them down.
pub struct NotificationCenter {
    poller: Rc<Poller>,
    presenter: Rc<AlertPresenter>,
    handle: RefCell<PollerHandle>,
}

impl NotificationCenter {
    /// Builds the center and returns it with the driver future, which the
    /// caller spawns on its single-threaded executor.
    pub fn start(
        platform: &Platform,
        config: &PollerConfig,
        api: Rc<dyn NotificationApiPort>,
        sink: Rc<dyn AlertSinkPort>,
    ) -> (Self, LocalBoxFuture<'static, ()>) {
        let presenter = Rc::new(AlertPresenter::new(platform, sink, api.clone()));
        let poller = Rc::new(Poller::new(platform, config, api, presenter.clone()));
        let (handle, driver) = poller.clone().start();

        let center = Self {
            poller,
            presenter,
            handle: RefCell::new(handle),
        };
        (center, driver)
    }

    pub async fn dismiss(&self, id: NotificationId) -> bool {
        self.presenter.dismiss(id).await
    }

    /// Polls right away, outside the regular schedule.
    pub async fn poll_now(&self) -> TickOutcome {
        self.poller.tick().await
    }

    pub fn active_alerts(&self) -> Vec<AlertInstance> {
        self.presenter.active_alerts()
    }

    pub fn seen_ids(&self) -> Vec<NotificationId> {
        self.poller.seen_ids()
    }

    pub fn stop(&self) {
        self.handle.borrow_mut().stop();
    }

    pub fn is_running(&self) -> bool {
        self.handle.borrow().is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySessionStore;
    use crate::domain::notifications::test_support::{
        platform_with_store, RecordingSink, ScriptedApi,
    };
    use crate::domain::notifications::Notification;
    use futures::executor::block_on;

    #[test]
    fn test_poll_then_dismiss() {
        let (platform, _) = platform_with_store(MemorySessionStore::new());
        let api = Rc::new(ScriptedApi::default());
        let sink = Rc::new(RecordingSink::default());
        api.push_batch(vec![Notification::new(3, "New order #3")]);

        let (center, _driver) =
            NotificationCenter::start(&platform, &PollerConfig::default(), api.clone(), sink.clone());

        assert_eq!(block_on(center.poll_now()).presented, 1);
        assert_eq!(center.active_alerts().len(), 1);

        assert!(block_on(center.dismiss(3)));
        assert!(center.active_alerts().is_empty());
        assert_eq!(api.mark_read_calls(), vec![3]);
        assert_eq!(center.seen_ids(), vec![3]);
    }

    #[test]
    fn test_stop_ends_driver() {
        let (platform, _) = platform_with_store(MemorySessionStore::new());
        let (center, driver) = NotificationCenter::start(
            &platform,
            &PollerConfig::default(),
            Rc::new(ScriptedApi::default()),
            Rc::new(RecordingSink::default()),
        );

        assert!(center.is_running());
        center.stop();
        block_on(driver);
        assert!(!center.is_running());
    }
}
