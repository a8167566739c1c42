use super::error::NotificationError;
use super::presenter::AlertPresenter;
use super::seen_set::SeenSet;
use super::types::{NotificationId, TickOutcome};
use crate::config::PollerConfig;
use crate::measure::Timing;
use crate::platform::Platform;
use crate::ports::{LoggerPort, NotificationApiPort, TimerPort};
use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use futures::stream::{FuturesUnordered, StreamExt};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Periodically fetches unread notifications and presents the ones this
/// session has not seen yet.
///
/// The timer keeps running while a fetch is pending, so slow fetches can
/// overlap. Every await point is outside the seen-set check-and-insert, which
/// keeps deduplication sound on a single-threaded executor. Porting this to a
/// multi-threaded runtime requires guarding `seen` with a mutex.
pub struct Poller {
    api: Rc<dyn NotificationApiPort>,
    seen: RefCell<SeenSet>,
    presenter: Rc<AlertPresenter>,
    timer: Rc<dyn TimerPort>,
    logger: &'static dyn LoggerPort,
    interval: Duration,
    alive: Rc<Cell<bool>>,
    ticks: Cell<u64>,
}

/// Tears the poller down when stopped or dropped.
pub struct PollerHandle {
    alive: Rc<Cell<bool>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl PollerHandle {
    pub fn stop(&mut self) {
        self.alive.set(false);
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_running(&self) -> bool {
        self.alive.get()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Poller {
    pub fn new(
        platform: &Platform,
        config: &PollerConfig,
        api: Rc<dyn NotificationApiPort>,
        presenter: Rc<AlertPresenter>,
    ) -> Self {
        Self {
            api,
            seen: RefCell::new(SeenSet::load(platform, &config.seen_storage_key)),
            presenter,
            timer: platform.timer(),
            logger: platform.logger(),
            interval: config.poll_interval,
            alive: Rc::new(Cell::new(true)),
            ticks: Cell::new(0),
        }
    }

    /// Splits the poller into its teardown handle and the future that drives
    /// it. The future must be spawned on a single-threaded executor; it
    /// resolves once the handle is stopped or dropped.
    pub fn start(self: Rc<Self>) -> (PollerHandle, LocalBoxFuture<'static, ()>) {
        let (tx, rx) = oneshot::channel();
        let handle = PollerHandle {
            alive: self.alive.clone(),
            shutdown: Some(tx),
        };
        let driver = async move { self.run(rx).await }.boxed_local();
        (handle, driver)
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    pub fn seen_ids(&self) -> Vec<NotificationId> {
        self.seen.borrow().ids()
    }

    // Ticks overlap, and console timers are keyed by label.
    fn next_tick_label(&self) -> String {
        let tick = self.ticks.get() + 1;
        self.ticks.set(tick);
        format!("admin_notifications_tick#{tick}")
    }

    async fn run(&self, shutdown: oneshot::Receiver<()>) {
        let mut shutdown = shutdown.fuse();
        let mut in_flight = FuturesUnordered::new();

        self.logger.log(&format!(
            "Admin notification poller started (every {}s)",
            self.interval.as_secs_f64()
        ));

        while self.is_alive() {
            in_flight.push(self.tick());

            let mut sleep = self.timer.sleep(self.interval).fuse();
            loop {
                futures::select_biased! {
                    _ = in_flight.select_next_some() => {},
                    _ = shutdown => {
                        self.alive.set(false);
                        break;
                    }
                    _ = sleep => break,
                }
            }
        }

        if !in_flight.is_empty() {
            self.logger.log(&format!(
                "Dropping {} in-flight notification fetch(es)",
                in_flight.len()
            ));
        }
        self.logger.log("Admin notification poller stopped");
    }

    /// Runs one poll: fetch, skip what was already seen, present the rest in
    /// server order.
    pub async fn tick(&self) -> TickOutcome {
        let _timing = Timing::start(self.logger, self.next_tick_label());

        let batch = match self.api.fetch_unread().await {
            Ok(batch) => batch,
            Err(source) => {
                self.logger
                    .warn(&NotificationError::FetchFailure(source).to_string());
                return TickOutcome::default();
            }
        };

        let mut outcome = TickOutcome {
            fetched: batch.len(),
            presented: 0,
        };

        for notification in batch {
            if !self.is_alive() {
                self.logger
                    .log("Poller stopped during a fetch; leaving the rest unread");
                break;
            }

            {
                let mut seen = self.seen.borrow_mut();
                if seen.contains(notification.id) {
                    continue;
                }
                seen.add(notification.id);
            }

            self.presenter.present(notification);
            outcome.presented += 1;
        }

        outcome
    }
}
