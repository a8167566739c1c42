//! In-memory fakes shared by the notification unit tests.

use super::{ApiError, Notification, NotificationError, NotificationId, PollerHandle};
use crate::adapters::MemorySessionStore;
use crate::platform::Platform;
use crate::ports::{AlertSinkPort, NotificationApiPort, SessionStorePort, TimerPort};
use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};
use std::time::Duration;

pub fn platform_with_store(store: MemorySessionStore) -> (Platform, Rc<MemorySessionStore>) {
    let store = Rc::new(store);
    let platform = Platform::new().with_session_store(store.clone());
    (platform, store)
}

pub struct FailingStore;

impl SessionStorePort for FailingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), NotificationError> {
        Err(NotificationError::storage("quota exceeded"))
    }
}

#[derive(Default)]
pub struct RecordingSink {
    shown: RefCell<Vec<Notification>>,
    failing: Cell<bool>,
}

impl RecordingSink {
    pub fn shown_ids(&self) -> Vec<NotificationId> {
        self.shown.borrow().iter().map(|n| n.id).collect()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }
}

impl AlertSinkPort for RecordingSink {
    fn show(&self, notification: &Notification) -> Result<(), String> {
        self.shown.borrow_mut().push(notification.clone());
        if self.failing.get() {
            return Err("toast container missing".to_string());
        }
        Ok(())
    }
}

/// Pending once, then ready; lets a concurrent future run in between.
#[derive(Default)]
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

type ScriptedFetch = (Option<oneshot::Receiver<()>>, Result<Vec<Notification>, ApiError>);

/// Replays queued fetch results; an empty queue yields an empty batch.
#[derive(Default)]
pub struct ScriptedApi {
    batches: RefCell<VecDeque<ScriptedFetch>>,
    yielding: Cell<bool>,
    fetches: Cell<usize>,
    mark_read_calls: RefCell<Vec<NotificationId>>,
    mark_read_error: RefCell<Option<ApiError>>,
}

impl ScriptedApi {
    pub fn push_batch(&self, batch: Vec<Notification>) {
        self.batches.borrow_mut().push_back((None, Ok(batch)));
    }

    /// Queues a batch whose fetch stays pending until the returned sender
    /// fires or is dropped.
    pub fn push_gated_batch(&self, batch: Vec<Notification>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.batches.borrow_mut().push_back((Some(rx), Ok(batch)));
        tx
    }

    pub fn push_error(&self, error: ApiError) {
        self.batches.borrow_mut().push_back((None, Err(error)));
    }

    /// Makes every fetch suspend once after taking its result.
    pub fn set_yielding(&self, yielding: bool) {
        self.yielding.set(yielding);
    }

    pub fn fail_mark_read(&self, error: ApiError) {
        *self.mark_read_error.borrow_mut() = Some(error);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }

    pub fn mark_read_calls(&self) -> Vec<NotificationId> {
        self.mark_read_calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl NotificationApiPort for ScriptedApi {
    async fn fetch_unread(&self) -> Result<Vec<Notification>, ApiError> {
        self.fetches.set(self.fetches.get() + 1);
        let next = self.batches.borrow_mut().pop_front();
        let (gate, result) = next.unwrap_or_else(|| (None, Ok(Vec::new())));
        if self.yielding.get() {
            YieldNow::default().await;
        }
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        result
    }

    async fn mark_read(&self, id: NotificationId) -> Result<(), ApiError> {
        self.mark_read_calls.borrow_mut().push(id);
        match self.mark_read_error.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Returns immediately and stops the armed poller on the `stop_after`-th sleep.
pub struct StoppingTimer {
    stop_after: usize,
    requested: RefCell<Vec<Duration>>,
    handle: RefCell<Option<PollerHandle>>,
}

impl StoppingTimer {
    pub fn after(stop_after: usize) -> Self {
        Self {
            stop_after,
            requested: RefCell::new(Vec::new()),
            handle: RefCell::new(None),
        }
    }

    pub fn arm(&self, handle: PollerHandle) {
        *self.handle.borrow_mut() = Some(handle);
    }

    pub fn requested(&self) -> Vec<Duration> {
        self.requested.borrow().clone()
    }
}

#[async_trait(?Send)]
impl TimerPort for StoppingTimer {
    async fn sleep(&self, duration: Duration) {
        self.requested.borrow_mut().push(duration);
        if self.requested.borrow().len() >= self.stop_after {
            if let Some(handle) = self.handle.borrow_mut().as_mut() {
                handle.stop();
            }
        }
    }
}
