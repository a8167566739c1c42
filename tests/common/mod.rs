#![allow(dead_code)]

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use storefront_admin_notifications::adapters::MemorySessionStore;
use storefront_admin_notifications::ports::{AlertSinkPort, NotificationApiPort};
use storefront_admin_notifications::{ApiError, Notification, NotificationId, Platform};

pub fn platform_with(store: Rc<MemorySessionStore>) -> Platform {
    Platform::new().with_session_store(store)
}

#[derive(Default)]
pub struct FakeApi {
    batches: RefCell<VecDeque<Result<Vec<Notification>, ApiError>>>,
    fetches: Cell<usize>,
    mark_read: RefCell<Vec<NotificationId>>,
    mark_read_fails: Cell<bool>,
}

impl FakeApi {
    pub fn respond(&self, batch: Vec<(NotificationId, &str)>) {
        let batch = batch
            .into_iter()
            .map(|(id, message)| Notification::new(id, message))
            .collect();
        self.batches.borrow_mut().push_back(Ok(batch));
    }

    pub fn fail(&self, error: ApiError) {
        self.batches.borrow_mut().push_back(Err(error));
    }

    pub fn set_mark_read_fails(&self, fails: bool) {
        self.mark_read_fails.set(fails);
    }

    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }

    pub fn mark_read_calls(&self) -> Vec<NotificationId> {
        self.mark_read.borrow().clone()
    }
}

#[async_trait(?Send)]
impl NotificationApiPort for FakeApi {
    async fn fetch_unread(&self) -> Result<Vec<Notification>, ApiError> {
        self.fetches.set(self.fetches.get() + 1);
        self.batches
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn mark_read(&self, id: NotificationId) -> Result<(), ApiError> {
        self.mark_read.borrow_mut().push(id);
        if self.mark_read_fails.get() {
            Err(ApiError::Network("connection reset".to_string()))
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
pub struct CollectingSink {
    shown: RefCell<Vec<Notification>>,
}

impl CollectingSink {
    pub fn ids(&self) -> Vec<NotificationId> {
        self.shown.borrow().iter().map(|n| n.id).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.shown.borrow().iter().map(|n| n.message.clone()).collect()
    }
}

impl AlertSinkPort for CollectingSink {
    fn show(&self, notification: &Notification) -> Result<(), String> {
        self.shown.borrow_mut().push(notification.clone());
        Ok(())
    }
}
