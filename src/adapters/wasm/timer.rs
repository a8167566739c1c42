use crate::config::timeout_millis;
use crate::ports::TimerPort;
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;

/// Browser timer built on `setTimeout`.
#[derive(Clone, Copy, Default)]
pub struct Timer;

impl Timer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl TimerPort for Timer {
    async fn sleep(&self, duration: Duration) {
        TimeoutFuture::new(timeout_millis(duration)).await;
    }
}
