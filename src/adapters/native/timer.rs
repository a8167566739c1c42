use crate::ports::TimerPort;
use async_trait::async_trait;
use std::time::Duration;

/// Native timer backed by tokio. Must be polled inside a tokio runtime.
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
        tokio::time::sleep(duration).await;
    }
}
