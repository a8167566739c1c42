use async_trait::async_trait;
use std::time::Duration;

/// Port for suspending the current task, used to drive the polling interval.
///
/// Implementations must not block the thread: the poller keeps in-flight
/// fetches progressing while it waits for the next tick.
#[async_trait(?Send)]
pub trait TimerPort {
    async fn sleep(&self, duration: Duration);
}
