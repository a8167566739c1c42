/// Platform - Dependency injection container for all ports.
///
/// Hybrid approach:
/// - Stateless ports: `&'static` references (zero-cost)
/// - Stateful or swappable ports: `Rc<dyn Trait>`, replaceable with fakes in tests

use crate::ports::{ClockPort, LoggerPort, SessionStorePort, TimerPort};
use std::rc::Rc;

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    clock: &'static dyn ClockPort,
    timer: Rc<dyn TimerPort>,
    session_store: Rc<dyn SessionStorePort>,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
            clock: crate::adapters::clock(),
            timer: Rc::new(crate::adapters::Timer::new()),
            session_store: crate::adapters::default_session_store(),
        }
    }

    pub fn with_timer(mut self, timer: Rc<dyn TimerPort>) -> Self {
        self.timer = timer;
        self
    }

    pub fn with_session_store(mut self, session_store: Rc<dyn SessionStorePort>) -> Self {
        self.session_store = session_store;
        self
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn clock(&self) -> &'static dyn ClockPort {
        self.clock
    }

    pub fn timer(&self) -> Rc<dyn TimerPort> {
        self.timer.clone()
    }

    pub fn session_store(&self) -> Rc<dyn SessionStorePort> {
        self.session_store.clone()
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
