/// Process-wide stateless adapters, selected at compile time for the build target.
///
/// Browser builds log to the console and read `Date.now()`; native builds go
/// through the `log` facade and `SystemTime`.
use crate::ports::{ClockPort, LoggerPort};
use lazy_static::lazy_static;

#[cfg(not(target_arch = "wasm32"))]
use crate::adapters::native::{Clock, ConsoleLogger};
#[cfg(target_arch = "wasm32")]
use crate::adapters::wasm::{Clock, ConsoleLogger};

lazy_static! {
    static ref LOGGER: ConsoleLogger = ConsoleLogger::new();
    static ref CLOCK: Clock = Clock::new();
}

#[inline]
pub fn logger() -> &'static dyn LoggerPort {
    &*LOGGER
}

pub fn clock() -> &'static dyn ClockPort {
    &*CLOCK
}
