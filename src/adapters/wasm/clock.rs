use crate::ports::clock::ClockPort;

/// Wall-clock time from `Date.now()`, so alert timestamps can be shown to users.
#[derive(Clone, Copy)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for Clock {
    fn now(&self) -> f64 {
        js_sys::Date::now()
    }

    fn is_available(&self) -> bool {
        true
    }
}
