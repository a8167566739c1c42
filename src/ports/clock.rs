/// Port for reading wall-clock time, used to stamp alerts when they are shown.
pub trait ClockPort: Send + Sync {
    /// Returns the current timestamp in milliseconds
    fn now(&self) -> f64;

    /// Checks if a time source is available on this platform
    fn is_available(&self) -> bool;
}
