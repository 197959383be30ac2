use std::time::{SystemTime, UNIX_EPOCH};

/// A source of wall-clock time for id generation.
///
/// The generator subtracts the layout's epoch from this value, so
/// implementations must return microseconds since the Unix epoch. Tests
/// substitute deterministic clocks to drive sequence and rollover behavior.
pub trait TimeSource {
    /// Current time in microseconds since the Unix epoch.
    fn current_micros(&self) -> i64;
}

/// The system wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_micros(&self) -> i64 {
        // A clock before 1970 reads as the epoch itself.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_micros() as i64)
    }
}
