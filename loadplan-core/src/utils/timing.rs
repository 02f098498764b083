use std::time::{Duration, Instant};

/// Implements performance timer functionality.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed time in milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        (Instant::now() - self.start).as_millis()
    }

    /// Returns elapsed duration.
    pub fn elapsed(&self) -> Duration {
        Instant::now() - self.start
    }

    /// Runs the action and returns its result together with the time it took.
    pub fn measure_duration<R, F: FnOnce() -> R>(action: F) -> (R, Duration) {
        let start = Instant::now();
        let result = action();

        (result, Instant::now() - start)
    }
}
