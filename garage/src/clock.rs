use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of "now", injected so tests can control time.
pub trait Clock: Send + Sync {
    /// The current moment, as a duration since the Unix epoch.
    fn now(&self) -> Duration;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
    }
}

#[cfg(test)]
pub struct ManualClock(std::sync::Mutex<Duration>);
#[cfg(test)]
impl ManualClock {
    pub fn starting_at(now: Duration) -> Self {
        Self(std::sync::Mutex::new(now))
    }
    pub fn advance(&self, by: Duration) {
        *self.0.lock().unwrap() += by;
    }
}
#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.0.lock().unwrap()
    }
}
