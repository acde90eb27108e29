use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Time source injected into the synthesizer (seed) and the resize debouncer (quiet period).
pub trait Clock: Send + Sync {
    /// Wall-clock time truncated to whole seconds since the unix epoch.
    fn unix_secs(&self) -> u64;

    /// Monotonic time since an arbitrary fixed origin.
    fn monotonic(&self) -> Duration;
}

/// Clock backed by the operating system.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn unix_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    fn monotonic(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock for tests and offline replay.
#[derive(Debug, Default)]
pub struct ManualClock {
    unix_secs: AtomicU64,
    monotonic_ms: AtomicU64,
}

impl ManualClock {
    pub fn new(unix_secs: u64) -> Self {
        Self {
            unix_secs: AtomicU64::new(unix_secs),
            monotonic_ms: AtomicU64::new(0),
        }
    }

    pub fn set_unix_secs(&self, secs: u64) {
        self.unix_secs.store(secs, Ordering::SeqCst);
    }

    /// Advance monotonic time; wall-clock seconds follow whole-second crossings.
    pub fn advance(&self, by: Duration) {
        let before = self.monotonic_ms.load(Ordering::SeqCst);
        let after = before.saturating_add(by.as_millis() as u64);
        self.monotonic_ms.store(after, Ordering::SeqCst);
        let crossed = after / 1000 - before / 1000;
        self.unix_secs.fetch_add(crossed, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn unix_secs(&self) -> u64 {
        self.unix_secs.load(Ordering::SeqCst)
    }

    fn monotonic(&self) -> Duration {
        Duration::from_millis(self.monotonic_ms.load(Ordering::SeqCst))
    }
}
