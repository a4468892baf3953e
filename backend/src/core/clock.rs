//! Time sources for clock-derived seeds
//!
//! A generator built without an explicit seed reads the clock once and
//! scales it to 1/256 s ticks. The clock is injected so tests can pin the
//! derived seed.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Clock ticks per second used when deriving a seed from wall-clock time
pub const SEED_TICKS_PER_SECOND: f64 = 256.0;

/// Source of the current time, measured from the Unix epoch
pub trait Clock {
    /// Time elapsed since 1970-01-01T00:00:00Z
    fn now(&self) -> Duration;
}

/// Wall-clock time from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        // A clock set before 1970 reads as the epoch itself.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
    }
}

/// A clock frozen at a fixed instant
///
/// # Example
/// ```
/// use stable_random::core::clock::{seed_from_clock, FixedClock};
/// use std::time::Duration;
///
/// let clock = FixedClock::new(Duration::from_secs(2));
/// assert_eq!(seed_from_clock(&clock), 512);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    at: Duration,
}

impl FixedClock {
    pub fn new(at: Duration) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Duration {
        self.at
    }
}

/// Derive a 32-bit working seed from a clock reading
///
/// The reading is scaled to 1/256 s ticks, floored, and truncated to the
/// low 32 bits.
pub fn seed_from_clock<C: Clock + ?Sized>(clock: &C) -> u32 {
    let ticks = (clock.now().as_secs_f64() * SEED_TICKS_PER_SECOND) as u64;
    ticks as u32
}
