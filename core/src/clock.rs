use alloc::format;
use alloc::string::String;
use core::cell::Cell;
use serde::{Deserialize, Serialize};
use web_time::{Instant, SystemTime};

/// Time source for the stopwatch and history timestamps.
pub trait Clock {
    /// Monotonic milliseconds from an arbitrary origin.
    fn now_millis(&self) -> u64;

    /// Milliseconds since the unix epoch.
    fn wall_millis(&self) -> u64;
}

#[derive(Copy, Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis().try_into().unwrap_or(u64::MAX)
    }

    fn wall_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_or(0, |since| since.as_millis().try_into().unwrap_or(u64::MAX))
    }
}

/// Clock that only moves when told to.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
    wall: Cell<u64>,
}

impl ManualClock {
    pub fn new(wall_millis: u64) -> Self {
        Self {
            now: Cell::new(0),
            wall: Cell::new(wall_millis),
        }
    }

    pub fn advance_millis(&self, millis: u64) {
        self.now.set(self.now.get().saturating_add(millis));
        self.wall.set(self.wall.get().saturating_add(millis));
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance_millis(secs.saturating_mul(1000));
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }

    fn wall_millis(&self) -> u64 {
        self.wall.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }

    fn wall_millis(&self) -> u64 {
        (**self).wall_millis()
    }
}

/// Measures a round's play time in whole seconds. Only observes the clock, never touches game state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stopwatch {
    started_at: Option<u64>,
    stopped_at: Option<u64>,
}

impl Stopwatch {
    pub fn start(&mut self, clock: &impl Clock) {
        self.started_at = Some(clock.now_millis());
        self.stopped_at = None;
    }

    pub fn stop(&mut self, clock: &impl Clock) {
        if self.started_at.is_some() && self.stopped_at.is_none() {
            self.stopped_at = Some(clock.now_millis());
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_at.is_none()
    }

    pub fn elapsed_secs(&self, clock: &impl Clock) -> u64 {
        let Some(started_at) = self.started_at else {
            return 0;
        };
        let until = self.stopped_at.unwrap_or_else(|| clock.now_millis());
        until.saturating_sub(started_at) / 1000
    }
}

/// `MM:SS`, minutes keep growing past 99.
pub fn format_elapsed(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopwatch_floors_to_whole_seconds() {
        let clock = ManualClock::new(0);
        let mut stopwatch = Stopwatch::default();

        stopwatch.start(&clock);
        clock.advance_millis(2_999);

        assert_eq!(stopwatch.elapsed_secs(&clock), 2);
        assert!(stopwatch.is_running());
    }

    #[test]
    fn stopped_stopwatch_ignores_later_time() {
        let clock = ManualClock::new(0);
        let mut stopwatch = Stopwatch::default();

        stopwatch.start(&clock);
        clock.advance_secs(12);
        stopwatch.stop(&clock);
        clock.advance_secs(100);

        assert_eq!(stopwatch.elapsed_secs(&clock), 12);
        assert!(!stopwatch.is_running());
    }

    #[test]
    fn idle_stopwatch_reads_zero() {
        let clock = ManualClock::new(0);
        clock.advance_secs(5);

        let mut stopwatch = Stopwatch::default();
        assert_eq!(stopwatch.elapsed_secs(&clock), 0);

        stopwatch.start(&clock);
        clock.advance_secs(5);
        stopwatch.reset();
        assert_eq!(stopwatch.elapsed_secs(&clock), 0);
    }

    #[test]
    fn manual_clock_moves_wall_time_too() {
        let clock = ManualClock::new(1_000);
        clock.advance_secs(2);

        assert_eq!(clock.now_millis(), 2_000);
        assert_eq!(clock.wall_millis(), 3_000);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now_millis();

        assert!(clock.now_millis() >= first);
        assert!(clock.wall_millis() > 0);
    }

    #[test]
    fn format_pads_minutes_and_seconds() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(75), "01:15");
        assert_eq!(format_elapsed(6_000), "100:00");
    }
}
