//! Source of "now" for timeframe defaults.

use chrono::{Datelike, Local};

/// Supplies the calendar year used when a timeframe has no explicit year.
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Wall-clock time in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// A clock pinned to one year, for reproducible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(2025).current_year(), 2025);
    }

    #[test]
    fn test_system_clock_is_plausible() {
        let year = SystemClock.current_year();
        assert!((2020..2200).contains(&year));
    }
}
