use catalog_core::Timestamp;
use catalog_ports::Clock;
use chrono::{Duration, Utc};
use parking_lot::RwLock;

/// Clock frozen at a settable instant
///
/// Time only moves through [`FixedClock::advance`] or [`FixedClock::set`],
/// which makes timestamp assertions deterministic.
pub struct FixedClock {
    current: RwLock<Timestamp>,
}

impl FixedClock {
    pub fn at(time: Timestamp) -> Self {
        Self {
            current: RwLock::new(time),
        }
    }

    /// Frozen at the current wall-clock time
    pub fn now_frozen() -> Self {
        Self::at(Utc::now())
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current.write();
        *current += by;
    }

    pub fn set(&self, time: Timestamp) {
        *self.current.write() = time;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.current.read()
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_only_moves_when_advanced() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clock = FixedClock::at(start);

        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::seconds(30));
        assert_eq!(clock.now(), start + Duration::seconds(30));
    }

    #[test]
    fn test_set_jumps() {
        let clock = FixedClock::now_frozen();
        let target = Utc.with_ymd_and_hms(2030, 6, 1, 8, 0, 0).unwrap();
        clock.set(target);
        assert_eq!(clock.now(), target);
    }
}
