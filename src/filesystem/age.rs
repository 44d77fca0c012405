// src/filesystem/age.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_DAY: u64 = 86_400_000;

/// Whole days, hours and minutes elapsed since a file was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgeBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

impl AgeBreakdown {
    /// Leftover seconds and milliseconds are dropped.
    pub fn from_millis(elapsed_ms: u64) -> Self {
        AgeBreakdown {
            days: elapsed_ms / MS_PER_DAY,
            hours: (elapsed_ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (elapsed_ms % MS_PER_HOUR) / MS_PER_MINUTE,
        }
    }

    /// A `created` later than `now` (clock skew) counts as zero age.
    pub fn between(created: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let elapsed = (now - created).num_milliseconds().max(0);
        Self::from_millis(elapsed as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_one_day_one_hour_one_minute() {
        let age = AgeBreakdown::from_millis(90_061_000);
        assert_eq!(age, AgeBreakdown { days: 1, hours: 1, minutes: 1 });
    }

    #[test]
    fn test_components_stay_in_range() {
        let age = AgeBreakdown::from_millis(MS_PER_DAY - 1);
        assert_eq!(age, AgeBreakdown { days: 0, hours: 23, minutes: 59 });

        let age = AgeBreakdown::from_millis(10 * MS_PER_DAY + 59_999);
        assert_eq!(age, AgeBreakdown { days: 10, hours: 0, minutes: 0 });
    }

    #[test]
    fn test_between_timestamps() {
        let now = Utc::now();
        let created = now - Duration::milliseconds(90_061_000);
        assert_eq!(
            AgeBreakdown::between(created, now),
            AgeBreakdown { days: 1, hours: 1, minutes: 1 }
        );
    }

    #[test]
    fn test_future_creation_is_zero() {
        let now = Utc::now();
        let created = now + Duration::hours(3);
        assert_eq!(AgeBreakdown::between(created, now), AgeBreakdown::default());
    }
}
