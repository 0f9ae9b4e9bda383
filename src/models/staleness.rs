use super::chart_data::{ChartData, Dataset};
use crate::config::Config;
use chrono::{DateTime, Utc};

const MS_PER_DAY: u64 = 1000 * 3600 * 24;

/// Whole days between two instants, rounded up.
///
/// Direction is ignored, so a point in the future counts the same as one in
/// the past. Any fraction of a day counts as a full day: one millisecond
/// past three days is four days.
pub fn elapsed_days(latest: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let elapsed_ms = (now - latest).num_milliseconds().unsigned_abs();
    elapsed_ms.div_ceil(MS_PER_DAY)
}

/// True if the dataset's most recent point is past the freshness threshold.
///
/// A dataset without points has nothing to measure and is never stale.
pub fn dataset_is_stale(dataset: &Dataset, now: DateTime<Utc>) -> bool {
    dataset
        .latest()
        .is_some_and(|point| elapsed_days(point.x, now) > Config::STALE_AFTER_DAYS)
}

/// True if at least one dataset is stale.
pub fn is_stale(data: &ChartData, now: DateTime<Utc>) -> bool {
    data.datasets
        .iter()
        .any(|dataset| dataset_is_stale(dataset, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_elapsed_days_rounds_up() {
        assert_eq!(elapsed_days(now(), now()), 0);
        assert_eq!(elapsed_days(now() - Duration::milliseconds(1), now()), 1);
        assert_eq!(elapsed_days(now() - Duration::days(3), now()), 3);
        assert_eq!(
            elapsed_days(now() - Duration::days(3) - Duration::milliseconds(1), now()),
            4
        );
    }

    #[test]
    fn test_elapsed_days_ignores_direction() {
        let ahead = now() + Duration::hours(80);
        assert_eq!(elapsed_days(ahead, now()), 4);
    }
}
