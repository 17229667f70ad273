//! Time-series primitives.
//!
//! Every series produced by a provider client is ordered ascending by
//! timestamp. An empty series is a valid observation and is distinct from an
//! unavailable one, which is modelled as `None` by the owner of the series.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single observation at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint<T> {
    /// Observation time in epoch milliseconds
    pub timestamp_ms: i64,
    /// Observed value
    pub value: T,
}

impl<T> TimePoint<T> {
    /// Creates a new time point.
    pub const fn new(timestamp_ms: i64, value: T) -> Self {
        Self {
            timestamp_ms,
            value,
        }
    }

    /// Returns the observation time as a UTC datetime.
    #[must_use]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp_ms).single()
    }
}

/// An ordered sequence of observations.
pub type Series<T> = Vec<TimePoint<T>>;

/// Returns the value of the chronologically latest point.
#[must_use]
pub fn latest_value<T: Copy>(series: &[TimePoint<T>]) -> Option<T> {
    series.last().map(|p| p.value)
}

/// Returns true if timestamps never decrease.
#[must_use]
pub fn is_ascending<T>(series: &[TimePoint<T>]) -> bool {
    series
        .windows(2)
        .all(|w| w[0].timestamp_ms <= w[1].timestamp_ms)
}

/// Sorts a series ascending by timestamp.
///
/// The sort is stable so points sharing a timestamp keep provider order.
pub fn sort_ascending<T>(series: &mut [TimePoint<T>]) {
    series.sort_by_key(|p| p.timestamp_ms);
}

/// A price candle without volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// Candle open time in epoch milliseconds
    pub timestamp_ms: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

impl Candle {
    /// Returns the candle open time as a UTC datetime.
    #[must_use]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp_ms).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rust_decimal_macros::dec;

    #[test]
    fn test_latest_value() {
        let series = vec![
            TimePoint::new(1_000, 0.5),
            TimePoint::new(2_000, 0.7),
            TimePoint::new(3_000, 0.9),
        ];
        assert_eq!(latest_value(&series), Some(0.9));

        let empty: Series<f64> = Vec::new();
        assert_eq!(latest_value(&empty), None);
    }

    #[test]
    fn test_is_ascending() {
        let ascending = vec![TimePoint::new(1, 1.0), TimePoint::new(1, 2.0), TimePoint::new(5, 3.0)];
        assert!(is_ascending(&ascending));

        let descending = vec![TimePoint::new(5, 1.0), TimePoint::new(1, 2.0)];
        assert!(!is_ascending(&descending));

        let empty: Series<f64> = Vec::new();
        assert!(is_ascending(&empty));
    }

    #[test]
    fn test_sort_ascending_is_stable() {
        let mut series = vec![
            TimePoint::new(3, 'c'),
            TimePoint::new(1, 'a'),
            TimePoint::new(3, 'd'),
            TimePoint::new(2, 'b'),
        ];
        sort_ascending(&mut series);

        let values: Vec<char> = series.iter().map(|p| p.value).collect();
        assert_eq!(values, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_time_conversion() {
        let point = TimePoint::new(1_706_616_000_000, 1.0);
        let time = point.time().unwrap();
        assert_eq!(time.year(), 2024);
        assert_eq!(time.month(), 1);
        assert_eq!(time.day(), 30);

        let candle = Candle {
            timestamp_ms: 1_706_616_000_000,
            open: dec!(1),
            high: dec!(2),
            low: dec!(0.5),
            close: dec!(1.5),
        };
        assert_eq!(candle.time(), point.time());
    }
}
