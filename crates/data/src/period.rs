//! Aggregation period for futures statistics endpoints.

use std::str::FromStr;

/// Bucket size accepted by the futures statistics endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    #[default]
    OneHour,
    TwoHours,
    FourHours,
    SixHours,
    TwelveHours,
    OneDay,
}

impl Period {
    /// Returns the API string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::FiveMinutes => "5m",
            Period::FifteenMinutes => "15m",
            Period::ThirtyMinutes => "30m",
            Period::OneHour => "1h",
            Period::TwoHours => "2h",
            Period::FourHours => "4h",
            Period::SixHours => "6h",
            Period::TwelveHours => "12h",
            Period::OneDay => "1d",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a period string is not supported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid period: '{0}'. Valid values: 5m, 15m, 30m, 1h, 2h, 4h, 6h, 12h, 1d")]
pub struct ParsePeriodError(pub String);

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "5m" => Ok(Period::FiveMinutes),
            "15m" => Ok(Period::FifteenMinutes),
            "30m" => Ok(Period::ThirtyMinutes),
            "1h" => Ok(Period::OneHour),
            "2h" => Ok(Period::TwoHours),
            "4h" => Ok(Period::FourHours),
            "6h" => Ok(Period::SixHours),
            "12h" => Ok(Period::TwelveHours),
            "1d" => Ok(Period::OneDay),
            _ => Err(ParsePeriodError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_as_str() {
        assert_eq!(Period::FiveMinutes.as_str(), "5m");
        assert_eq!(Period::OneHour.as_str(), "1h");
        assert_eq!(Period::OneDay.as_str(), "1d");
        assert_eq!(Period::default(), Period::OneHour);
    }

    #[test]
    fn test_period_from_str() {
        assert_eq!(Period::from_str("5m").unwrap(), Period::FiveMinutes);
        assert_eq!(Period::from_str("1H").unwrap(), Period::OneHour);
        assert_eq!(Period::from_str(" 12h ").unwrap(), Period::TwelveHours);
    }

    #[test]
    fn test_period_from_str_invalid() {
        let result = Period::from_str("1m");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid period"));
    }
}
