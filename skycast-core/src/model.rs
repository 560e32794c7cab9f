use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// A validated city-name candidate.
///
/// The only local validation is trim + non-empty; resolving the name to an
/// actual place is the provider's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn parse(raw: &str) -> Result<Self, WeatherError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WeatherError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn city(&self) -> &str {
        &self.0
    }
}

/// One mapped weather result for a city at fetch time.
///
/// Immutable after creation; produced once per successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    pub country: String,
    pub temperature_c: i32,
    pub feels_like_c: Option<i32>,
    pub description: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub pressure_hpa: Option<u32>,
    pub fetched_at: DateTime<Utc>,
}

/// Round a Celsius value to the nearest whole degree.
///
/// Ties round away from zero: 20.5 becomes 21.
pub fn round_c(value: f64) -> i32 {
    value.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_rejects_empty_and_whitespace() {
        assert!(matches!(Query::parse(""), Err(WeatherError::EmptyQuery)));
        assert!(matches!(Query::parse("   "), Err(WeatherError::EmptyQuery)));
        assert!(matches!(Query::parse("\t\n"), Err(WeatherError::EmptyQuery)));
    }

    #[test]
    fn query_trims_but_does_not_normalize() {
        let q = Query::parse("  New York  ").expect("non-empty query must parse");
        assert_eq!(q.city(), "New York");

        let q = Query::parse("LONDON").expect("non-empty query must parse");
        assert_eq!(q.city(), "LONDON");
    }

    #[test]
    fn rounding_is_nearest_with_ties_away_from_zero() {
        assert_eq!(round_c(15.4), 15);
        assert_eq!(round_c(14.6), 15);
        assert_eq!(round_c(20.5), 21);
        assert_eq!(round_c(-0.5), -1);
        assert_eq!(round_c(0.0), 0);
    }
}
