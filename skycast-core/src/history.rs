use crate::model::WeatherReading;

/// Most-recent-first list of past successful lookups, bounded to
/// [`SearchHistory::MAX_ENTRIES`] distinct cities.
///
/// Session-scoped only; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    entries: Vec<WeatherReading>,
}

impl SearchHistory {
    pub const MAX_ENTRIES: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful lookup.
    ///
    /// Dedup is by city name (case-insensitive), not full equality: a fresh
    /// reading for a city already present replaces the stale entry and moves
    /// to the front.
    pub fn record(&mut self, reading: WeatherReading) {
        self.entries.retain(|r| !r.city.eq_ignore_ascii_case(&reading.city));
        self.entries.insert(0, reading);
        self.entries.truncate(Self::MAX_ENTRIES);
    }

    pub fn entries(&self) -> &[WeatherReading] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reading(city: &str, temp: i32) -> WeatherReading {
        WeatherReading {
            city: city.to_string(),
            country: "GB".to_string(),
            temperature_c: temp,
            feels_like_c: Some(temp),
            description: "clear sky".to_string(),
            humidity_pct: 50,
            wind_speed_mps: 3.0,
            pressure_hpa: Some(1013),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn newest_entry_goes_to_the_front() {
        let mut history = SearchHistory::new();
        history.record(reading("Paris", 18));
        history.record(reading("Tokyo", 25));

        let cities: Vec<_> = history.entries().iter().map(|r| r.city.as_str()).collect();
        assert_eq!(cities, ["Tokyo", "Paris"]);
    }

    #[test]
    fn never_exceeds_five_entries() {
        let mut history = SearchHistory::new();
        for city in ["A", "B", "C", "D", "E", "F", "G"] {
            history.record(reading(city, 10));
        }

        assert_eq!(history.len(), SearchHistory::MAX_ENTRIES);
        let cities: Vec<_> = history.entries().iter().map(|r| r.city.as_str()).collect();
        assert_eq!(cities, ["G", "F", "E", "D", "C"]);
    }

    #[test]
    fn re_search_moves_city_to_front_without_duplicate() {
        let mut history = SearchHistory::new();
        history.record(reading("Paris", 18));
        history.record(reading("Tokyo", 25));
        history.record(reading("Paris", 20));

        let cities: Vec<_> = history.entries().iter().map(|r| r.city.as_str()).collect();
        assert_eq!(cities, ["Paris", "Tokyo"]);
        // The fresh reading replaced the stale one.
        assert_eq!(history.entries()[0].temperature_c, 20);
    }

    #[test]
    fn dedup_ignores_case() {
        let mut history = SearchHistory::new();
        history.record(reading("london", 12));
        history.record(reading("London", 14));

        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].city, "London");
        assert_eq!(history.entries()[0].temperature_c, 14);
    }
}
