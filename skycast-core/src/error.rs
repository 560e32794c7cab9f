use thiserror::Error;

/// Everything that can go wrong between hitting submit and seeing a reading.
///
/// All three variants are recoverable: the next submission is the only retry
/// path. `CityNotFound` and `ProviderUnavailable` render as one user-facing
/// message each, but stay distinguishable for callers and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    #[error("Please enter a city name")]
    EmptyQuery,

    #[error("City '{0}' not found")]
    CityNotFound(String),

    #[error("Weather service unavailable: {0}")]
    ProviderUnavailable(String),
}

impl WeatherError {
    /// Wrap any transport/parse fault as `ProviderUnavailable`.
    pub fn unavailable(err: impl std::fmt::Display) -> Self {
        Self::ProviderUnavailable(err.to_string())
    }
}
