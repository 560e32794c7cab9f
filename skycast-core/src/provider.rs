use crate::{
    Config,
    error::WeatherError,
    model::{Query, WeatherReading},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// One current-conditions lookup against the external weather provider.
///
/// The trait is the seam the state-machine driver and the tests mock; the
/// only production implementation is [`OpenWeatherProvider`].
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, query: &Query) -> Result<WeatherReading, WeatherError>;
}

/// Construct the provider from config.
///
/// Fails up front when no API key is configured; a lookup never starts with
/// a missing credential.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.resolved_api_key()?;
    Ok(Box::new(OpenWeatherProvider::new(api_key)))
}
