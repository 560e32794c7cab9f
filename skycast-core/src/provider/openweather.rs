use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    error::WeatherError,
    model::{Query, WeatherReading, round_c},
};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host, for tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, query: &Query) -> Result<WeatherReading, WeatherError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        tracing::debug!(city = %query.city(), "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", query.city()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "request to OpenWeather failed");
                WeatherError::unavailable(format!("failed to reach OpenWeather: {e}"))
            })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| WeatherError::unavailable(format!("failed to read response body: {e}")))?;

        // OpenWeather signals an unknown city with HTTP 404 (`"cod": "404"`
        // in the body). Everything else non-2xx is a provider fault.
        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::CityNotFound(query.city().to_string()));
        }
        if !status.is_success() {
            tracing::warn!(%status, "OpenWeather returned an error status");
            return Err(WeatherError::unavailable(format!(
                "OpenWeather request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|e| {
            WeatherError::unavailable(format!("failed to parse OpenWeather JSON: {e}"))
        })?;

        Ok(map_current(parsed))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, query: &Query) -> Result<WeatherReading, WeatherError> {
        self.fetch_current(query).await
    }
}

fn map_current(parsed: OwCurrentResponse) -> WeatherReading {
    let fetched_at = parsed
        .dt
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .unwrap_or_else(Utc::now);

    let description = parsed
        .weather
        .first()
        .map(|w| w.description.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    WeatherReading {
        city: parsed.name,
        country: parsed.sys.country,
        temperature_c: round_c(parsed.main.temp),
        feels_like_c: parsed.main.feels_like.map(round_c),
        description,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
        pressure_hpa: parsed.main.pressure,
        fetched_at,
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: Option<f64>,
    humidity: u8,
    pressure: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    dt: Option<i64>,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary; slicing mid-character would panic.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
