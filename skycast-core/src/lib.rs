//! Core library for the `skycast` weather lookup.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The search/loading/error/history state machine
//! - Abstraction over the weather provider + the OpenWeather client
//! - Shared domain models (queries, readings, history, theming)
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod provider;
pub mod state;
pub mod theme;

pub use config::Config;
pub use error::WeatherError;
pub use history::SearchHistory;
pub use model::{Query, WeatherReading};
pub use provider::{WeatherProvider, provider_from_config};
pub use state::{Action, Effect, Phase, WidgetState};
pub use theme::{Backdrop, Theme};
