//! The search/loading/error/history state machine.
//!
//! `WidgetState` is a pure reducer: applying an [`Action`] mutates the state
//! synchronously and may hand back an [`Effect`] for the driver to execute.
//! The network call itself never happens in here, which is what makes the
//! whole machine testable without a provider.

use crate::error::WeatherError;
use crate::history::SearchHistory;
use crate::model::{Query, WeatherReading};

/// Where the widget currently is in one lookup cycle.
///
/// A reading and an error message can never coexist: `Success` and `Failure`
/// are separate variants rather than two optional fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Loading { city: String, token: u64 },
    Success(WeatherReading),
    Failure(WeatherError),
}

/// Everything the user (or the driver) can do to the widget.
#[derive(Debug, Clone)]
pub enum Action {
    /// Raw text submitted from the input field.
    Submit(String),
    /// A history chip was clicked: re-run the lookup for that city.
    Replay(String),
    /// A fetch issued earlier came back.
    Resolved {
        token: u64,
        outcome: Result<WeatherReading, WeatherError>,
    },
    ToggleDarkMode,
}

/// Side effect requested by the reducer, executed by the driver.
/// The fetch carries the already-validated query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch { query: Query, token: u64 },
}

#[derive(Debug, Clone)]
pub struct WidgetState {
    phase: Phase,
    history: SearchHistory,
    dark_mode: bool,
    next_token: u64,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            history: SearchHistory::new(),
            dark_mode: false,
            next_token: 0,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Current reading, if the last lookup settled successfully.
    pub fn reading(&self) -> Option<&WeatherReading> {
        match &self.phase {
            Phase::Success(reading) => Some(reading),
            _ => None,
        }
    }

    /// Current error, if the last lookup settled with a failure.
    pub fn error(&self) -> Option<&WeatherError> {
        match &self.phase {
            Phase::Failure(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// Apply one action, returning the effect the driver must run, if any.
    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Submit(raw) => self.submit(&raw),
            Action::Replay(city) => self.submit(&city),
            Action::Resolved { token, outcome } => {
                self.resolve(token, outcome);
                None
            }
            Action::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                None
            }
        }
    }

    fn submit(&mut self, raw: &str) -> Option<Effect> {
        let query = match Query::parse(raw) {
            Ok(q) => q,
            Err(err) => {
                // Invalid input never reaches the network.
                self.phase = Phase::Failure(err);
                return None;
            }
        };

        self.next_token += 1;
        let token = self.next_token;
        let city = query.city().to_string();

        tracing::debug!(%city, token, "lookup submitted");
        self.phase = Phase::Loading { city, token };

        Some(Effect::Fetch { query, token })
    }

    fn resolve(&mut self, token: u64, outcome: Result<WeatherReading, WeatherError>) {
        // Only the most recently issued fetch may settle the phase. A stale
        // response from a superseded submission is dropped so that rapid
        // re-submission cannot leave the widget showing the wrong city.
        match &self.phase {
            Phase::Loading { token: current, .. } if *current == token => {}
            _ => {
                tracing::debug!(token, "dropping stale fetch result");
                return;
            }
        }

        match outcome {
            Ok(reading) => {
                self.history.record(reading.clone());
                self.phase = Phase::Success(reading);
            }
            Err(err) => {
                self.phase = Phase::Failure(err);
            }
        }
    }
}
