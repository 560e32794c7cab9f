//! Interactive lookup session.
//!
//! The inquire menu stands in for the widget surface: a text prompt is the
//! input box, menu entries are the history chips and the dark-mode toggle.
//! The session only drives the core state machine and runs its effects.

use anyhow::Result;
use inquire::{InquireError, Select, Text};
use skycast_core::{Action, Config, Effect, Phase, WidgetState, provider_from_config};

use crate::render;

enum MenuItem {
    Search,
    Replay { city: String, country: String },
    ToggleDarkMode { enabled: bool },
    Quit,
}

impl std::fmt::Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search => write!(f, "Search for a city"),
            Self::Replay { city, country } => write!(f, "Again: {city}, {country}"),
            Self::ToggleDarkMode { enabled: true } => write!(f, "Dark mode: on"),
            Self::ToggleDarkMode { enabled: false } => write!(f, "Dark mode: off"),
            Self::Quit => write!(f, "Quit"),
        }
    }
}

pub async fn run() -> Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    let mut state = WidgetState::new();

    tracing::debug!("starting interactive session");

    render::intro();

    loop {
        let mut items = vec![MenuItem::Search];
        for reading in state.history().entries() {
            items.push(MenuItem::Replay {
                city: reading.city.clone(),
                country: reading.country.clone(),
            });
        }
        items.push(MenuItem::ToggleDarkMode { enabled: state.dark_mode() });
        items.push(MenuItem::Quit);

        let choice = match Select::new("What next?", items).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let action = match choice {
            MenuItem::Search => match Text::new("City name:").prompt() {
                Ok(raw) => Action::Submit(raw),
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    continue;
                }
                Err(err) => return Err(err.into()),
            },
            MenuItem::Replay { city, .. } => Action::Replay(city),
            MenuItem::ToggleDarkMode { .. } => Action::ToggleDarkMode,
            MenuItem::Quit => return Ok(()),
        };

        if let Some(Effect::Fetch { query, token }) = state.apply(action) {
            if let Phase::Loading { city, .. } = state.phase() {
                render::searching(city);
            }
            let outcome = provider.current(&query).await;
            state.apply(Action::Resolved { token, outcome });
        }

        render::screen(&state);
    }
}
