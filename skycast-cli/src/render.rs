//! Output formatting.
//!
//! All decorative output (intro banner, snow line) lives here, behind the
//! state machine's rendering boundary. Nothing in this module feeds back
//! into state transitions.

use skycast_core::{Phase, Theme, WeatherError, WeatherReading, WidgetState};

pub fn intro() {
    println!("skycast — what's it like outside?");
    println!();
}

/// Render the settled state after an action was applied.
pub fn screen(state: &WidgetState) {
    match state.phase() {
        Phase::Idle | Phase::Loading { .. } => {}
        Phase::Success(reading) => {
            let theme =
                Theme::derive(reading.temperature_c, &reading.description, state.dark_mode());
            print_reading(reading, theme);
        }
        Phase::Failure(err) => print_error(err, Theme::neutral(state.dark_mode())),
    }
}

pub fn searching(city: &str) {
    println!("Searching for {city}...");
}

pub fn print_reading(reading: &WeatherReading, theme: Theme) {
    println!();
    if theme.snow {
        println!("  *  .  *  .  *  .  *");
    }
    println!("{}, {}", reading.city, reading.country);
    println!("  {}", reading.description);
    match reading.feels_like_c {
        Some(feels_like) => {
            println!("  {}°C (feels like {}°C)", reading.temperature_c, feels_like);
        }
        None => println!("  {}°C", reading.temperature_c),
    }
    println!("  Humidity: {}%", reading.humidity_pct);
    println!("  Wind: {} m/s", reading.wind_speed_mps);
    if let Some(pressure) = reading.pressure_hpa {
        println!("  Pressure: {pressure} hPa");
    }
    let fetched_local = reading.fetched_at.with_timezone(&chrono::Local);
    println!("  Fetched: {}", fetched_local.format("%Y-%m-%d %H:%M"));
    println!("  {}", theme_footer(theme));
    println!();
}

pub fn print_error(err: &WeatherError, theme: Theme) {
    println!();
    println!("  {err}");
    println!("  {}", theme_footer(theme));
    println!();
}

fn theme_footer(theme: Theme) -> String {
    format!(
        "[{}{}]",
        theme.backdrop.label(),
        if theme.dark_mode { ", dark" } else { "" }
    )
}
