//! Derived presentation styling.
//!
//! The view never mutates any global styling state; it asks for a [`Theme`]
//! computed from the current reading and the dark-mode flag and renders that.

/// Coarse temperature band driving the backdrop colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Freezing,
    Cool,
    Mild,
    Hot,
}

impl Backdrop {
    fn from_temperature(temperature_c: i32) -> Self {
        match temperature_c {
            t if t < 0 => Self::Freezing,
            t if t < 15 => Self::Cool,
            t if t < 27 => Self::Mild,
            _ => Self::Hot,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Freezing => "freezing",
            Self::Cool => "cool",
            Self::Mild => "mild",
            Self::Hot => "hot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub backdrop: Backdrop,
    pub dark_mode: bool,
    /// Decorative snow overlay, shown when the conditions mention snow.
    pub snow: bool,
}

impl Theme {
    /// Pure function of `{temperature, description, dark_mode}`.
    pub fn derive(temperature_c: i32, description: &str, dark_mode: bool) -> Self {
        let snow = description.to_ascii_lowercase().contains("snow");
        Self {
            backdrop: Backdrop::from_temperature(temperature_c),
            dark_mode,
            snow,
        }
    }

    /// Neutral theme for idle/error screens where no reading exists.
    pub fn neutral(dark_mode: bool) -> Self {
        Self { backdrop: Backdrop::Mild, dark_mode, snow: false }
    }
}
