//! Icon-code mapping
//!
//! The backend serves OpenWeather-style icon codes ("01d".."50n"); the
//! trailing day/night letter does not change the glyph here.

use ratatui::style::Color;

/// Weather condition families, keyed by the icon code prefix
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Condition {
    ClearSky,
    FewClouds,
    ScatteredClouds,
    Overcast,
    ShowerRain,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
    Unknown,
}

impl Condition {
    /// Map an icon code (e.g. "04d") to its condition family
    pub fn from_icon_code(code: &str) -> Self {
        match code.get(..2) {
            Some("01") => Condition::ClearSky,
            Some("02") => Condition::FewClouds,
            Some("03") => Condition::ScatteredClouds,
            Some("04") => Condition::Overcast,
            Some("09") => Condition::ShowerRain,
            Some("10") => Condition::Rain,
            Some("11") => Condition::Thunderstorm,
            Some("13") => Condition::Snow,
            Some("50") => Condition::Mist,
            _ => Condition::Unknown,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Condition::ClearSky => "\u{2600}",
            Condition::FewClouds => "\u{26c5}",
            Condition::ScatteredClouds | Condition::Overcast => "\u{2601}",
            Condition::ShowerRain | Condition::Rain => "\u{1f327}",
            Condition::Thunderstorm => "\u{26c8}",
            Condition::Snow => "\u{2744}",
            Condition::Mist => "\u{1f32b}",
            Condition::Unknown => "\u{00b7}",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Condition::ClearSky => Color::Yellow,
            Condition::FewClouds => Color::LightYellow,
            Condition::ScatteredClouds | Condition::Overcast => Color::Gray,
            Condition::ShowerRain | Condition::Rain => Color::Blue,
            Condition::Thunderstorm => Color::Magenta,
            Condition::Snow => Color::White,
            Condition::Mist => Color::DarkGray,
            Condition::Unknown => Color::DarkGray,
        }
    }
}

/// Glyph for an icon code, with a neutral fallback for unknown codes
pub fn icon_glyph(code: &str) -> &'static str {
    Condition::from_icon_code(code).glyph()
}
