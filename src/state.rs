//! Application state - single source of truth

use serde::{Deserialize, Serialize};

/// Current conditions as served by the CY Weather backend
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConditions {
    /// Air temperature in °C
    pub temperature: f32,
    /// Perceived temperature in °C
    pub feels_like: f32,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Atmospheric pressure in hPa
    pub pressure: u32,
    /// Wind speed in km/h
    pub wind_speed: f32,
    /// Human-readable condition text (e.g. "Couvert")
    pub description: String,
    /// Icon code (e.g. "04d")
    pub icon: String,
}

/// One location's resolved weather payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherRecord {
    pub city: String,
    pub country: String,
    /// ISO 8601 observation time
    pub timestamp: String,
    pub weather: WeatherConditions,
}

/// Temperature unit preference
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    pub fn format(&self, celsius: f32) -> String {
        match self {
            TempUnit::Celsius => format!("{:.1}°C", celsius),
            TempUnit::Fahrenheit => format!("{:.1}°F", celsius * 9.0 / 5.0 + 32.0),
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    /// Last resolved weather record, if any
    pub weather: Option<WeatherRecord>,
    /// Whether a snapshot load is in flight
    pub loading: bool,
    /// Collaborator-supplied error message, shown verbatim
    pub error: Option<String>,
    /// Temperature unit preference
    pub unit: TempUnit,
}

/// The single visible branch derived from the input triple.
///
/// Precedence is fixed: loading wins over an error, an error wins over
/// stale weather data. An empty error string counts as no error.
#[derive(Debug, PartialEq)]
pub enum DisplayState<'a> {
    Loading,
    Error(&'a str),
    Loaded(&'a WeatherRecord),
    Empty,
}

impl<'a> DisplayState<'a> {
    pub fn of(state: &'a AppState) -> Self {
        if state.loading {
            return DisplayState::Loading;
        }
        match state.error.as_deref() {
            Some(error) if !error.is_empty() => DisplayState::Error(error),
            _ => match &state.weather {
                Some(record) => DisplayState::Loaded(record),
                None => DisplayState::Empty,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> WeatherRecord {
        WeatherRecord {
            city: "Paris".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_loading_wins_over_everything() {
        let state = AppState {
            weather: Some(record()),
            loading: true,
            error: Some("Ville non trouvée".into()),
            ..Default::default()
        };
        assert_eq!(DisplayState::of(&state), DisplayState::Loading);
    }

    #[test]
    fn test_error_wins_over_stale_weather() {
        let state = AppState {
            weather: Some(record()),
            loading: false,
            error: Some("Ville non trouvée".into()),
            ..Default::default()
        };
        assert_eq!(
            DisplayState::of(&state),
            DisplayState::Error("Ville non trouvée")
        );
    }

    #[test]
    fn test_empty_error_string_counts_as_absent() {
        let state = AppState {
            weather: Some(record()),
            error: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(DisplayState::of(&state), DisplayState::Loaded(_)));

        let state = AppState {
            error: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(DisplayState::of(&state), DisplayState::Empty);
    }

    #[test]
    fn test_all_inputs_empty_is_placeholder() {
        assert_eq!(DisplayState::of(&AppState::default()), DisplayState::Empty);
    }

    #[test]
    fn test_partial_record_deserializes_with_defaults() {
        let record: WeatherRecord =
            serde_json::from_str(r#"{"city": "Lyon"}"#).unwrap();
        assert_eq!(record.city, "Lyon");
        assert_eq!(record.weather, WeatherConditions::default());
    }
}
