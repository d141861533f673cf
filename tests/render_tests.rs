//! Rendered-output tests for the WeatherDisplay contract
//!
//! Each test renders the component into a test buffer and asserts on the
//! plain-text contents: exactly one of the loading / error / data / empty
//! branches is visible, chosen by fixed precedence.

use pretty_assertions::assert_eq;

use cy_weather::components::{Component, WeatherDisplay, WeatherDisplayProps};
use cy_weather::state::{AppState, TempUnit, WeatherConditions, WeatherRecord};
use cy_weather::testing::RenderHarness;

fn paris_record() -> WeatherRecord {
    WeatherRecord {
        city: "Paris".into(),
        country: "FR".into(),
        timestamp: "2026-01-13T12:00:00".into(),
        weather: WeatherConditions {
            temperature: 8.5,
            feels_like: 6.2,
            humidity: 75,
            pressure: 1015,
            wind_speed: 12.5,
            description: "Couvert".into(),
            icon: "04d".into(),
        },
    }
}

fn render(state: &AppState) -> String {
    let mut render = RenderHarness::new(60, 24);
    let mut component = WeatherDisplay;
    render.render_to_string_plain(|frame| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

#[test]
fn test_render_loading_state() {
    // Scenario A: {weather: null, loading: true, error: null}
    let state = AppState {
        loading: true,
        ..Default::default()
    };

    let output = render(&state);

    assert!(output.contains("Chargement"), "Should show loading text");
    assert!(!output.contains("Erreur"), "Loading view only");
}

#[test]
fn test_render_error_state() {
    // Scenario B: {weather: null, loading: false, error: "Ville non trouvée"}
    let state = AppState {
        error: Some("Ville non trouvée".into()),
        ..Default::default()
    };

    let output = render(&state);

    assert!(output.contains("Erreur"), "Should show error label");
    assert!(
        output.contains("Ville non trouvée"),
        "Should show the message verbatim"
    );
    assert!(output.contains("réessayer"), "Should show retry hint");
}

#[test]
fn test_render_weather_data() {
    // Scenario C: populated record, no loading, no error
    let state = AppState {
        weather: Some(paris_record()),
        ..Default::default()
    };

    let output = render(&state);

    assert!(output.contains("Paris"), "Should show city");
    assert!(output.contains("Couvert"), "Should show description");
    assert!(output.contains("8.5°C"), "Should show temperature");
    assert!(output.contains("6.2°C"), "Should show feels-like");
    assert!(output.contains("75%"), "Should show humidity");
    assert!(output.contains("1015 hPa"), "Should show pressure");
    assert!(output.contains("12.5 km/h"), "Should show wind speed");
    assert!(
        output.contains("13/01/2026 12:00"),
        "Should show formatted observation time"
    );
}

#[test]
fn test_loading_wins_over_error_and_weather() {
    let state = AppState {
        weather: Some(paris_record()),
        loading: true,
        error: Some("Ville non trouvée".into()),
        ..Default::default()
    };

    let output = render(&state);

    assert!(output.contains("Chargement"));
    assert!(!output.contains("Ville non trouvée"));
    assert!(!output.contains("Couvert"));
}

#[test]
fn test_error_wins_over_stale_weather() {
    let state = AppState {
        weather: Some(paris_record()),
        error: Some("Ville non trouvée".into()),
        ..Default::default()
    };

    let output = render(&state);

    assert!(output.contains("Ville non trouvée"));
    assert!(!output.contains("Couvert"), "Stale data stays hidden");
}

#[test]
fn test_empty_error_string_falls_through_to_weather() {
    let state = AppState {
        weather: Some(paris_record()),
        error: Some(String::new()),
        ..Default::default()
    };

    let output = render(&state);

    assert!(output.contains("Paris"));
    assert!(output.contains("Couvert"));
    assert!(!output.contains("Erreur"));
}

#[test]
fn test_render_initial_state() {
    let output = render(&AppState::default());

    assert!(
        output.contains("Aucune donnée météo"),
        "Should show neutral placeholder"
    );
    assert!(output.contains("pour charger"), "Should show load hint");
}

#[test]
fn test_render_is_idempotent() {
    let state = AppState {
        weather: Some(paris_record()),
        ..Default::default()
    };

    assert_eq!(render(&state), render(&state));

    let state = AppState {
        loading: true,
        ..Default::default()
    };
    assert_eq!(render(&state), render(&state));
}

#[test]
fn test_render_fahrenheit() {
    let mut record = paris_record();
    record.weather.temperature = 0.0;
    let state = AppState {
        weather: Some(record),
        unit: TempUnit::Fahrenheit,
        ..Default::default()
    };

    let output = render(&state);

    assert!(output.contains("32.0°F"), "Should convert for display");
}

#[test]
fn test_render_unpopulated_conditions_show_placeholders() {
    let state = AppState {
        weather: Some(WeatherRecord {
            city: "Cergy".into(),
            ..Default::default()
        }),
        ..Default::default()
    };

    let output = render(&state);

    assert!(output.contains("Cergy"));
    assert!(output.contains("--"), "Missing readings show placeholders");
}

#[test]
fn test_render_help_bar() {
    let output = render(&AppState::default());

    assert!(output.contains("recharger"), "Should show reload hint");
    assert!(output.contains("unités"), "Should show units hint");
    assert!(output.contains("quitter"), "Should show quit hint");
}
