//! Reducer - pure function: (state, action) -> Transition

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// Result of dispatching one action
#[derive(Debug, Default)]
pub struct Transition {
    pub changed: bool,
    pub effects: Vec<Effect>,
}

impl Transition {
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: Vec::new(),
        }
    }

    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }
}

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> Transition {
    match action {
        Action::SnapshotReload => {
            // Stale weather stays visible behind the loading branch
            state.loading = true;
            state.error = None;
            Transition::changed_with(Effect::LoadSnapshot)
        }

        Action::SnapshotApply(doc) => {
            state.weather = doc.weather;
            state.loading = doc.loading;
            state.error = doc.error;
            Transition::changed()
        }

        Action::SnapshotDidError(msg) => {
            state.loading = false;
            state.error = Some(msg);
            Transition::changed()
        }

        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            Transition::changed()
        }

        Action::Quit => Transition::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::SnapshotDocument;
    use crate::state::WeatherRecord;

    #[test]
    fn test_reload_sets_loading() {
        let mut state = AppState {
            error: Some("ancienne erreur".into()),
            ..Default::default()
        };

        let result = reducer(&mut state, Action::SnapshotReload);

        assert!(result.changed);
        assert!(state.loading);
        assert!(state.error.is_none());
        assert_eq!(result.effects, vec![Effect::LoadSnapshot]);
    }

    #[test]
    fn test_apply_replaces_the_input_triple() {
        let mut state = AppState {
            loading: true,
            ..Default::default()
        };

        let record = WeatherRecord {
            city: "Paris".into(),
            ..Default::default()
        };
        let result = reducer(
            &mut state,
            Action::SnapshotApply(SnapshotDocument {
                weather: Some(record.clone()),
                loading: false,
                error: None,
            }),
        );

        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert!(!state.loading);
        assert_eq!(state.weather, Some(record));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_error_keeps_stale_weather() {
        let record = WeatherRecord {
            city: "Paris".into(),
            ..Default::default()
        };
        let mut state = AppState {
            weather: Some(record.clone()),
            loading: true,
            ..Default::default()
        };

        reducer(&mut state, Action::SnapshotDidError("panne".into()));

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("panne"));
        assert_eq!(state.weather, Some(record));
    }

    #[test]
    fn test_toggle_units() {
        use crate::state::TempUnit;

        let mut state = AppState::default();
        assert_eq!(state.unit, TempUnit::Celsius);

        reducer(&mut state, Action::UiToggleUnits);
        assert_eq!(state.unit, TempUnit::Fahrenheit);

        reducer(&mut state, Action::UiToggleUnits);
        assert_eq!(state.unit, TempUnit::Celsius);
    }
}
