//! Actions - intents and results dispatched through the reducer

use crate::input::SnapshotDocument;

/// Application actions
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Snapshot category =====
    /// Intent: re-read the snapshot source (triggers an effect)
    SnapshotReload,

    /// Result: a snapshot document was read; replaces the input triple
    SnapshotApply(SnapshotDocument),

    /// Result: the snapshot source could not be read
    SnapshotDidError(String),

    // ===== UI category =====
    /// Toggle between Celsius and Fahrenheit
    UiToggleUnits,

    /// Exit the application
    Quit,
}
