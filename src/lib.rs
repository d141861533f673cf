//! CY Weather TUI
//!
//! Renders a single location's current weather from a snapshot document.
//! This library exposes the modules for testing.

pub mod action;
pub mod components;
pub mod effect;
pub mod icons;
pub mod input;
pub mod reducer;
pub mod state;
pub mod testing;
