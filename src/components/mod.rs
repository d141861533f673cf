//! UI components - props in, actions out, rendering via ratatui

use crossterm::event::KeyEvent;
use ratatui::prelude::{Frame, Rect};

pub mod conditions_panel;
pub mod weather_body;
pub mod weather_display;

/// A component renders read-only props and maps input events to actions.
///
/// Components hold no domain state; everything they show comes in through
/// `Props`, so rendering the same props twice paints the same buffer.
pub trait Component<A> {
    type Props<'a>;

    fn handle_event(
        &mut self,
        _event: &KeyEvent,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        std::iter::empty()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}

pub use conditions_panel::{ConditionsPanel, ConditionsPanelProps};
pub use weather_body::{WeatherBody, WeatherBodyProps};
pub use weather_display::{ERROR_ICON, WeatherDisplay, WeatherDisplayProps};
