use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{Component, WeatherBody, WeatherBodyProps};
use crate::action::Action;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}";

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The main weather display component
#[derive(Default)]
pub struct WeatherDisplay;

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &KeyEvent,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event.code {
            KeyCode::Char('r') | KeyCode::F(5) => Some(Action::SnapshotReload),
            KeyCode::Char('u') => Some(Action::UiToggleUnits),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let mut body = WeatherBody;
        body.render(frame, chunks[0], WeatherBodyProps { state: props.state });

        frame.render_widget(Paragraph::new(hint_bar().centered()), chunks[1]);
    }
}

fn hint_bar() -> Line<'static> {
    let key = Style::default().fg(Color::Cyan).bold();
    let label = Style::default().fg(Color::DarkGray);
    Line::from(vec![
        Span::styled("r", key),
        Span::styled(" recharger   ", label),
        Span::styled("u", key),
        Span::styled(" unités   ", label),
        Span::styled("q", key),
        Span::styled(" quitter", label),
    ])
}
