use chrono::NaiveDateTime;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    prelude::Frame,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, ConditionsPanel, ConditionsPanelProps, ERROR_ICON};
use crate::action::Action;
use crate::icons::Condition;
use crate::state::{AppState, DisplayState, WeatherRecord};

/// The four-branch weather view
pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

/// Width of the centered column holding the metric rows
const PANEL_WIDTH: u16 = 28;

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match DisplayState::of(props.state) {
            DisplayState::Loading => render_loading(frame, area),
            DisplayState::Error(error) => render_error(frame, area, error),
            DisplayState::Loaded(record) => render_ready(frame, area, props.state, record),
            DisplayState::Empty => render_placeholder_hint(frame, area),
        }
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);

    let msg = Line::from(vec![Span::styled(
        "Chargement...",
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(msg), chunks[0]);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // icon
        Constraint::Length(1), // "Erreur"
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(Paragraph::new(Line::from(ERROR_ICON).centered()), chunks[0]);
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                "Erreur",
                Style::default().fg(Color::Red).bold(),
            )])
            .centered(),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )])
            .centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Appuyez sur ", Style::default().fg(Color::DarkGray)),
                Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" pour réessayer", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[4],
    );
}

fn render_ready(frame: &mut Frame, area: Rect, state: &AppState, record: &WeatherRecord) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // city, country
        Constraint::Length(1), // observation time
        Constraint::Length(1), // blank
        Constraint::Length(1), // icon + description
        Constraint::Length(1), // temperature
        Constraint::Length(1), // blank
        Constraint::Length(4), // metric rows
    ])
    .flex(Flex::Center)
    .split(area);

    let heading = if record.country.is_empty() {
        record.city.clone()
    } else {
        format!("{}, {}", record.city, record.country)
    };
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                heading,
                Style::default().fg(Color::Yellow).bold(),
            )])
            .centered(),
        ),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                observation_time(&record.timestamp),
                Style::default().fg(Color::DarkGray),
            )])
            .centered(),
        ),
        chunks[1],
    );

    let condition = Condition::from_icon_code(&record.weather.icon);
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled(condition.glyph(), Style::default().fg(condition.color())),
                Span::raw("  "),
                Span::styled(
                    record.weather.description.clone(),
                    Style::default().fg(Color::Gray),
                ),
            ])
            .centered(),
        ),
        chunks[3],
    );

    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                state.unit.format(record.weather.temperature),
                Style::default().fg(Color::Cyan).bold(),
            )])
            .centered(),
        ),
        chunks[4],
    );

    let panel_area = Layout::horizontal([Constraint::Length(PANEL_WIDTH)])
        .flex(Flex::Center)
        .split(chunks[6]);
    let mut panel = ConditionsPanel;
    panel.render(
        frame,
        panel_area[0],
        ConditionsPanelProps {
            conditions: &record.weather,
            unit: state.unit,
        },
    );
}

fn render_placeholder_hint(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                "Aucune donnée météo",
                Style::default().fg(Color::DarkGray),
            )])
            .centered(),
        ),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Appuyez sur ", Style::default().fg(Color::DarkGray)),
                Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" pour charger la météo", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[2],
    );
}

/// Format the ISO 8601 observation time; unparseable input is shown as-is.
fn observation_time(timestamp: &str) -> String {
    match timestamp.parse::<NaiveDateTime>() {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
