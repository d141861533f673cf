use ratatui::{
    layout::Constraint,
    prelude::{Frame, Rect},
    style::{Color, Style},
    widgets::{Cell, Row, Table},
};

use super::Component;
use crate::action::Action;
use crate::state::{TempUnit, WeatherConditions};

const MISSING: &str = "--";

/// Labeled metric rows for the data view
pub struct ConditionsPanel;

pub struct ConditionsPanelProps<'a> {
    pub conditions: &'a WeatherConditions,
    pub unit: TempUnit,
}

impl Component<Action> for ConditionsPanel {
    type Props<'a> = ConditionsPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: ConditionsPanelProps<'_>) {
        // An entirely default record means the collaborator sent no
        // readings; show placeholders instead of invented zeros.
        let populated = *props.conditions != WeatherConditions::default();
        let value = |text: String| {
            if populated {
                text
            } else {
                MISSING.to_string()
            }
        };

        let rows = vec![
            metric_row("Ressenti", value(props.unit.format(props.conditions.feels_like))),
            metric_row("Humidité", value(format!("{}%", props.conditions.humidity))),
            metric_row("Pression", value(format!("{} hPa", props.conditions.pressure))),
            metric_row("Vent", value(format!("{:.1} km/h", props.conditions.wind_speed))),
        ];

        let table = Table::new(
            rows,
            [Constraint::Length(12), Constraint::Length(14)],
        );
        frame.render_widget(table, area);
    }
}

fn metric_row(label: &str, value: String) -> Row<'_> {
    Row::new(vec![
        Cell::from(format!(" {label}")),
        Cell::from(value).style(Style::default().fg(Color::Green)),
    ])
}
