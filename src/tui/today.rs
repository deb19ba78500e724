//! The Today tab: current conditions, the hourly strip, and air quality.

use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::ConditionKind;
use crate::services::units::{format_clock, format_temp};

use super::theme::{active_theme_kind, WeatherPalette};
use super::{AppState, Theme};

/// Today tab widget
pub struct TodayTab;

impl TodayTab {
    /// Render the tab.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        theme: &Theme,
        palette: Option<&WeatherPalette>,
    ) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Current conditions card
                Constraint::Min(6),    // Hourly strip
                Constraint::Length(3), // Air quality
            ])
            .split(area);

        Self::render_current(f, chunks[0], state, theme, palette);
        Self::render_hourly(f, chunks[1], state, theme);
        Self::render_air_quality(f, chunks[2], state, theme);
    }

    fn render_current(
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        theme: &Theme,
        palette: Option<&WeatherPalette>,
    ) {
        let unit = state.config.units.temperature;
        let time_format = state.config.units.time_format;
        let current = &state.current;
        let kind = state.current_condition();
        let headline = palette.map_or(theme.primary, |p| p.primary);

        let mut lines = Vec::new();
        if active_theme_kind(&state.config.theme, kind) == Some(ConditionKind::Stormy) {
            lines.push(Line::from(Span::styled(
                "⚠ Severe Weather Watch · Thunderstorms expected this evening",
                Style::default()
                    .fg(theme.warning)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        lines.extend([
            Line::from(vec![
                Span::styled(
                    format!("{} {}", format_temp(current.temp_c, unit), kind.glyph()),
                    Style::default().fg(headline).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(kind.display_name(), Style::default().fg(theme.text)),
            ]),
            Line::from(Span::styled(
                format!(
                    "Feels like {} · Day {} · Night {}",
                    format_temp(current.feels_like_c, unit),
                    format_temp(current.day_c, unit),
                    format_temp(current.night_c, unit),
                ),
                Style::default().fg(theme.text_secondary),
            )),
            Line::from(Span::styled(
                format!(
                    "Humidity {}% · Wind {} · UV {}",
                    current.humidity_pct, current.wind, current.uv_label
                ),
                Style::default().fg(theme.text_secondary),
            )),
            Line::from(Span::styled(
                format!(
                    "Pressure {} mb · Visibility {}",
                    current.pressure_mb, current.visibility
                ),
                Style::default().fg(theme.text_secondary),
            )),
            Line::from(Span::styled(
                format!(
                    "Sunrise {} · Sunset {}",
                    format_clock(current.sunrise, time_format),
                    format_clock(current.sunset, time_format),
                ),
                Style::default().fg(theme.text_secondary),
            )),
        ]);

        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", current.date_label))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(card, area);
    }

    fn render_hourly(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let unit = state.config.units.temperature;
        let time_format = state.config.units.time_format;

        let header = Row::new(["Time", "Temp", "Conditions", "Precip", "Wind", "Humidity"]).style(
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = state
            .hourly
            .iter()
            .map(|entry| {
                let time = entry
                    .time
                    .map_or_else(|| "Now".to_string(), |t| format_clock(t, time_format));
                let condition_style = if entry.kind.is_severe() {
                    Style::default().fg(theme.warning)
                } else {
                    Style::default().fg(theme.text)
                };
                Row::new(vec![
                    Cell::from(time),
                    Cell::from(format_temp(entry.temp_c, unit)),
                    Cell::from(format!("{} {}", entry.kind.glyph(), entry.condition))
                        .style(condition_style),
                    Cell::from(format!("{}%", entry.precip_pct)),
                    Cell::from(format!("{} km/h", entry.wind_kmh)),
                    Cell::from(format!("{}%", entry.humidity_pct)),
                ])
                .style(Style::default().fg(theme.text))
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Length(6),
                Constraint::Min(20),
                Constraint::Length(8),
                Constraint::Length(9),
                Constraint::Length(9),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Hourly ")
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(table, area);
    }

    fn render_air_quality(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let air = state.air_quality;
        let line = Line::from(vec![
            Span::styled("Air quality ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                format!("{}", air.index),
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" · {}", air.label),
                Style::default().fg(theme.success),
            ),
        ]);
        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(widget, area);
    }
}
