//! The 5-Day tab: one row per day, the selected row expandable into
//! hourly samples and a detail block.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::DayForecast;
use crate::services::units::{format_clock, format_temp};

use super::{AppState, Theme};

/// 5-Day tab widget
pub struct FiveDayTab;

impl FiveDayTab {
    /// Render the tab.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();
        for (index, day) in state.five_day.iter().enumerate() {
            let selected = index == state.day_selection;
            let expanded = state.expanded_day == Some(index);
            lines.push(Self::day_line(state, day, selected, expanded, theme));
            if expanded {
                lines.extend(Self::detail_lines(state, day, theme));
            }
        }

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 5-Day Outlook ")
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(widget, area);
    }

    fn day_line(
        state: &AppState,
        day: &DayForecast,
        selected: bool,
        expanded: bool,
        theme: &Theme,
    ) -> Line<'static> {
        let unit = state.config.units.temperature;
        let marker = if expanded { "▾" } else { "▸" };
        let mut style = Style::default().fg(theme.text);
        if selected {
            style = style.bg(theme.highlight_bg).add_modifier(Modifier::BOLD);
        }
        let condition_style = if day.kind.is_severe() {
            style.fg(theme.warning)
        } else {
            style
        };

        Line::from(vec![
            Span::styled(format!(" {marker} {:<10}", day.day), style),
            Span::styled(
                format!(" {} {:<22}", day.kind.glyph(), day.condition),
                condition_style,
            ),
            Span::styled(format!(" {:>3}%", day.precip_pct), style),
            Span::styled(
                format!(
                    "  {} / {}",
                    format_temp(day.high_c, unit),
                    format_temp(day.low_c, unit)
                ),
                style,
            ),
            Span::styled(format!("  {}", day.wind), style.fg(theme.text_secondary)),
        ])
    }

    fn detail_lines(state: &AppState, day: &DayForecast, theme: &Theme) -> Vec<Line<'static>> {
        let unit = state.config.units.temperature;
        let time_format = state.config.units.time_format;
        let dim = Style::default().fg(theme.text_secondary);

        let samples = day
            .hourly
            .iter()
            .map(|sample| {
                format!(
                    "{} {} ({}%)",
                    format_clock(sample.time, time_format),
                    format_temp(sample.temp_c, unit),
                    sample.precip_pct
                )
            })
            .collect::<Vec<_>>()
            .join("  ·  ");

        let details = &day.details;
        vec![
            Line::from(Span::styled(format!("      {samples}"), dim)),
            Line::from(Span::styled(
                format!(
                    "      Humidity {}% · UV {} of 11 · Sunrise {} · Sunset {}",
                    details.humidity_pct,
                    details.uv_index,
                    format_clock(details.sunrise, time_format),
                    format_clock(details.sunset, time_format),
                ),
                dim,
            )),
            Line::from(Span::styled(
                format!(
                    "      Visibility {} km · Pressure {} mb",
                    details.visibility_km, details.pressure_mb
                ),
                dim,
            )),
            Line::from(""),
        ]
    }
}
