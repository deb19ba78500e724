//! The Monthly tab: a Sunday-started calendar grid of synthesized days.

use chrono::{Datelike, Local};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::models::MonthDay;
use crate::services::forecast::{month_grid, MONTH_NAMES};
use crate::services::units::format_temp;

use super::theme::WeatherPalette;
use super::{AppState, Theme};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Monthly tab widget
pub struct MonthlyTab;

impl MonthlyTab {
    /// Render the calendar for the month the user navigated to.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        theme: &Theme,
        palette: Option<&WeatherPalette>,
    ) {
        let year = state.calendar_year;
        let month = state.calendar_month;
        let month_name = MONTH_NAMES
            .get(month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?");
        let headline = palette.map_or(theme.primary, |p| p.primary);

        let mut grid = month_grid(year, month);
        // pad the last week so every row has seven cells
        while grid.len() % 7 != 0 {
            grid.push(None);
        }

        let today = Local::now().date_naive();
        let is_this_month = today.year() == year && today.month() == month;

        let header = Row::new(WEEKDAYS.map(|d| Cell::from(Text::from(d).alignment(Alignment::Center)))).style(
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = grid
            .chunks(7)
            .map(|week| {
                let cells: Vec<Cell> = week
                    .iter()
                    .map(|cell| match cell {
                        Some(day) => {
                            let is_today = is_this_month && u32::from(day.day) == today.day();
                            Self::day_cell(state, *day, is_today, theme)
                        }
                        None => Cell::from(""),
                    })
                    .collect();
                Row::new(cells).height(3)
            })
            .collect();

        let title = format!(" {month_name} {year} ");
        let table = Table::new(rows, [Constraint::Ratio(1, 7); 7])
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_style(Style::default().fg(headline).add_modifier(Modifier::BOLD))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(table, area);
    }

    fn day_cell(state: &AppState, day: MonthDay, is_today: bool, theme: &Theme) -> Cell<'static> {
        let unit = state.config.units.temperature;
        let day_style = if is_today {
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        let body_style = if day.kind.is_severe() {
            Style::default().fg(theme.warning)
        } else {
            Style::default().fg(theme.text_secondary)
        };

        let mut lines = vec![
            Line::from(Span::styled(format!(" {:>2}", day.day), day_style)),
            Line::from(Span::styled(
                format!(" {} {}", format_temp(day.temp_c, unit), day.kind.glyph()),
                body_style,
            )),
        ];
        // the calendar only calls out meaningful rain chances
        if day.precip_pct > 30 {
            lines.push(Line::from(Span::styled(
                format!(" {}%", day.precip_pct),
                Style::default().fg(theme.text_muted),
            )));
        }
        Cell::from(Text::from(lines))
    }
}
