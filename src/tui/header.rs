//! Dashboard header: title, tab bar, active location and mood chip.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::APP_NAME;

use super::theme::WeatherPalette;
use super::{AppState, Tab, Theme};

/// Header widget
pub struct Header;

impl Header {
    /// Render the two-line header: identity row and tab row.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        theme: &Theme,
        palette: Option<&WeatherPalette>,
    ) {
        let primary = palette.map_or(theme.primary, |p| p.primary);
        let accent = state.manager.accent_color().to_ratatui_color();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        Self::render_identity_row(f, rows[0], state, theme, primary);
        Self::render_tab_row(f, rows[1], state, theme, accent);
    }

    fn render_identity_row(
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        theme: &Theme,
        primary: ratatui::style::Color,
    ) {
        let title = Paragraph::new(Line::from(Span::styled(
            format!(" {APP_NAME}"),
            Style::default().fg(primary).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(title, area);

        let place = state.manager.context().current.as_ref().map_or_else(
            || "No location selected".to_string(),
            |current| match &current.label {
                Some(label) => format!("{} ({label})", current.display_name()),
                None => current.display_name(),
            },
        );
        let right = Paragraph::new(Line::from(vec![
            Span::styled(place, Style::default().fg(theme.text)),
            Span::styled(
                format!(" · {} ", state.current.date_label),
                Style::default().fg(theme.text_secondary),
            ),
        ]))
        .alignment(Alignment::Right);
        f.render_widget(right, area);
    }

    fn render_tab_row(
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        theme: &Theme,
        accent: ratatui::style::Color,
    ) {
        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        for tab in Tab::ALL {
            let style = if tab == state.active_tab {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            spans.push(Span::styled(
                format!("[{}] {}", tab.key_hint(), tab.display_name()),
                style,
            ));
            spans.push(Span::raw("  "));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);

        let mood = state.manager.current_mood();
        let mut chip: Vec<Span> = Vec::new();
        let context = state.manager.context();
        if context.transition_progress < 1.0 {
            let pct = (context.transition_progress * 100.0).round() as u16;
            let target = context
                .next
                .as_ref()
                .map_or_else(|| "settling".to_string(), |next| format!("→ {}", next.city));
            chip.push(Span::styled(
                format!("{target} {pct}% "),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));
            chip.push(Span::styled("· ", Style::default().fg(theme.text_muted)));
        }
        chip.push(Span::styled(
            format!(
                "{} · sound {:.0}% · {} contrast ",
                mood.visual_intensity,
                mood.sound_level * 100.0,
                mood.contrast_preference
            ),
            Style::default().fg(theme.text_secondary),
        ));
        let right = Paragraph::new(Line::from(chip)).alignment(Alignment::Right);
        f.render_widget(right, area);
    }
}
