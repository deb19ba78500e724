//! Help overlay listing all keyboard shortcuts, organized by context.
//!
//! Accessible via the '?' key; any key closes it.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::Theme;

/// Help overlay widget
pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the shortcut reference over the dashboard.
    pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_width = (area.width * 70) / 100;
        let dialog_height = (area.height * 85) / 100;
        let dialog_area = Rect {
            x: area.x + (area.width - dialog_width) / 2,
            y: area.y + (area.height - dialog_height) / 2,
            width: dialog_width,
            height: dialog_height,
        };

        f.render_widget(Clear, dialog_area);

        let lines = Self::content(theme);
        let help = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help (?) ")
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(help, dialog_area);
    }

    fn section(name: &'static str, theme: &Theme) -> Line<'static> {
        Line::from(Span::styled(
            format!("═══ {name} ═══"),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn entry(keys: &'static str, action: &'static str, theme: &Theme) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {keys:<14}"), Style::default().fg(theme.success)),
            Span::styled(action, Style::default().fg(theme.text)),
        ])
    }

    fn content(theme: &Theme) -> Vec<Line<'static>> {
        vec![
            Line::from(""),
            Self::section("DASHBOARD", theme),
            Line::from(""),
            Self::entry("1 / 2 / 3", "Switch to Today / 5-Day / Monthly tab", theme),
            Self::entry("Tab", "Next tab (Shift+Tab for previous)", theme),
            Self::entry("↑/↓ or j/k", "Move through the 5-day outlook", theme),
            Self::entry("Enter", "Expand or collapse the selected day", theme),
            Self::entry("←/→ or h/l", "Previous / next calendar month", theme),
            Self::entry("PgUp/PgDn", "Previous / next calendar year", theme),
            Self::entry("r", "Refresh weather data", theme),
            Line::from(""),
            Self::section("LOCATIONS", theme),
            Line::from(""),
            Self::entry("L or o", "Focus the locations panel", theme),
            Self::entry("Enter", "Travel to the selected location", theme),
            Self::entry("n", "Mark / unmark as next destination", theme),
            Self::entry("m", "Mark as home base", theme),
            Self::entry("f", "Toggle favorite", theme),
            Self::entry("a", "Add a location (City, Country)", theme),
            Self::entry("r", "Edit the location's label", theme),
            Self::entry("d / Delete", "Delete the selected location", theme),
            Self::entry("Esc", "Back to the dashboard", theme),
            Line::from(""),
            Self::section("GENERAL", theme),
            Line::from(""),
            Self::entry("Shift+S", "Open settings", theme),
            Self::entry("?", "Toggle this help", theme),
            Self::entry("q / Ctrl+q", "Quit", theme),
            Line::from(""),
            Line::from(Span::styled(
                "  Press any key to close",
                Style::default().fg(theme.text_muted),
            )),
        ]
    }
}
