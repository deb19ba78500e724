//! Status bar widget for messages, data freshness, and contextual help.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::LoadState;

use super::{AppState, Focus, Popup, Theme};

/// Key hints shown while the dashboard has focus.
const MAIN_HINTS: &[(&str, &str)] = &[
    ("1/2/3", "Tabs"),
    ("Enter", "Expand"),
    ("r", "Refresh"),
    ("L", "Locations"),
    ("S", "Settings"),
];

/// Key hints shown while the locations panel has focus.
const LOCATIONS_HINTS: &[(&str, &str)] = &[
    ("Enter", "Set current"),
    ("n", "Next"),
    ("m", "Home"),
    ("f", "Favorite"),
    ("a/d", "Add/Delete"),
];

const SETTINGS_HINTS: &[(&str, &str)] = &[("↑/↓", "Navigate"), ("Enter", "Change"), ("Esc", "Close")];

const PROMPT_HINTS: &[(&str, &str)] = &[("Enter", "Confirm"), ("Esc", "Cancel")];

const CONFIRM_HINTS: &[(&str, &str)] = &[("y/Enter", "Confirm"), ("n/Esc", "Cancel")];

const HELP_HINTS: &[(&str, &str)] = &[("any key", "Close")];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        // First line: error, status message, or nothing
        if let Some(error) = &state.error_message {
            lines.push(Line::from(vec![
                Span::styled(
                    "ERROR: ",
                    Style::default()
                        .fg(theme.error)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(error.clone(), Style::default().fg(theme.error)),
            ]));
        } else if state.status_message.is_empty() {
            lines.push(Line::from(""));
        } else {
            lines.push(Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.text),
            )));
        }

        lines.push(Self::freshness_line(state, theme));
        lines.push(Self::help_line(state, theme));

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// When the weather data was last updated, and whether we are offline.
    fn freshness_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();

        match &state.data_status.state {
            LoadState::Idle => {
                spans.push(Span::styled(
                    "Waiting for data",
                    Style::default().fg(theme.text_muted),
                ));
            }
            LoadState::Loading => {
                spans.push(Span::styled(
                    "Refreshing…",
                    Style::default().fg(theme.warning),
                ));
            }
            LoadState::Ready => {
                let stamp = state
                    .data_status
                    .last_updated
                    .map_or_else(String::new, |at| at.format("%H:%M").to_string());
                spans.push(Span::styled(
                    format!("Updated {stamp}"),
                    Style::default().fg(theme.text_muted),
                ));
            }
            LoadState::Failed(message) => {
                spans.push(Span::styled(
                    format!("Refresh failed: {message}"),
                    Style::default().fg(theme.error),
                ));
            }
        }

        if state.data_status.offline {
            spans.push(Span::styled(
                " · OFFLINE",
                Style::default()
                    .fg(theme.warning)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Line::from(spans)
    }

    /// Contextual key hints at the bottom, followed by "?: Help" / "q: Quit".
    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints = match &state.active_popup {
            Some(Popup::Settings(_)) => SETTINGS_HINTS,
            Some(Popup::Prompt(_)) => PROMPT_HINTS,
            Some(Popup::ConfirmDelete { .. }) => CONFIRM_HINTS,
            Some(Popup::Help) => HELP_HINTS,
            None => match state.focus {
                Focus::Locations => LOCATIONS_HINTS,
                Focus::Main => MAIN_HINTS,
            },
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(*action));
        }
        if state.active_popup.is_none() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("?", Style::default().fg(theme.accent)));
            spans.push(Span::raw(": Help"));
        }

        Line::from(spans)
    }
}
