//! Text Input Prompt
//!
//! Simple text input dialog used for adding locations and editing labels.
//! Add-location input must be "City, Country"; label edits accept anything,
//! including an empty string to clear the label.

use crate::tui::theme::Theme;
use crate::tui::Component;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// What the prompt is collecting input for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// New "City, Country" entry for the directory.
    AddLocation,
    /// New label for an existing location.
    EditLabel {
        /// Directory id of the location being relabeled.
        id: String,
    },
}

/// Events emitted by the text prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextPromptEvent {
    /// User confirmed the input
    Confirmed {
        /// What was being collected.
        kind: PromptKind,
        /// The raw trimmed input.
        value: String,
    },
    /// User cancelled the operation
    Cancelled,
}

/// Text prompt component state
#[derive(Debug, Clone)]
pub struct TextPrompt {
    kind: PromptKind,
    title: &'static str,
    hint: &'static str,
    input: String,
    error: Option<String>,
}

impl TextPrompt {
    /// Prompt for a new location.
    #[must_use]
    pub const fn new_add_location() -> Self {
        Self {
            kind: PromptKind::AddLocation,
            title: "Add Location",
            hint: "Format: City, Country (e.g. Lisbon, PT)",
            input: String::new(),
            error: None,
        }
    }

    /// Prompt for a new label, prefilled with the current one.
    #[must_use]
    pub fn new_edit_label(id: impl Into<String>, current_label: Option<&str>) -> Self {
        Self {
            kind: PromptKind::EditLabel { id: id.into() },
            title: "Edit Label",
            hint: "Leave empty to clear the label",
            input: current_label.unwrap_or_default().to_string(),
            error: None,
        }
    }

    /// Validate the input for the current prompt kind.
    fn validate(&self) -> Result<(), String> {
        match self.kind {
            PromptKind::AddLocation => {
                let trimmed = self.input.trim();
                if trimmed.is_empty() {
                    return Err("Location cannot be empty".to_string());
                }
                let Some((city, country)) = trimmed.split_once(',') else {
                    return Err("Expected \"City, Country\"".to_string());
                };
                if city.trim().is_empty() || country.trim().is_empty() {
                    return Err("Both city and country are required".to_string());
                }
                Ok(())
            }
            // Any label is fine; empty clears it
            PromptKind::EditLabel { .. } => Ok(()),
        }
    }
}

impl Component for TextPrompt {
    type Event = TextPromptEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                self.error = None;
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
            }
            KeyCode::Enter => match self.validate() {
                Ok(()) => {
                    return Some(TextPromptEvent::Confirmed {
                        kind: self.kind.clone(),
                        value: self.input.trim().to_string(),
                    });
                }
                Err(e) => {
                    self.error = Some(e);
                }
            },
            KeyCode::Esc => {
                return Some(TextPromptEvent::Cancelled);
            }
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(60, 40, area);

        frame.render_widget(Clear, dialog_area);

        let background = Block::default().style(Style::default().bg(theme.background));
        frame.render_widget(background, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Input field
                Constraint::Length(3), // Hint
                Constraint::Min(2),    // Error message (if any)
                Constraint::Length(2), // Help text
            ])
            .split(dialog_area);

        let title = Paragraph::new(self.title)
            .style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(title, chunks[0]);

        let input_text = format!("{}█", self.input);
        let input = Paragraph::new(input_text)
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Input ")
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(input, chunks[1]);

        let hint = Paragraph::new(self.hint)
            .style(Style::default().fg(theme.text_muted))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(hint, chunks[2]);

        if let Some(ref error) = self.error {
            let error_widget = Paragraph::new(error.as_str())
                .style(Style::default().fg(theme.error))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Error ")
                        .style(Style::default().bg(theme.background)),
                )
                .wrap(Wrap { trim: true });
            frame.render_widget(error_widget, chunks[3]);
        }

        let help = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Confirm  "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Cancel"),
        ])])
        .style(Style::default().fg(theme.text).bg(theme.background));
        frame.render_widget(help, chunks[4]);
    }
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(prompt: &mut TextPrompt, text: &str) {
        for c in text.chars() {
            prompt.handle_input(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_add_location_requires_comma_format() {
        let mut prompt = TextPrompt::new_add_location();
        type_text(&mut prompt, "Lisbon");
        assert!(prompt.handle_input(key(KeyCode::Enter)).is_none());
        assert!(prompt.error.is_some());

        type_text(&mut prompt, ", PT");
        let event = prompt.handle_input(key(KeyCode::Enter));
        assert_eq!(
            event,
            Some(TextPromptEvent::Confirmed {
                kind: PromptKind::AddLocation,
                value: "Lisbon, PT".to_string(),
            })
        );
    }

    #[test]
    fn test_add_location_rejects_empty_halves() {
        let mut prompt = TextPrompt::new_add_location();
        type_text(&mut prompt, ", PT");
        assert!(prompt.handle_input(key(KeyCode::Enter)).is_none());
        assert!(prompt.error.is_some());
    }

    #[test]
    fn test_typing_clears_error() {
        let mut prompt = TextPrompt::new_add_location();
        prompt.handle_input(key(KeyCode::Enter));
        assert!(prompt.error.is_some());
        prompt.handle_input(key(KeyCode::Char('x')));
        assert!(prompt.error.is_none());
    }

    #[test]
    fn test_edit_label_prefills_and_accepts_empty() {
        let mut prompt = TextPrompt::new_edit_label("42", Some("Work"));
        assert_eq!(prompt.input, "Work");
        for _ in 0..4 {
            prompt.handle_input(key(KeyCode::Backspace));
        }
        let event = prompt.handle_input(key(KeyCode::Enter));
        assert_eq!(
            event,
            Some(TextPromptEvent::Confirmed {
                kind: PromptKind::EditLabel {
                    id: "42".to_string()
                },
                value: String::new(),
            })
        );
    }

    #[test]
    fn test_escape_cancels() {
        let mut prompt = TextPrompt::new_add_location();
        assert_eq!(
            prompt.handle_input(key(KeyCode::Esc)),
            Some(TextPromptEvent::Cancelled)
        );
    }
}
