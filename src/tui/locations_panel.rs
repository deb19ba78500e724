//! The locations side panel: saved places with their context-role badges.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::models::{ContextRole, Location};
use crate::services::units::format_temp;

use super::{AppState, Focus, Theme};

/// Locations panel widget
pub struct LocationsPanel;

impl LocationsPanel {
    /// Render the sorted directory with role badges and favorites.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let focused = state.focus == Focus::Locations;
        let accent_rgb = state.manager.accent_color();
        let accent = if focused {
            accent_rgb.to_ratatui_color()
        } else {
            accent_rgb.dim(70).to_ratatui_color()
        };

        let items: Vec<ListItem> = state
            .directory
            .sorted()
            .into_iter()
            .map(|location| Self::entry_item(state, location, accent, theme))
            .collect();

        let border_style = if focused {
            Style::default().fg(theme.active)
        } else {
            Style::default().fg(theme.inactive)
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Locations [L] ")
                    .border_style(border_style)
                    .style(Style::default().bg(theme.background)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            );

        let mut list_state = ListState::default();
        if focused && !state.directory.is_empty() {
            list_state.select(Some(state.location_selection));
        }
        f.render_stateful_widget(list, area, &mut list_state);
    }

    fn entry_item(
        state: &AppState,
        location: &Location,
        accent: ratatui::style::Color,
        theme: &Theme,
    ) -> ListItem<'static> {
        let unit = state.config.units.temperature;

        let star = if location.is_favorite { "★" } else { " " };
        let head = Line::from(vec![
            Span::styled(format!(" {star} "), Style::default().fg(theme.warning)),
            Span::styled(location.display_name(), Style::default().fg(theme.text)),
            Span::styled(
                format!(
                    "  {} {}",
                    format_temp(location.temp_c, unit),
                    location.condition.glyph()
                ),
                Style::default().fg(theme.text_secondary),
            ),
        ]);

        let mut tags: Vec<Span> = vec![Span::raw("   ")];
        if let Some(label) = &location.label {
            tags.push(Span::styled(
                label.clone(),
                Style::default().fg(theme.text_muted),
            ));
        }
        if let Some(badge) = location.context_role.badge() {
            if location.label.is_some() {
                tags.push(Span::styled(" · ", Style::default().fg(theme.text_muted)));
            }
            let badge_color = match location.context_role {
                ContextRole::Current => accent,
                ContextRole::Next => theme.warning,
                _ => theme.success,
            };
            tags.push(Span::styled(
                badge,
                Style::default()
                    .fg(badge_color)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        let tag_line = Line::from(tags);

        ListItem::new(Text::from(vec![head, tag_line]))
    }
}
