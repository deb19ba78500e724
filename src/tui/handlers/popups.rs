//! Popup input handlers.

use anyhow::Result;
use crossterm::event::{self, KeyCode};
use tracing::warn;

use crate::config::Config;
use crate::tui::settings_manager::SettingsManagerEvent;
use crate::tui::text_prompt::TextPromptEvent;
use crate::tui::{AppState, Component, Popup};

use super::locations;

/// Route a key event to the active popup. The popup is taken out of the
/// state first so its handler can mutate the rest of the state without
/// aliasing, and is put back unless it closed itself.
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(popup) = state.active_popup.take() else {
        return Ok(false);
    };

    match popup {
        Popup::Settings(mut manager) => match manager.handle_input(key) {
            Some(SettingsManagerEvent::Updated(config)) => {
                apply_config(state, config);
                state.active_popup = Some(Popup::Settings(manager));
            }
            Some(SettingsManagerEvent::Closed) => {
                state.set_status("Settings closed");
            }
            None => {
                state.active_popup = Some(Popup::Settings(manager));
            }
        },
        Popup::Prompt(mut prompt) => match prompt.handle_input(key) {
            Some(TextPromptEvent::Confirmed { kind, value }) => {
                return locations::apply_prompt(state, kind, value);
            }
            Some(TextPromptEvent::Cancelled) => {}
            None => {
                state.active_popup = Some(Popup::Prompt(prompt));
            }
        },
        Popup::ConfirmDelete { id, name } => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                return locations::handle_confirm_delete(state, &id);
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                state.set_status("Delete cancelled");
            }
            _ => {
                state.active_popup = Some(Popup::ConfirmDelete { id, name });
            }
        },
        // Any key closes the help overlay
        Popup::Help => {}
    }

    Ok(false)
}

/// Apply an updated config immediately and persist it unless the session
/// is ephemeral.
fn apply_config(state: &mut AppState, config: Config) {
    state.config = config;
    if state.persist_config {
        if let Err(e) = config.save_to(&state.config_dir) {
            warn!(error = %e, "failed to save settings");
            state.set_error(format!("Failed to save settings: {e}"));
        }
    }
}
