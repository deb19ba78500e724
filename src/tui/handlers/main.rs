//! Top-level input routing and action dispatch.

use anyhow::Result;
use chrono::Local;
use crossterm::event::{self, KeyCode};

use crate::services::forecast;
use crate::shortcuts::{Action, ShortcutRegistry};
use crate::tui::settings_manager::SettingsManager;
use crate::tui::text_prompt::TextPrompt;
use crate::tui::{AppState, Focus, Popup, Tab};

use super::locations;

/// Route a key event: active popups consume input first, otherwise the
/// shortcut registry for the focused context decides. Returns true when
/// the application should quit.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    // If the error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() && matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        state.clear_error();
        return Ok(false);
    }

    if state.active_popup.is_some() {
        return super::handle_popup_input(state, key);
    }

    let registry = ShortcutRegistry::new();
    let context = match state.focus {
        Focus::Main => "main",
        Focus::Locations => "locations",
    };

    if let Some(action) = registry.lookup(context, key) {
        dispatch_action(state, action)
    } else {
        // No action mapped - ignore key
        Ok(false)
    }
}

/// Dispatch action to appropriate handler
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        // Navigation
        Action::NavigateUp => handle_navigate_up(state),
        Action::NavigateDown => handle_navigate_down(state),
        Action::NavigateLeft => handle_month_step(state, -1),
        Action::NavigateRight => handle_month_step(state, 1),

        // Tabs
        Action::NextTab => switch_tab(state, state.active_tab.next()),
        Action::PreviousTab => switch_tab(state, state.active_tab.previous()),
        Action::ShowToday => switch_tab(state, Tab::Today),
        Action::ShowFiveDay => switch_tab(state, Tab::FiveDay),
        Action::ShowMonthly => switch_tab(state, Tab::Monthly),

        // Dashboard
        Action::Activate => handle_activate(state),
        Action::Refresh => handle_refresh(state),
        Action::PreviousYear => handle_year_step(state, -1),
        Action::NextYear => handle_year_step(state, 1),

        // Locations panel
        Action::FocusLocations => {
            state.focus = Focus::Locations;
            state.location_selection = state
                .location_selection
                .min(state.directory.len().saturating_sub(1));
            Ok(false)
        }
        Action::MarkNext => locations::handle_mark_next(state),
        Action::MarkHome => locations::handle_mark_home(state),
        Action::ToggleFavorite => locations::handle_toggle_favorite(state),
        Action::AddLocation => {
            state.active_popup = Some(Popup::Prompt(TextPrompt::new_add_location()));
            Ok(false)
        }
        Action::DeleteLocation => locations::handle_request_delete(state),
        Action::EditLabel => locations::handle_edit_label(state),

        // Dialogs
        Action::OpenSettings => {
            state.active_popup = Some(Popup::Settings(SettingsManager::new(state.config)));
            Ok(false)
        }
        Action::ToggleHelp => {
            state.active_popup = Some(Popup::Help);
            Ok(false)
        }

        // General
        Action::Quit => {
            state.should_quit = true;
            Ok(true)
        }
        Action::Cancel => {
            if state.focus == Focus::Locations {
                state.focus = Focus::Main;
            } else {
                state.status_message.clear();
                state.error_message = None;
            }
            Ok(false)
        }
    }
}

fn switch_tab(state: &mut AppState, tab: Tab) -> Result<bool> {
    state.active_tab = tab;
    state.focus = Focus::Main;
    Ok(false)
}

fn handle_navigate_up(state: &mut AppState) -> Result<bool> {
    match state.focus {
        Focus::Locations => {
            let count = state.directory.len();
            if count > 0 {
                state.location_selection = state
                    .location_selection
                    .checked_sub(1)
                    .unwrap_or(count - 1);
            }
        }
        Focus::Main => {
            if state.active_tab == Tab::FiveDay {
                let count = state.five_day.len();
                if count > 0 {
                    state.day_selection =
                        state.day_selection.checked_sub(1).unwrap_or(count - 1);
                }
            }
        }
    }
    Ok(false)
}

fn handle_navigate_down(state: &mut AppState) -> Result<bool> {
    match state.focus {
        Focus::Locations => {
            let count = state.directory.len();
            if count > 0 {
                state.location_selection = (state.location_selection + 1) % count;
            }
        }
        Focus::Main => {
            if state.active_tab == Tab::FiveDay {
                let count = state.five_day.len();
                if count > 0 {
                    state.day_selection = (state.day_selection + 1) % count;
                }
            }
        }
    }
    Ok(false)
}

/// Step the calendar one month, carrying across year boundaries.
fn handle_month_step(state: &mut AppState, step: i32) -> Result<bool> {
    if state.active_tab != Tab::Monthly || state.focus != Focus::Main {
        return Ok(false);
    }
    let mut month = state.calendar_month as i32 + step;
    if month < 1 {
        month = 12;
        state.calendar_year -= 1;
    } else if month > 12 {
        month = 1;
        state.calendar_year += 1;
    }
    state.calendar_month = month as u32;
    Ok(false)
}

fn handle_year_step(state: &mut AppState, step: i32) -> Result<bool> {
    if state.active_tab == Tab::Monthly && state.focus == Focus::Main {
        state.calendar_year += step;
    }
    Ok(false)
}

fn handle_activate(state: &mut AppState) -> Result<bool> {
    match state.focus {
        Focus::Locations => locations::handle_make_current(state),
        Focus::Main => {
            if state.active_tab == Tab::FiveDay {
                state.expanded_day = if state.expanded_day == Some(state.day_selection) {
                    None
                } else {
                    Some(state.day_selection)
                };
            }
            Ok(false)
        }
    }
}

/// Re-pull the bundled dataset. Instant today, but the status flow
/// mirrors what a network fetch will need.
fn handle_refresh(state: &mut AppState) -> Result<bool> {
    state.data_status.begin_refresh();
    state.current = forecast::current_conditions();
    state.hourly = forecast::hourly();
    state.five_day = forecast::five_day();
    state.air_quality = forecast::air_quality();
    state.data_status.mark_ready(Local::now());
    state.set_status("Weather data refreshed");
    Ok(false)
}
