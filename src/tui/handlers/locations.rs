//! Locations panel operations: roles, favorites, directory editing.

use anyhow::Result;

use crate::models::{ContextRole, Location};
use crate::tui::text_prompt::{PromptKind, TextPrompt};
use crate::tui::{AppState, Popup};

/// The entry under the cursor, cloned out of the sorted view so the
/// handlers below can mutate state freely.
fn selected_location(state: &AppState) -> Option<Location> {
    state
        .directory
        .sorted()
        .get(state.location_selection)
        .map(|loc| (*loc).clone())
}

/// Travel to the selected location: it becomes current and a fresh
/// transition starts.
pub fn handle_make_current(state: &mut AppState) -> Result<bool> {
    let Some(location) = selected_location(state) else {
        return Ok(false);
    };
    let city = location.city.clone();
    state.manager.set_current(location);
    state.directory.sync_roles(state.manager.context());
    state.set_status(format!("Traveling to {city}"));
    Ok(false)
}

/// Toggle the selected location as the next destination.
pub fn handle_mark_next(state: &mut AppState) -> Result<bool> {
    let Some(location) = selected_location(state) else {
        return Ok(false);
    };
    if state.manager.role_of(&location.id) == ContextRole::Next {
        state.manager.set_next(None);
        state.set_status("Next destination cleared");
    } else {
        let city = location.city.clone();
        state.manager.set_next(Some(location));
        state.set_status(format!("Next destination: {city}"));
    }
    state.directory.sync_roles(state.manager.context());
    Ok(false)
}

/// Make the selected location the home base.
pub fn handle_mark_home(state: &mut AppState) -> Result<bool> {
    let Some(location) = selected_location(state) else {
        return Ok(false);
    };
    let city = location.city.clone();
    state.manager.set_home(location);
    state.directory.sync_roles(state.manager.context());
    state.set_status(format!("Home base: {city}"));
    Ok(false)
}

/// Pin or unpin the selected location.
pub fn handle_toggle_favorite(state: &mut AppState) -> Result<bool> {
    let Some(location) = selected_location(state) else {
        return Ok(false);
    };
    match state.directory.toggle_favorite(&location.id) {
        Some(true) => state.set_status(format!("Pinned {}", location.city)),
        Some(false) => state.set_status(format!("Unpinned {}", location.city)),
        None => {}
    }
    Ok(false)
}

/// Ask for confirmation before deleting. The last entry is protected.
pub fn handle_request_delete(state: &mut AppState) -> Result<bool> {
    if state.directory.len() <= 1 {
        state.set_error("Cannot delete the last location");
        return Ok(false);
    }
    let Some(location) = selected_location(state) else {
        return Ok(false);
    };
    state.active_popup = Some(Popup::ConfirmDelete {
        id: location.id.clone(),
        name: location.display_name(),
    });
    Ok(false)
}

/// Actually delete, after confirmation. The travel context keeps its own
/// copies, so a role-holder disappearing from the directory does not
/// disturb the context.
pub fn handle_confirm_delete(state: &mut AppState, id: &str) -> Result<bool> {
    if let Some(removed) = state.directory.remove(id) {
        state.location_selection = state
            .location_selection
            .min(state.directory.len().saturating_sub(1));
        state.directory.sync_roles(state.manager.context());
        state.set_status(format!("Deleted {}", removed.city));
    }
    Ok(false)
}

/// Open the relabel prompt, prefilled with the current label.
pub fn handle_edit_label(state: &mut AppState) -> Result<bool> {
    let Some(location) = selected_location(state) else {
        return Ok(false);
    };
    state.active_popup = Some(Popup::Prompt(TextPrompt::new_edit_label(
        location.id.clone(),
        location.label.as_deref(),
    )));
    Ok(false)
}

/// Route a confirmed prompt back into the directory.
pub fn apply_prompt(state: &mut AppState, kind: PromptKind, value: String) -> Result<bool> {
    match kind {
        PromptKind::AddLocation => {
            // Validated by the prompt; the comma is guaranteed
            if let Some((city, country)) = value.split_once(',') {
                let city = city.trim().to_string();
                state
                    .directory
                    .add(city.clone(), country.trim().to_string(), None);
                state.directory.sync_roles(state.manager.context());
                state.set_status(format!("Added {city}"));
            }
        }
        PromptKind::EditLabel { id } => {
            let label = if value.is_empty() { None } else { Some(value) };
            if state.directory.set_label(&id, label) {
                state.set_status("Label updated");
            }
        }
    }
    Ok(false)
}
