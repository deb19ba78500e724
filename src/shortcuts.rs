//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions.
//! Bindings are registered per context ("main" for the dashboard, "locations"
//! for the side panel) so the same key can mean different things depending on
//! where the focus sits.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,

    // === TAB SWITCHING ===
    NextTab,
    PreviousTab,
    ShowToday,
    ShowFiveDay,
    ShowMonthly,

    // === DASHBOARD ===
    Activate,
    Refresh,
    PreviousYear,
    NextYear,

    // === LOCATIONS PANEL ===
    FocusLocations,
    MarkNext,
    MarkHome,
    ToggleFavorite,
    AddLocation,
    DeleteLocation,
    EditLabel,

    // === DIALOGS ===
    OpenSettings,
    ToggleHelp,

    // === GENERAL ===
    Quit,
    Cancel,
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the
/// application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_locations_shortcuts();
        registry
    }

    /// Register all shortcuts for the main dashboard context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "main";

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Left, M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Right, M::NONE, Action::NavigateRight);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('h'), M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::NavigateRight);

        // === TABS ===
        self.register(ctx, K::Tab, M::NONE, Action::NextTab);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousTab);
        self.register(ctx, K::Char('1'), M::NONE, Action::ShowToday);
        self.register(ctx, K::Char('2'), M::NONE, Action::ShowFiveDay);
        self.register(ctx, K::Char('3'), M::NONE, Action::ShowMonthly);

        // === DASHBOARD ===
        self.register(ctx, K::Enter, M::NONE, Action::Activate);
        self.register(ctx, K::Char('r'), M::NONE, Action::Refresh);
        self.register(ctx, K::PageUp, M::NONE, Action::PreviousYear);
        self.register(ctx, K::PageDown, M::NONE, Action::NextYear);

        // === PANEL FOCUS ===
        self.register(ctx, K::Char('L'), M::SHIFT, Action::FocusLocations);
        self.register(ctx, K::Char('o'), M::NONE, Action::FocusLocations);

        // === DIALOGS ===
        self.register(ctx, K::Char('S'), M::SHIFT, Action::OpenSettings);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register all shortcuts for the locations panel context.
    fn register_locations_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "locations";

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);

        // === TABS (keep browsing while the panel is focused) ===
        self.register(ctx, K::Tab, M::NONE, Action::NextTab);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousTab);
        self.register(ctx, K::Char('1'), M::NONE, Action::ShowToday);
        self.register(ctx, K::Char('2'), M::NONE, Action::ShowFiveDay);
        self.register(ctx, K::Char('3'), M::NONE, Action::ShowMonthly);

        // === CONTEXT ROLES ===
        self.register(ctx, K::Enter, M::NONE, Action::Activate);
        self.register(ctx, K::Char('n'), M::NONE, Action::MarkNext);
        self.register(ctx, K::Char('m'), M::NONE, Action::MarkHome);

        // === DIRECTORY EDITING ===
        self.register(ctx, K::Char('f'), M::NONE, Action::ToggleFavorite);
        self.register(ctx, K::Char('a'), M::NONE, Action::AddLocation);
        self.register(ctx, K::Char('d'), M::NONE, Action::DeleteLocation);
        self.register(ctx, K::Delete, M::NONE, Action::DeleteLocation);
        self.register(ctx, K::Char('r'), M::NONE, Action::EditLabel);

        // === DIALOGS ===
        self.register(ctx, K::Char('S'), M::SHIFT, Action::OpenSettings);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
