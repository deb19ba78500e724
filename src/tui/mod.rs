//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all dashboard widgets using Ratatui.

// Allow clone assignment patterns - common in UI state management
#![allow(clippy::assigning_clones)]
// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod component;
pub mod five_day;
pub mod handlers;
pub mod header;
pub mod help;
pub mod locations_panel;
pub mod monthly;
pub mod settings_manager;
pub mod status_bar;
pub mod text_prompt;
pub mod theme;
pub mod today;

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::context::{ContextManager, ContextStore, SystemClock};
use crate::models::{
    AirQuality, ConditionKind, CurrentConditions, DataStatus, DayForecast, HourlyEntry,
};
use crate::services::forecast;
use crate::services::locations::LocationDirectory;

pub use component::Component;
pub use five_day::FiveDayTab;
pub use handlers::handle_key_event;
pub use header::Header;
pub use help::HelpOverlay;
pub use locations_panel::LocationsPanel;
pub use monthly::MonthlyTab;
pub use settings_manager::SettingsManager;
pub use status_bar::StatusBar;
pub use text_prompt::TextPrompt;
pub use theme::Theme;
pub use today::TodayTab;

use theme::WeatherPalette;

/// Dashboard tabs in the main pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Current conditions, the hourly strip, and air quality.
    Today,
    /// Five-day outlook with expandable rows.
    FiveDay,
    /// Calendar grid for one month.
    Monthly,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Self; 3] = [Self::Today, Self::FiveDay, Self::Monthly];

    /// Human-readable tab name for the header.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::FiveDay => "5-Day",
            Self::Monthly => "Monthly",
        }
    }

    /// The number key that jumps straight to this tab.
    #[must_use]
    pub const fn key_hint(self) -> &'static str {
        match self {
            Self::Today => "1",
            Self::FiveDay => "2",
            Self::Monthly => "3",
        }
    }

    /// The tab to the right, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Today => Self::FiveDay,
            Self::FiveDay => Self::Monthly,
            Self::Monthly => Self::Today,
        }
    }

    /// The tab to the left, wrapping.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Today => Self::Monthly,
            Self::FiveDay => Self::Today,
            Self::Monthly => Self::FiveDay,
        }
    }
}

/// Which pane receives unprefixed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The tab content on the left.
    Main,
    /// The locations side panel.
    Locations,
}

/// Modal popups. At most one is active, and it consumes all input.
#[derive(Debug)]
pub enum Popup {
    /// Settings dialog (Shift+S).
    Settings(SettingsManager),
    /// Text prompt for adding a location or editing a label.
    Prompt(TextPrompt),
    /// Confirmation before a location is deleted.
    ConfirmDelete {
        /// Id of the location to delete.
        id: String,
        /// Display name shown in the prompt.
        name: String,
    },
    /// Keybinding reference (?).
    Help,
}

/// Application state for the TUI.
pub struct AppState {
    /// Travel context: current/next/home roles plus the live mood transition.
    pub manager: ContextManager<Box<dyn ContextStore>, SystemClock>,
    /// Every location the dashboard knows about.
    pub directory: LocationDirectory,
    /// User settings.
    pub config: Config,
    /// Directory holding the settings file.
    pub config_dir: PathBuf,
    /// Whether settings changes are written back to disk.
    pub persist_config: bool,
    /// Freshness of the weather dataset.
    pub data_status: DataStatus,
    /// Conditions right now at the current location.
    pub current: CurrentConditions,
    /// The next hours of today.
    pub hourly: Vec<HourlyEntry>,
    /// The five-day outlook.
    pub five_day: Vec<DayForecast>,
    /// Today's air quality reading.
    pub air_quality: AirQuality,
    /// Active chrome theme, re-resolved every frame.
    pub theme: Theme,
    /// Tab shown in the main pane.
    pub active_tab: Tab,
    /// Pane with keyboard focus.
    pub focus: Focus,
    /// Selected row on the 5-Day tab.
    pub day_selection: usize,
    /// Expanded row on the 5-Day tab, if any.
    pub expanded_day: Option<usize>,
    /// Selected row in the locations panel.
    pub location_selection: usize,
    /// Year shown on the Monthly tab.
    pub calendar_year: i32,
    /// Month shown on the Monthly tab (1-12).
    pub calendar_month: u32,
    /// Active popup, if any.
    pub active_popup: Option<Popup>,
    /// Status bar message.
    pub status_message: String,
    /// Error shown in the overlay on top of everything else.
    pub error_message: Option<String>,
    /// Flag to quit the application.
    pub should_quit: bool,
}

impl AppState {
    /// Builds the dashboard state: restores (or elects) the travel context,
    /// stamps roles onto the directory, and loads the weather dataset.
    pub fn new(
        store: Box<dyn ContextStore>,
        config: Config,
        config_dir: PathBuf,
        persist_config: bool,
    ) -> Self {
        let mut directory = LocationDirectory::with_defaults();
        let manager = ContextManager::new(store, SystemClock, directory.entries());
        directory.sync_roles(manager.context());

        let now = Local::now();
        let mut data_status = DataStatus::new();
        data_status.mark_ready(now);

        Self {
            manager,
            directory,
            theme: Theme::resolve(config.theme.mode),
            config,
            config_dir,
            persist_config,
            data_status,
            current: forecast::current_conditions(),
            hourly: forecast::hourly(),
            five_day: forecast::five_day(),
            air_quality: forecast::air_quality(),
            active_tab: Tab::Today,
            focus: Focus::Main,
            day_selection: 0,
            expanded_day: None,
            location_selection: 0,
            calendar_year: forecast::DATASET_YEAR,
            calendar_month: forecast::DATASET_MONTH,
            active_popup: None,
            status_message: String::from("Press ? for help"),
            error_message: None,
            should_quit: false,
        }
    }

    /// Set status message, clearing any error.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Condition driving weather theming: the current location's, or a
    /// neutral default before any location holds the role.
    #[must_use]
    pub fn current_condition(&self) -> ConditionKind {
        self.manager
            .context()
            .current
            .as_ref()
            .map_or(ConditionKind::PartlyCloudy, |location| location.condition)
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS, Dark/Light are explicit)
        state.theme = Theme::resolve(state.config.theme.mode);

        // Advance any running mood transition before drawing
        state.manager.tick();

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    // This ensures consistent background regardless of terminal settings
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header: identity row + tab row
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Status bar (message + freshness + help)
        ])
        .split(f.area());

    let palette = theme::active_palette(&state.config.theme, state.current_condition());

    Header::render(f, chunks[0], state, &state.theme, palette);
    render_main_content(f, chunks[1], state, palette);
    StatusBar::render(f, chunks[2], state, &state.theme);

    // Render popup if active
    if let Some(popup) = &state.active_popup {
        render_popup(f, popup, state);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render main content: the active tab beside the locations panel
fn render_main_content(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: Option<&'static WeatherPalette>,
) {
    let columns = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(34)])
        .split(area);

    match state.active_tab {
        Tab::Today => TodayTab::render(f, columns[0], state, &state.theme, palette),
        Tab::FiveDay => FiveDayTab::render(f, columns[0], state, &state.theme),
        Tab::Monthly => MonthlyTab::render(f, columns[0], state, &state.theme, palette),
    }

    LocationsPanel::render(f, columns[1], state, &state.theme);
}

/// Render active popup
fn render_popup(f: &mut Frame, popup: &Popup, state: &AppState) {
    match popup {
        Popup::Settings(manager) => manager.render(f, f.area(), &state.theme),
        Popup::Prompt(prompt) => prompt.render(f, f.area(), &state.theme),
        Popup::ConfirmDelete { name, .. } => render_confirm_delete(f, name, &state.theme),
        Popup::Help => HelpOverlay::render(f, f.area(), &state.theme),
    }
}

fn render_confirm_delete(f: &mut Frame, name: &str, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    // Render opaque background
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let text = vec![
        Line::from(""),
        Line::from(format!("Delete {name}?")),
        Line::from(""),
        Line::from("  [y/Enter] Delete"),
        Line::from("  [n/Esc] Cancel"),
    ];

    let prompt = Paragraph::new(text).block(
        Block::default()
            .title(" Delete Location ")
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.warning)),
    );

    f.render_widget(prompt, area);
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    // Render opaque background
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(2), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ])])
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
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
    use crate::context::MemoryContextStore;

    fn test_state() -> AppState {
        AppState::new(
            Box::new(MemoryContextStore::new()),
            Config::default(),
            PathBuf::from("/tmp/sky-bulletin-test"),
            false,
        )
    }

    #[test]
    fn test_tab_cycle_wraps_both_ways() {
        assert_eq!(Tab::Today.next(), Tab::FiveDay);
        assert_eq!(Tab::Monthly.next(), Tab::Today);
        assert_eq!(Tab::Today.previous(), Tab::Monthly);
        for tab in Tab::ALL {
            assert_eq!(tab.next().previous(), tab);
        }
    }

    #[test]
    fn test_new_state_elects_home_as_current() {
        let state = test_state();
        let current = state.manager.context().current.clone();
        assert_eq!(current.map(|loc| loc.city), Some("Littleton".to_string()));
        assert_eq!(state.current_condition(), ConditionKind::PartlyCloudy);
    }

    #[test]
    fn test_new_state_stamps_directory_roles() {
        let state = test_state();
        let current = state
            .directory
            .entries()
            .iter()
            .find(|loc| loc.context_role == crate::models::ContextRole::Current);
        assert_eq!(current.map(|loc| loc.city.as_str()), Some("Littleton"));
    }

    #[test]
    fn test_set_status_clears_error() {
        let mut state = test_state();
        state.set_error("boom");
        assert!(state.error_message.is_some());
        state.set_status("all good");
        assert_eq!(state.status_message, "all good");
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_calendar_opens_on_dataset_month() {
        let state = test_state();
        assert_eq!(state.calendar_year, 2025);
        assert_eq!(state.calendar_month, 5);
    }
}
