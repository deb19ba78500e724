//! Settings manager for display preferences.
//!
//! Provides a UI for configuring units, clock format, and theming.
//! Accessible via Shift+S shortcut.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::config::{Config, TemperatureUnit, ThemeMode, TimeFormat};
use crate::models::ConditionKind;

use super::{Component, Theme};

/// Setting group for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingGroup {
    /// Unit and clock preferences
    Units,
    /// Theme and palette preferences
    Appearance,
}

impl SettingGroup {
    /// Returns display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Units => "Units",
            Self::Appearance => "Appearance",
        }
    }
}

/// Settings that can be configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    /// Celsius or Fahrenheit
    TemperatureUnit,
    /// 12-hour or 24-hour clock
    TimeFormat,
    /// Chrome theme mode (Auto, Dark, Light)
    ThemeMode,
    /// Master switch for condition-driven palettes
    WeatherThemes,
    /// Follow the current location's condition
    AutoTheme,
    /// Pinned palette used when auto is off
    ManualTheme,
}

impl SettingItem {
    /// Returns all settings in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::TemperatureUnit,
            Self::TimeFormat,
            Self::ThemeMode,
            Self::WeatherThemes,
            Self::AutoTheme,
            Self::ManualTheme,
        ]
    }

    /// Returns which group this setting belongs to.
    #[must_use]
    pub const fn group(self) -> SettingGroup {
        match self {
            Self::TemperatureUnit | Self::TimeFormat => SettingGroup::Units,
            Self::ThemeMode | Self::WeatherThemes | Self::AutoTheme | Self::ManualTheme => {
                SettingGroup::Appearance
            }
        }
    }

    /// Returns a human-readable name for this setting.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::TemperatureUnit => "Temperature Unit",
            Self::TimeFormat => "Time Format",
            Self::ThemeMode => "Theme Mode",
            Self::WeatherThemes => "Weather Themes",
            Self::AutoTheme => "Auto Theme",
            Self::ManualTheme => "Manual Theme",
        }
    }

    /// Returns a description of this setting.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::TemperatureUnit => "Unit used for all displayed temperatures",
            Self::TimeFormat => "Clock style for hourly and sunrise/sunset times",
            Self::ThemeMode => "Color theme: Auto (follow OS), Dark, or Light",
            Self::WeatherThemes => "Tint the dashboard with condition-based palettes",
            Self::AutoTheme => "Pick the palette from the current location's conditions",
            Self::ManualTheme => "Palette to pin when Auto Theme is off",
        }
    }
}

/// Manager mode - determines what operation is being performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerMode {
    /// Browsing settings (default mode)
    Browsing,
    /// Selecting a theme mode (Auto, Dark, Light)
    SelectingThemeMode {
        /// Currently highlighted option index
        selected_option: usize,
    },
    /// Selecting the pinned manual palette
    SelectingManualTheme {
        /// Currently highlighted option index
        selected_option: usize,
    },
}

/// Events emitted by the settings manager
#[derive(Debug, Clone)]
pub enum SettingsManagerEvent {
    /// A setting changed; the parent should apply and persist this config.
    Updated(Config),
    /// Dialog dismissed.
    Closed,
}

const THEME_MODES: [ThemeMode; 3] = [ThemeMode::Auto, ThemeMode::Dark, ThemeMode::Light];

/// Settings dialog. Owns a working copy of the config; every change is
/// emitted to the parent immediately so the dashboard re-themes live.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    selected: usize,
    mode: ManagerMode,
    config: Config,
}

impl SettingsManager {
    /// Opens the dialog over the given config.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            selected: 0,
            mode: ManagerMode::Browsing,
            config,
        }
    }

    /// The working copy, as last edited.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    fn select_previous(&mut self) {
        let count = SettingItem::all().len();
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = count - 1;
        }
    }

    fn select_next(&mut self) {
        let count = SettingItem::all().len();
        self.selected = (self.selected + 1) % count;
    }

    fn handle_browsing(&mut self, key: KeyEvent) -> Option<SettingsManagerEvent> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(SettingsManagerEvent::Closed),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_selected(),
            _ => None,
        }
    }

    /// Toggles binary settings in place; opens a selector for the rest.
    fn activate_selected(&mut self) -> Option<SettingsManagerEvent> {
        let item = *SettingItem::all().get(self.selected)?;
        match item {
            SettingItem::TemperatureUnit => {
                self.config.toggle_temperature_unit();
                Some(SettingsManagerEvent::Updated(self.config))
            }
            SettingItem::TimeFormat => {
                self.config.toggle_time_format();
                Some(SettingsManagerEvent::Updated(self.config))
            }
            SettingItem::WeatherThemes => {
                self.config.toggle_weather_themes();
                Some(SettingsManagerEvent::Updated(self.config))
            }
            SettingItem::AutoTheme => {
                self.config.toggle_auto_theme();
                Some(SettingsManagerEvent::Updated(self.config))
            }
            SettingItem::ThemeMode => {
                let selected_option = THEME_MODES
                    .iter()
                    .position(|&m| m == self.config.theme.mode)
                    .unwrap_or(0);
                self.mode = ManagerMode::SelectingThemeMode { selected_option };
                None
            }
            SettingItem::ManualTheme => {
                let selected_option = ConditionKind::ALL
                    .iter()
                    .position(|&k| k == self.config.theme.manual_theme)
                    .unwrap_or(0);
                self.mode = ManagerMode::SelectingManualTheme { selected_option };
                None
            }
        }
    }

    fn handle_selector(&mut self, key: KeyEvent) -> Option<SettingsManagerEvent> {
        let count = match self.mode {
            ManagerMode::SelectingThemeMode { .. } => THEME_MODES.len(),
            ManagerMode::SelectingManualTheme { .. } => ConditionKind::ALL.len(),
            ManagerMode::Browsing => return None,
        };

        match key.code {
            KeyCode::Esc => {
                self.mode = ManagerMode::Browsing;
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let ManagerMode::SelectingThemeMode { selected_option }
                | ManagerMode::SelectingManualTheme { selected_option } = &mut self.mode
                {
                    *selected_option = selected_option.checked_sub(1).unwrap_or(count - 1);
                }
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let ManagerMode::SelectingThemeMode { selected_option }
                | ManagerMode::SelectingManualTheme { selected_option } = &mut self.mode
                {
                    *selected_option = (*selected_option + 1) % count;
                }
                None
            }
            KeyCode::Enter => {
                let event = match self.mode {
                    ManagerMode::SelectingThemeMode { selected_option } => {
                        self.config.theme.mode = THEME_MODES[selected_option];
                        Some(SettingsManagerEvent::Updated(self.config))
                    }
                    ManagerMode::SelectingManualTheme { selected_option } => {
                        self.config.set_manual_theme(ConditionKind::ALL[selected_option]);
                        Some(SettingsManagerEvent::Updated(self.config))
                    }
                    ManagerMode::Browsing => None,
                };
                self.mode = ManagerMode::Browsing;
                event
            }
            _ => None,
        }
    }

    /// Current display value for a setting.
    fn value_display(&self, item: SettingItem) -> String {
        match item {
            SettingItem::TemperatureUnit => match self.config.units.temperature {
                TemperatureUnit::Celsius => "Celsius (°C)".to_string(),
                TemperatureUnit::Fahrenheit => "Fahrenheit (°F)".to_string(),
            },
            SettingItem::TimeFormat => match self.config.units.time_format {
                TimeFormat::TwelveHour => "12-hour".to_string(),
                TimeFormat::TwentyFourHour => "24-hour".to_string(),
            },
            SettingItem::ThemeMode => theme_mode_name(self.config.theme.mode).to_string(),
            SettingItem::WeatherThemes => on_off(self.config.theme.weather_themes),
            SettingItem::AutoTheme => on_off(self.config.theme.auto_theme),
            SettingItem::ManualTheme => self.config.theme.manual_theme.display_name().to_string(),
        }
    }

    fn render_settings_list(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(5)])
            .split(area);

        let mut items: Vec<ListItem> = Vec::new();
        let mut current_group: Option<SettingGroup> = None;

        for (index, setting) in SettingItem::all().iter().enumerate() {
            let group = setting.group();
            if current_group != Some(group) {
                if current_group.is_some() {
                    items.push(ListItem::new(Line::from("")));
                }
                items.push(ListItem::new(Line::from(Span::styled(
                    format!("── {} ──", group.display_name()),
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ))));
                current_group = Some(group);
            }

            let selected = index == self.selected;
            let marker = if selected { "▶ " } else { "  " };
            let name_style = if selected {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };

            items.push(ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.primary)),
                Span::styled(format!("{:<18}", setting.display_name()), name_style),
                Span::styled(": ", Style::default().fg(theme.text_muted)),
                Span::styled(self.value_display(*setting), Style::default().fg(theme.success)),
            ])));
        }

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Settings"))
            .highlight_style(Style::default().bg(theme.surface));
        f.render_widget(list, chunks[0]);

        let description = SettingItem::all()
            .get(self.selected)
            .map_or("", |s| s.description());
        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled(
                description,
                Style::default().fg(theme.text_muted),
            )),
            Line::from(vec![
                Span::styled("↑/↓", Style::default().fg(theme.primary)),
                Span::raw(": Navigate  "),
                Span::styled("Enter", Style::default().fg(theme.primary)),
                Span::raw(": Change  "),
                Span::styled("Esc", Style::default().fg(theme.primary)),
                Span::raw(": Close"),
            ]),
        ];
        let help = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .alignment(Alignment::Left);
        f.render_widget(help, chunks[1]);
    }

    fn render_option_selector(
        f: &mut Frame,
        area: Rect,
        title: &str,
        options: &[(&str, String)],
        selected: usize,
        theme: &Theme,
    ) {
        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                title.to_string(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (index, (name, detail)) in options.iter().enumerate() {
            let marker = if index == selected { "▶ " } else { "  " };
            let style = if index == selected {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.primary)),
                Span::styled(format!("{name:<14}"), style),
                Span::styled(detail.clone(), Style::default().fg(theme.text_muted)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.primary)),
            Span::raw(": Select  "),
            Span::styled("Esc", Style::default().fg(theme.primary)),
            Span::raw(": Back"),
        ]));

        let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
        f.render_widget(paragraph, area);
    }
}

impl Component for SettingsManager {
    type Event = SettingsManagerEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match self.mode {
            ManagerMode::Browsing => self.handle_browsing(key),
            ManagerMode::SelectingThemeMode { .. } | ManagerMode::SelectingManualTheme { .. } => {
                self.handle_selector(key)
            }
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // Center the dialog (70% width, 70% height)
        let dialog_width = (area.width * 70) / 100;
        let dialog_height = (area.height * 70) / 100;
        let dialog_area = Rect {
            x: area.x + (area.width - dialog_width) / 2,
            y: area.y + (area.height - dialog_height) / 2,
            width: dialog_width,
            height: dialog_height,
        };

        f.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Settings (Shift+S) ")
            .style(Style::default().bg(theme.background));
        f.render_widget(block, dialog_area);

        let inner_area = Rect {
            x: dialog_area.x + 2,
            y: dialog_area.y + 1,
            width: dialog_area.width.saturating_sub(4),
            height: dialog_area.height.saturating_sub(2),
        };

        match self.mode {
            ManagerMode::Browsing => self.render_settings_list(f, inner_area, theme),
            ManagerMode::SelectingThemeMode { selected_option } => {
                let options: Vec<(&str, String)> = THEME_MODES
                    .iter()
                    .map(|&m| (theme_mode_name(m), theme_mode_detail(m).to_string()))
                    .collect();
                Self::render_option_selector(
                    f,
                    inner_area,
                    "Theme Mode",
                    &options,
                    selected_option,
                    theme,
                );
            }
            ManagerMode::SelectingManualTheme { selected_option } => {
                let options: Vec<(&str, String)> = ConditionKind::ALL
                    .iter()
                    .map(|&k| (k.display_name(), k.glyph().to_string()))
                    .collect();
                Self::render_option_selector(
                    f,
                    inner_area,
                    "Manual Theme",
                    &options,
                    selected_option,
                    theme,
                );
            }
        }
    }
}

const fn theme_mode_name(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Auto => "Auto",
        ThemeMode::Dark => "Dark",
        ThemeMode::Light => "Light",
    }
}

const fn theme_mode_detail(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Auto => "follow the OS preference",
        ThemeMode::Dark => "always dark chrome",
        ThemeMode::Light => "always light chrome",
    }
}

fn on_off(value: bool) -> String {
    if value { "On" } else { "Off" }.to_string()
}
