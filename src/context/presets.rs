//! Default mood presets and the accent color palette.
//!
//! Locations without an explicit mood preset get one derived from their
//! purpose. The table is total: unknown or absent purposes fall back to the
//! routine preset.

use crate::models::{
    ContrastPreference, Location, MoodPreset, Purpose, RgbColor, VisualIntensity,
};

/// Accent for calm moods: soft blue.
pub const ACCENT_CALM: RgbColor = RgbColor::new(0x64, 0xB5, 0xF6);
/// Accent for expressive moods: vibrant red.
pub const ACCENT_EXPRESSIVE: RgbColor = RgbColor::new(0xFF, 0x6B, 0x6B);
/// Accent for balanced moods: green.
pub const ACCENT_BALANCED: RgbColor = RgbColor::new(0x4C, 0xAF, 0x50);
/// Fallback accent used where no mood is in play (e.g. themes disabled).
pub const DEFAULT_ACCENT: RgbColor = RgbColor::new(0x42, 0xA5, 0xF5);

/// Returns the default mood preset for a purpose.
///
/// Work gets a calm, quiet, high-contrast preset; leisure an expressive and
/// louder one; home and everything else the balanced middle. Defaults never
/// carry an accent color.
#[must_use]
pub fn default_mood_preset(purpose: Option<Purpose>) -> MoodPreset {
    match purpose {
        Some(Purpose::Work) => {
            MoodPreset::new(VisualIntensity::Calm, 0.3, ContrastPreference::High)
                .with_purpose(Purpose::Work)
        }
        Some(Purpose::Leisure) => {
            MoodPreset::new(VisualIntensity::Expressive, 0.6, ContrastPreference::Standard)
                .with_purpose(Purpose::Leisure)
        }
        Some(Purpose::Home) => {
            MoodPreset::new(VisualIntensity::Balanced, 0.5, ContrastPreference::Standard)
                .with_purpose(Purpose::Home)
        }
        Some(Purpose::Routine) | None => {
            MoodPreset::new(VisualIntensity::Balanced, 0.5, ContrastPreference::Standard)
                .with_purpose(Purpose::Routine)
        }
    }
}

/// Resolves the effective mood for a location: its explicit preset if set,
/// otherwise the default derived from its label.
#[must_use]
pub fn resolve_mood(location: &Location) -> MoodPreset {
    location.mood_preset.clone().unwrap_or_else(|| {
        default_mood_preset(location.label.as_deref().and_then(Purpose::from_label))
    })
}

/// Maps a visual intensity to its accent color.
#[must_use]
pub const fn accent_for_intensity(intensity: VisualIntensity) -> RgbColor {
    match intensity {
        VisualIntensity::Calm => ACCENT_CALM,
        VisualIntensity::Expressive => ACCENT_EXPRESSIVE,
        VisualIntensity::Balanced => ACCENT_BALANCED,
    }
}
