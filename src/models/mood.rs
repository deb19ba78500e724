//! Mood presets attached to locations.
//!
//! A mood preset describes how the dashboard should feel while a location
//! is active: how animated the visuals are, how loud ambient cues may be,
//! and how much contrast the chrome uses. Presets are either set explicitly
//! on a location or derived from the location's label.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// How animated the dashboard presentation is for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualIntensity {
    /// Muted, low-motion presentation.
    Calm,
    /// Default presentation.
    Balanced,
    /// Rich, high-motion presentation.
    Expressive,
}

impl fmt::Display for VisualIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Calm => "calm",
            Self::Balanced => "balanced",
            Self::Expressive => "expressive",
        };
        write!(f, "{s}")
    }
}

/// Contrast preference for a location's presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastPreference {
    /// Regular palette.
    Standard,
    /// High-contrast palette, e.g. for focused work.
    High,
}

impl fmt::Display for ContrastPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Standard => "standard",
            Self::High => "high",
        };
        write!(f, "{s}")
    }
}

/// Why the user visits a location. Drives the default mood for locations
/// without an explicit preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    /// Office or other focused-work location.
    Work,
    /// Vacation or recreation spot.
    Leisure,
    /// The user's home base.
    Home,
    /// Anything else; the neutral fallback.
    Routine,
}

impl Purpose {
    /// Derives a purpose from a free-text location label.
    ///
    /// Only an exact (case-insensitive, trimmed) purpose word matches;
    /// labels like "Work 2" or "Gym" carry no purpose.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "work" => Some(Self::Work),
            "leisure" => Some(Self::Leisure),
            "home" => Some(Self::Home),
            _ => None,
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Work => "work",
            Self::Leisure => "leisure",
            Self::Home => "home",
            Self::Routine => "routine",
        };
        write!(f, "{s}")
    }
}

/// Presentation mood for a location.
///
/// `sound_level` is data only (no audio is played); it always stays within
/// `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodPreset {
    /// How animated the presentation is.
    pub visual_intensity: VisualIntensity,
    /// Ambient sound volume in `[0.0, 1.0]`.
    pub sound_level: f64,
    /// Contrast preference.
    pub contrast_preference: ContrastPreference,
    /// Explicit accent color; overrides the intensity-derived accent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<RgbColor>,
    /// Purpose tag this preset was derived from or assigned for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<Purpose>,
}

impl MoodPreset {
    /// Creates a preset with the sound level clamped into `[0.0, 1.0]`.
    #[must_use]
    pub fn new(
        visual_intensity: VisualIntensity,
        sound_level: f64,
        contrast_preference: ContrastPreference,
    ) -> Self {
        Self {
            visual_intensity,
            sound_level: clamp_unit(sound_level),
            contrast_preference,
            accent_color: None,
            purpose: None,
        }
    }

    /// Sets the purpose tag.
    #[must_use]
    pub fn with_purpose(mut self, purpose: Purpose) -> Self {
        self.purpose = Some(purpose);
        self
    }

    /// Sets an explicit accent color.
    #[must_use]
    pub fn with_accent_color(mut self, color: RgbColor) -> Self {
        self.accent_color = Some(color);
        self
    }

    /// Clamps out-of-range values in place. Applied to data read from disk,
    /// which may have been edited by hand.
    pub fn sanitize(&mut self) {
        self.sound_level = clamp_unit(self.sound_level);
    }
}

/// Clamps a value into `[0.0, 1.0]`; NaN collapses to 0.0.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
