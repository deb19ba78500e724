//! Saved locations and their context roles.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ConditionKind, MoodPreset};

/// Label that marks a location as the user's home base. Election during
/// first-run initialization matches this exactly.
pub const HOME_LABEL: &str = "Home";

/// Role a location plays in the travel context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextRole {
    /// Where the user is right now.
    Current,
    /// Where the user is headed next.
    Next,
    /// The user's home base.
    Home,
    /// In the directory with no special role.
    #[default]
    Saved,
}

impl ContextRole {
    /// Sort rank: Current first, then Next, Home, Saved.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Current => 0,
            Self::Next => 1,
            Self::Home => 2,
            Self::Saved => 3,
        }
    }

    /// Badge text shown next to the location in lists.
    #[must_use]
    pub const fn badge(self) -> Option<&'static str> {
        match self {
            Self::Current => Some("CURRENT"),
            Self::Next => Some("NEXT"),
            Self::Home => Some("HOME"),
            Self::Saved => None,
        }
    }
}

impl fmt::Display for ContextRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Current => "current",
            Self::Next => "next",
            Self::Home => "home",
            Self::Saved => "saved",
        };
        write!(f, "{s}")
    }
}

/// A place the user tracks weather for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Stable identifier; seeds use small numerals, user-added entries UUIDs.
    pub id: String,
    /// City name.
    pub city: String,
    /// Country or region code.
    pub country: String,
    /// Optional free-text label ("Home", "Work", "Work 2", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Current temperature in °C.
    pub temp_c: i16,
    /// Current condition.
    pub condition: ConditionKind,
    /// Daytime high in °C.
    pub high_c: i16,
    /// Overnight low in °C.
    pub low_c: i16,
    /// Pinned to the top of the directory within its role group.
    #[serde(default)]
    pub is_favorite: bool,
    /// Role in the travel context; stamped from the context by id.
    #[serde(default)]
    pub context_role: ContextRole,
    /// Explicit mood preset; when absent the label-derived default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_preset: Option<MoodPreset>,
}

impl Location {
    /// Creates a location with neutral conditions and no role.
    pub fn new(id: impl Into<String>, city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            city: city.into(),
            country: country.into(),
            label: None,
            temp_c: 0,
            condition: ConditionKind::PartlyCloudy,
            high_c: 0,
            low_c: 0,
            is_favorite: false,
            context_role: ContextRole::Saved,
            mood_preset: None,
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets current conditions.
    #[must_use]
    pub fn with_conditions(
        mut self,
        temp_c: i16,
        condition: ConditionKind,
        high_c: i16,
        low_c: i16,
    ) -> Self {
        self.temp_c = temp_c;
        self.condition = condition;
        self.high_c = high_c;
        self.low_c = low_c;
        self
    }

    /// Marks the location as a favorite.
    #[must_use]
    pub fn favorite(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    /// Sets an explicit mood preset.
    #[must_use]
    pub fn with_mood(mut self, preset: MoodPreset) -> Self {
        self.mood_preset = Some(preset);
        self
    }

    /// Whether this location carries the exact home label.
    #[must_use]
    pub fn is_home_labeled(&self) -> bool {
        self.label.as_deref() == Some(HOME_LABEL)
    }

    /// "City, Country" display form.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    /// Clamps out-of-range values in place (mood sound level).
    pub fn sanitize(&mut self) {
        if let Some(preset) = &mut self.mood_preset {
            preset.sanitize();
        }
    }
}
