//! Weather condition and forecast data types.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weather condition categories. Each maps to a theme palette and an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionKind {
    /// Clear daytime sky.
    Sunny,
    /// Sun with scattered clouds.
    PartlyCloudy,
    /// Overcast.
    Cloudy,
    /// Rain showers.
    Rainy,
    /// Thunderstorms.
    Stormy,
    /// Snowfall.
    Snowy,
    /// Fog or mist.
    Foggy,
    /// Strong winds.
    Windy,
    /// Clear night sky.
    ClearNight,
    /// Extreme heat.
    Heatwave,
    /// Tornado warning.
    Tornado,
    /// Blizzard conditions.
    Blizzard,
}

impl ConditionKind {
    /// All condition kinds, in theme-picker order.
    pub const ALL: [Self; 12] = [
        Self::Sunny,
        Self::PartlyCloudy,
        Self::Cloudy,
        Self::Rainy,
        Self::Stormy,
        Self::Snowy,
        Self::Foggy,
        Self::Windy,
        Self::ClearNight,
        Self::Heatwave,
        Self::Tornado,
        Self::Blizzard,
    ];

    /// Human-readable condition name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::Stormy => "Thunderstorms",
            Self::Snowy => "Snowy",
            Self::Foggy => "Foggy",
            Self::Windy => "Windy",
            Self::ClearNight => "Clear Night",
            Self::Heatwave => "Heatwave",
            Self::Tornado => "Tornado Warning",
            Self::Blizzard => "Blizzard",
        }
    }

    /// Single-cell icon used in lists and the tab views.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Sunny | Self::Heatwave => "☀",
            Self::PartlyCloudy => "⛅",
            Self::Cloudy | Self::Foggy => "☁",
            Self::Rainy => "☂",
            Self::Stormy | Self::Tornado => "⚡",
            Self::Snowy | Self::Blizzard => "❄",
            Self::Windy => "≋",
            Self::ClearNight => "☾",
        }
    }

    /// Whether this condition warrants a severe-weather notice on the
    /// current-conditions card.
    #[must_use]
    pub const fn is_severe(self) -> bool {
        matches!(self, Self::Stormy | Self::Tornado | Self::Blizzard)
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Wall-clock time of day, formatted per the user's time-format setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    /// Hour 0-23.
    pub hour: u8,
    /// Minute 0-59.
    pub minute: u8,
}

impl ClockTime {
    /// Creates a clock time. Values are taken as-is; callers pass literals.
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }
}

/// One entry in the hourly forecast strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyEntry {
    /// Time of the entry; `None` means "Now".
    pub time: Option<ClockTime>,
    /// Temperature in °C.
    pub temp_c: i16,
    /// Condition summary text.
    pub condition: &'static str,
    /// Condition kind for the icon.
    pub kind: ConditionKind,
    /// Chance of precipitation, percent.
    pub precip_pct: u8,
    /// Wind speed in km/h.
    pub wind_kmh: u8,
    /// Relative humidity, percent.
    pub humidity_pct: u8,
}

/// Abbreviated hourly sample inside an expanded day row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHourSample {
    /// Time of the sample.
    pub time: ClockTime,
    /// Temperature in °C.
    pub temp_c: i16,
    /// Chance of precipitation, percent.
    pub precip_pct: u8,
}

/// Extra detail shown when a day row is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayDetails {
    /// Relative humidity, percent.
    pub humidity_pct: u8,
    /// UV index on the 0-11 scale.
    pub uv_index: u8,
    /// Sunrise time.
    pub sunrise: ClockTime,
    /// Sunset time.
    pub sunset: ClockTime,
    /// Visibility in km.
    pub visibility_km: u8,
    /// Barometric pressure in millibars.
    pub pressure_mb: u16,
}

/// One day in the 5-day forecast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayForecast {
    /// Display label, e.g. "Monday 26".
    pub day: &'static str,
    /// Daytime high in °C.
    pub high_c: i16,
    /// Overnight low in °C.
    pub low_c: i16,
    /// Condition summary text.
    pub condition: &'static str,
    /// Condition kind for the icon.
    pub kind: ConditionKind,
    /// Chance of precipitation, percent.
    pub precip_pct: u8,
    /// Wind summary text.
    pub wind: &'static str,
    /// Hourly samples revealed on expansion.
    pub hourly: Vec<DayHourSample>,
    /// Detail block revealed on expansion.
    pub details: DayDetails,
}

/// Detailed current conditions for the today card.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Display date, e.g. "Monday, 26 May".
    pub date_label: &'static str,
    /// Temperature in °C.
    pub temp_c: i16,
    /// Apparent temperature in °C.
    pub feels_like_c: i16,
    /// Daytime high in °C.
    pub day_c: i16,
    /// Overnight low in °C.
    pub night_c: i16,
    /// Relative humidity, percent.
    pub humidity_pct: u8,
    /// Wind summary, e.g. "NW 7 mph".
    pub wind: &'static str,
    /// UV index summary, e.g. "Low (2)".
    pub uv_label: &'static str,
    /// Barometric pressure in millibars.
    pub pressure_mb: f64,
    /// Visibility summary.
    pub visibility: &'static str,
    /// Sunrise time.
    pub sunrise: ClockTime,
    /// Sunset time.
    pub sunset: ClockTime,
}

/// Air quality reading for the sidebar card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirQuality {
    /// Index on the 0-100 scale.
    pub index: u8,
    /// Qualitative label, e.g. "Good".
    pub label: &'static str,
}

/// One cell of the monthly calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    /// Day of month, 1-based.
    pub day: u8,
    /// Representative temperature in °C.
    pub temp_c: i16,
    /// Daytime high in °C.
    pub high_c: i16,
    /// Overnight low in °C.
    pub low_c: i16,
    /// Condition kind for the icon.
    pub kind: ConditionKind,
    /// Chance of precipitation, percent.
    pub precip_pct: u8,
}

/// Readiness of the dashboard's weather data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet.
    Idle,
    /// A refresh is in flight.
    Loading,
    /// Data is available.
    Ready,
    /// The last refresh failed.
    Failed(String),
}

/// Data readiness plus freshness info, surfaced in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataStatus {
    /// Current readiness.
    pub state: LoadState,
    /// When data last became ready.
    pub last_updated: Option<DateTime<Local>>,
    /// Whether the app believes it is offline.
    pub offline: bool,
}

impl DataStatus {
    /// Fresh status: nothing loaded, assumed online.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LoadState::Idle,
            last_updated: None,
            offline: false,
        }
    }

    /// Marks a refresh as started.
    pub fn begin_refresh(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Marks data as ready at the given instant.
    pub fn mark_ready(&mut self, now: DateTime<Local>) {
        self.state = LoadState::Ready;
        self.last_updated = Some(now);
        self.offline = false;
    }

    /// Marks the refresh as failed and flips the offline flag.
    pub fn mark_failed(&mut self, message: impl Into<String>) {
        self.state = LoadState::Failed(message.into());
        self.offline = true;
    }
}

impl Default for DataStatus {
    fn default() -> Self {
        Self::new()
    }
}
