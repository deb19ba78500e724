//! Core data models for locations, moods, and weather data.
//!
//! These types define the domain vocabulary: where the user tracks weather,
//! how the dashboard should feel at each place, and the shapes of the
//! forecast datasets.

pub mod context;
pub mod location;
pub mod mood;
pub mod rgb;
pub mod weather;

pub use context::LocationContext;
pub use location::{ContextRole, Location, HOME_LABEL};
pub use mood::{clamp_unit, ContrastPreference, MoodPreset, Purpose, VisualIntensity};
pub use rgb::RgbColor;
pub use weather::{
    AirQuality, ClockTime, ConditionKind, CurrentConditions, DataStatus, DayDetails, DayForecast,
    DayHourSample, HourlyEntry, LoadState, MonthDay,
};
