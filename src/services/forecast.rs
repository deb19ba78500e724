//! The built-in weather dataset.
//!
//! The dashboard is a front-end shell: it ships with a representative
//! late-May dataset instead of talking to a weather service. The monthly
//! calendar synthesizes per-day values from a deterministic hash, so a
//! given month always renders the same.

use chrono::{Datelike, NaiveDate};

use crate::models::{
    AirQuality, ClockTime, ConditionKind, CurrentConditions, DayDetails, DayForecast,
    DayHourSample, HourlyEntry, MonthDay,
};

/// Year the dataset is frozen at. The calendar opens here so every tab
/// shows the same week.
pub const DATASET_YEAR: i32 = 2025;
/// Month the dataset is frozen at (May).
pub const DATASET_MONTH: u32 = 5;

/// Current conditions for the today card.
#[must_use]
pub fn current_conditions() -> CurrentConditions {
    CurrentConditions {
        date_label: "Monday, 26 May",
        temp_c: 14,
        feels_like_c: 13,
        day_c: 16,
        night_c: 7,
        humidity_pct: 95,
        wind: "NW 7 mph",
        uv_label: "Low (2)",
        pressure_mb: 1013.3,
        visibility: "Unlimited",
        sunrise: ClockTime::new(4, 11),
        sunset: ClockTime::new(19, 4),
    }
}

/// Air quality reading for the sidebar.
#[must_use]
pub const fn air_quality() -> AirQuality {
    AirQuality {
        index: 31,
        label: "Good",
    }
}

/// The hourly strip: the next hours of the current evening.
#[must_use]
pub fn hourly() -> Vec<HourlyEntry> {
    let entry = |time: Option<ClockTime>,
                 temp_c: i16,
                 condition: &'static str,
                 kind: ConditionKind,
                 precip_pct: u8,
                 wind_kmh: u8,
                 humidity_pct: u8| HourlyEntry {
        time,
        temp_c,
        condition,
        kind,
        precip_pct,
        wind_kmh,
        humidity_pct,
    };
    vec![
        entry(None, 14, "Partly Cloudy", ConditionKind::PartlyCloudy, 24, 7, 95),
        entry(Some(ClockTime::new(18, 0)), 14, "Partly Cloudy", ConditionKind::PartlyCloudy, 24, 8, 92),
        entry(Some(ClockTime::new(19, 0)), 14, "Scattered Thunderstorms", ConditionKind::Stormy, 48, 12, 88),
        entry(Some(ClockTime::new(20, 0)), 13, "Showers", ConditionKind::Rainy, 56, 10, 90),
        entry(Some(ClockTime::new(21, 0)), 12, "Partly Cloudy", ConditionKind::PartlyCloudy, 14, 6, 85),
        entry(Some(ClockTime::new(22, 0)), 11, "Clear", ConditionKind::ClearNight, 8, 5, 82),
        entry(Some(ClockTime::new(23, 0)), 10, "Clear", ConditionKind::ClearNight, 5, 4, 80),
        entry(Some(ClockTime::new(0, 0)), 9, "Clear", ConditionKind::ClearNight, 3, 3, 78),
    ]
}

/// The 5-day outlook with expandable detail.
#[must_use]
pub fn five_day() -> Vec<DayForecast> {
    let sample = |hour: u8, temp_c: i16, precip_pct: u8| DayHourSample {
        time: ClockTime::new(hour, 0),
        temp_c,
        precip_pct,
    };
    vec![
        DayForecast {
            day: "Monday 26",
            high_c: 16,
            low_c: 8,
            condition: "Mostly Cloudy",
            kind: ConditionKind::Cloudy,
            precip_pct: 72,
            wind: "NNW 7 mph",
            hourly: vec![
                sample(6, 8, 10),
                sample(9, 11, 20),
                sample(12, 14, 30),
                sample(15, 16, 40),
                sample(18, 14, 50),
                sample(21, 10, 60),
            ],
            details: DayDetails {
                humidity_pct: 95,
                uv_index: 3,
                sunrise: ClockTime::new(4, 11),
                sunset: ClockTime::new(19, 4),
                visibility_km: 10,
                pressure_mb: 1013,
            },
        },
        DayForecast {
            day: "Tue 27",
            high_c: 16,
            low_c: 7,
            condition: "PM Thunderstorms",
            kind: ConditionKind::Stormy,
            precip_pct: 68,
            wind: "NE 15 kmph",
            hourly: vec![
                sample(6, 7, 15),
                sample(9, 10, 25),
                sample(12, 13, 35),
                sample(15, 16, 68),
                sample(18, 13, 70),
                sample(21, 9, 50),
            ],
            details: DayDetails {
                humidity_pct: 88,
                uv_index: 4,
                sunrise: ClockTime::new(4, 12),
                sunset: ClockTime::new(19, 5),
                visibility_km: 8,
                pressure_mb: 1010,
            },
        },
        DayForecast {
            day: "Wed 28",
            high_c: 23,
            low_c: 9,
            condition: "Mostly Sunny",
            kind: ConditionKind::Sunny,
            precip_pct: 17,
            wind: "N 16 kmph",
            hourly: vec![
                sample(6, 9, 5),
                sample(9, 14, 8),
                sample(12, 19, 10),
                sample(15, 23, 12),
                sample(18, 20, 15),
                sample(21, 14, 17),
            ],
            details: DayDetails {
                humidity_pct: 65,
                uv_index: 7,
                sunrise: ClockTime::new(4, 13),
                sunset: ClockTime::new(19, 6),
                visibility_km: 15,
                pressure_mb: 1015,
            },
        },
        DayForecast {
            day: "Thu 29",
            high_c: 19,
            low_c: 10,
            condition: "Mostly Cloudy",
            kind: ConditionKind::Cloudy,
            precip_pct: 24,
            wind: "NE 12 kmph",
            hourly: vec![
                sample(6, 10, 12),
                sample(9, 13, 18),
                sample(12, 16, 22),
                sample(15, 19, 24),
                sample(18, 17, 20),
                sample(21, 13, 15),
            ],
            details: DayDetails {
                humidity_pct: 75,
                uv_index: 5,
                sunrise: ClockTime::new(4, 14),
                sunset: ClockTime::new(19, 7),
                visibility_km: 12,
                pressure_mb: 1012,
            },
        },
        DayForecast {
            day: "Fri 30",
            high_c: 20,
            low_c: 11,
            condition: "PM Thunderstorms",
            kind: ConditionKind::Stormy,
            precip_pct: 24,
            wind: "NE 7 kmph",
            hourly: vec![
                sample(6, 11, 10),
                sample(9, 14, 15),
                sample(12, 17, 20),
                sample(15, 20, 45),
                sample(18, 18, 60),
                sample(21, 14, 40),
            ],
            details: DayDetails {
                humidity_pct: 82,
                uv_index: 6,
                sunrise: ClockTime::new(4, 15),
                sunset: ClockTime::new(19, 8),
                visibility_km: 9,
                pressure_mb: 1008,
            },
        },
    ]
}

/// Month names for the calendar header.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar grid for a month: leading `None` cells pad the first week so
/// day 1 lands under its weekday (Sunday-started), followed by one cell
/// per day. An out-of-range month yields an empty grid.
#[must_use]
pub fn month_grid(year: i32, month: u32) -> Vec<Option<MonthDay>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days_in_month = days_in_month(year, month);

    let mut grid: Vec<Option<MonthDay>> = vec![None; leading];
    for day in 1..=days_in_month {
        grid.push(Some(synthesize_day(year, month, day)));
    }
    grid
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map_or(0, |d| d.day())
}

/// Deterministic per-day synthetic weather. The same (year, month, day)
/// always produces the same cell.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn synthesize_day(year: i32, month: u32, day: u32) -> MonthDay {
    let mut h = (year as u32)
        .wrapping_mul(374_761_393)
        .wrapping_add(month.wrapping_mul(668_265_263))
        .wrapping_add(day.wrapping_mul(2_246_822_519));
    h ^= h >> 13;
    h = h.wrapping_mul(1_274_126_177);
    h ^= h >> 16;

    let icons = [
        ConditionKind::Sunny,
        ConditionKind::Cloudy,
        ConditionKind::Rainy,
        ConditionKind::Stormy,
    ];
    MonthDay {
        day: day as u8,
        temp_c: 15 + (h % 13) as i16,
        high_c: 20 + ((h >> 4) % 10) as i16,
        low_c: 5 + ((h >> 8) % 10) as i16,
        kind: icons[((h >> 12) % 4) as usize],
        precip_pct: ((h >> 16) % 80) as u8,
    }
}
