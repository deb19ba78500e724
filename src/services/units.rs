//! Display-time unit conversions.
//!
//! All stored temperatures are °C and all stored times are 24-hour; these
//! helpers convert at the last moment, per the user's settings.

use crate::config::{TemperatureUnit, TimeFormat};
use crate::models::ClockTime;

/// Converts a Celsius temperature to the display unit, rounded to the
/// nearest degree.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn convert_temp(temp_c: i16, unit: TemperatureUnit) -> i16 {
    match unit {
        TemperatureUnit::Celsius => temp_c,
        TemperatureUnit::Fahrenheit => (f64::from(temp_c) * 9.0 / 5.0 + 32.0).round() as i16,
    }
}

/// Formats a temperature with the degree sign, e.g. "14°".
#[must_use]
pub fn format_temp(temp_c: i16, unit: TemperatureUnit) -> String {
    format!("{}°", convert_temp(temp_c, unit))
}

/// Formats a clock time per the time-format setting.
///
/// The 12-hour form drops ":00" on whole hours ("6 pm", "4:11 am"), the
/// 24-hour form is always "HH:MM".
#[must_use]
pub fn format_clock(time: ClockTime, format: TimeFormat) -> String {
    match format {
        TimeFormat::TwentyFourHour => format!("{:02}:{:02}", time.hour, time.minute),
        TimeFormat::TwelveHour => {
            let (hour, suffix) = match time.hour {
                0 => (12, "am"),
                h @ 1..=11 => (h, "am"),
                12 => (12, "pm"),
                h => (h - 12, "pm"),
            };
            if time.minute == 0 {
                format!("{hour} {suffix}")
            } else {
                format!("{hour}:{:02} {suffix}", time.minute)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_temp_rounds_to_nearest() {
        assert_eq!(convert_temp(14, TemperatureUnit::Fahrenheit), 57); // 57.2
        assert_eq!(convert_temp(16, TemperatureUnit::Fahrenheit), 61); // 60.8
        assert_eq!(convert_temp(7, TemperatureUnit::Fahrenheit), 45); // 44.6
        assert_eq!(convert_temp(0, TemperatureUnit::Fahrenheit), 32);
        assert_eq!(convert_temp(-40, TemperatureUnit::Fahrenheit), -40);
    }

    #[test]
    fn test_convert_temp_celsius_is_identity() {
        assert_eq!(convert_temp(14, TemperatureUnit::Celsius), 14);
        assert_eq!(convert_temp(-7, TemperatureUnit::Celsius), -7);
    }

    #[test]
    fn test_format_temp() {
        assert_eq!(format_temp(14, TemperatureUnit::Celsius), "14°");
        assert_eq!(format_temp(14, TemperatureUnit::Fahrenheit), "57°");
    }

    #[test]
    fn test_format_clock_twelve_hour() {
        let f = TimeFormat::TwelveHour;
        assert_eq!(format_clock(ClockTime::new(18, 0), f), "6 pm");
        assert_eq!(format_clock(ClockTime::new(0, 0), f), "12 am");
        assert_eq!(format_clock(ClockTime::new(12, 0), f), "12 pm");
        assert_eq!(format_clock(ClockTime::new(4, 11), f), "4:11 am");
        assert_eq!(format_clock(ClockTime::new(19, 4), f), "7:04 pm");
        assert_eq!(format_clock(ClockTime::new(12, 30), f), "12:30 pm");
    }

    #[test]
    fn test_format_clock_twenty_four_hour() {
        let f = TimeFormat::TwentyFourHour;
        assert_eq!(format_clock(ClockTime::new(18, 0), f), "18:00");
        assert_eq!(format_clock(ClockTime::new(0, 0), f), "00:00");
        assert_eq!(format_clock(ClockTime::new(4, 11), f), "04:11");
    }
}
