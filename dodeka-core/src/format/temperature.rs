//! Temperature line formatting
//!
//! Readings arrive in Kelvin; each scale is a linear transform of Celsius
//! rendered as a signed dozenal numeral plus unit suffix. The two "Q"
//! scales stretch Celsius so that dozenal display lands on round values.

use core::fmt::Write;

use heapless::String;
use serde::{Deserialize, Serialize};

use super::Formatter;
use crate::dozenal::to_dozenal;

/// Maximum rendered temperature length in bytes (the degree sign is two
/// bytes of UTF-8; headroom for pathological readings)
pub const TEMPERATURE_LEN: usize = 16;

/// Temperature display scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureScale {
    /// Degrees Fahrenheit
    #[default]
    Fahrenheit,
    /// Degrees Celsius
    Celsius,
    /// Dozenal-stretched Celsius
    QCelsius,
    /// Dozenal-stretched Fahrenheit
    QFahrenheit,
}

impl TemperatureScale {
    /// Variant for a persisted or transmitted selector index
    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(TemperatureScale::Fahrenheit),
            1 => Some(TemperatureScale::Celsius),
            2 => Some(TemperatureScale::QCelsius),
            3 => Some(TemperatureScale::QFahrenheit),
            _ => None,
        }
    }

    /// Selector index for persistence and transmission
    pub const fn index(self) -> i32 {
        self as i32
    }

    /// Unit suffix, including the leading space
    pub const fn suffix(self) -> &'static str {
        match self {
            TemperatureScale::Fahrenheit => " °F",
            TemperatureScale::Celsius => " °C",
            TemperatureScale::QCelsius => " Q°C",
            TemperatureScale::QFahrenheit => " Q°F",
        }
    }

    /// Linear transform from Celsius into this scale's display units
    fn from_celsius(self, celsius: f32) -> f32 {
        match self {
            TemperatureScale::Fahrenheit => celsius * 1.8 + 32.0,
            TemperatureScale::Celsius => celsius,
            TemperatureScale::QCelsius => celsius * 2.541,
            TemperatureScale::QFahrenheit => celsius * 2.541 + 48.0,
        }
    }
}

/// Round half away from zero, with no float intrinsics
fn round_half_away(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}

impl Formatter {
    /// Render the temperature line from a Kelvin reading
    pub fn temperature(&self, kelvin: f32, scale: TemperatureScale) -> String<TEMPERATURE_LEN> {
        let celsius = kelvin - 273.15;
        let value = round_half_away(scale.from_celsius(celsius));

        let mut out: String<TEMPERATURE_LEN> = String::new();
        let _ = write!(out, "{}{}", to_dozenal(value), scale.suffix());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freezing_point_celsius() {
        let formatter = Formatter::new();
        let text = formatter.temperature(273.15, TemperatureScale::Celsius);
        assert_eq!(text.as_str(), "0 °C");
    }

    #[test]
    fn test_boiling_point_fahrenheit() {
        let formatter = Formatter::new();
        // 100 C -> 212 F -> dozenal "158"
        let text = formatter.temperature(373.15, TemperatureScale::Fahrenheit);
        assert_eq!(text.as_str(), "158 °F");
    }

    #[test]
    fn test_q_scales() {
        let formatter = Formatter::new();
        // 10 C -> 25.41 -> 25 -> dozenal "21"
        let text = formatter.temperature(283.15, TemperatureScale::QCelsius);
        assert_eq!(text.as_str(), "21 Q°C");
        // 0 C -> 48 -> dozenal "40"
        let text = formatter.temperature(273.15, TemperatureScale::QFahrenheit);
        assert_eq!(text.as_str(), "40 Q°F");
    }

    #[test]
    fn test_negative_reading() {
        let formatter = Formatter::new();
        // -40 C == -40 F, dozenal "-34"
        let text = formatter.temperature(233.15, TemperatureScale::Celsius);
        assert_eq!(text.as_str(), "-34 °C");
        let text = formatter.temperature(233.15, TemperatureScale::Fahrenheit);
        assert_eq!(text.as_str(), "-34 °F");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(round_half_away(2.5), 3);
        assert_eq!(round_half_away(2.4), 2);
        assert_eq!(round_half_away(-2.5), -3);
        assert_eq!(round_half_away(-2.4), -2);
        assert_eq!(round_half_away(0.0), 0);
    }

    #[test]
    fn test_idempotent() {
        let formatter = Formatter::new();
        let first = formatter.temperature(291.0, TemperatureScale::Fahrenheit);
        let second = formatter.temperature(291.0, TemperatureScale::Fahrenheit);
        assert_eq!(first, second);
    }

    #[test]
    fn test_selector_round_trip() {
        for index in 0..4 {
            let scale = TemperatureScale::from_index(index).unwrap();
            assert_eq!(scale.index(), index);
        }
        assert_eq!(TemperatureScale::from_index(4), None);
        assert_eq!(TemperatureScale::from_index(-1), None);
    }
}
