//! Unit-of-measure handling for gridpoint values.
//!
//! Gridpoint channels carry a `uom` string such as `wmoUnit:degC` or `wmoUnit:km_h-1`.
//! [`Unit::from_uom`] reads those, and [`Unit::to_imperial`] is the single place where
//! values are converted for display.

use serde::{Deserialize, Serialize};
use std::fmt;

const MPS_TO_MPH: f64 = 2.237;
const KPH_TO_MPH: f64 = 0.621371;

/// A unit of measure reported by the API, or produced by conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Celsius,
    Fahrenheit,
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
    Percent,
    DegreesAngle,
    Millimeters,
    Meters,
    Feet,
    /// Thousands of cubic feet per second, the AHPS flow unit.
    Kcfs,
    /// Anything this crate does not convert, kept verbatim.
    Other(String),
}

impl Unit {
    /// Parses a unit-of-measure string. Any `prefix:` (`wmoUnit:`, `unit:`) is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use nws::Unit;
    ///
    /// assert_eq!(Unit::from_uom("wmoUnit:degC"), Unit::Celsius);
    /// assert_eq!(Unit::from_uom("unit:m_s-1"), Unit::MetersPerSecond);
    /// ```
    pub fn from_uom(uom: &str) -> Self {
        let code = uom.rsplit_once(':').map_or(uom, |(_prefix, code)| code);
        match code {
            "degC" => Unit::Celsius,
            "degF" => Unit::Fahrenheit,
            "m_s-1" => Unit::MetersPerSecond,
            "km_h-1" => Unit::KilometersPerHour,
            "mi_h-1" | "mph" => Unit::MilesPerHour,
            "percent" => Unit::Percent,
            "degree_(angle)" => Unit::DegreesAngle,
            "mm" => Unit::Millimeters,
            "m" => Unit::Meters,
            "ft" => Unit::Feet,
            "kcfs" => Unit::Kcfs,
            other => Unit::Other(other.to_string()),
        }
    }

    /// Converts `value` from this unit into the imperial unit the crate reports.
    ///
    /// Temperatures become Fahrenheit and speeds become miles per hour. Every other
    /// unit is returned unchanged.
    pub fn to_imperial(&self, value: f64) -> (f64, Unit) {
        match self {
            Unit::Celsius => (celsius_to_fahrenheit_value(value), Unit::Fahrenheit),
            Unit::MetersPerSecond => (meters_per_second_to_mph(value), Unit::MilesPerHour),
            Unit::KilometersPerHour => (kilometers_per_hour_to_mph(value), Unit::MilesPerHour),
            unit => (value, unit.clone()),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::MetersPerSecond => "m/s",
            Unit::KilometersPerHour => "km/h",
            Unit::MilesPerHour => "mph",
            Unit::Percent => "%",
            Unit::DegreesAngle => "°",
            Unit::Millimeters => "mm",
            Unit::Meters => "m",
            Unit::Feet => "ft",
            Unit::Kcfs => "kcfs",
            Unit::Other(code) => code,
        };
        f.write_str(symbol)
    }
}

/// `(9/5) * t + 32`. A missing temperature stays missing.
pub fn celsius_to_fahrenheit(celsius: Option<f64>) -> Option<f64> {
    celsius.map(celsius_to_fahrenheit_value)
}

fn celsius_to_fahrenheit_value(celsius: f64) -> f64 {
    9.0 / 5.0 * celsius + 32.0
}

pub fn meters_per_second_to_mph(speed: f64) -> f64 {
    speed * MPS_TO_MPH
}

pub fn kilometers_per_hour_to_mph(speed: f64) -> f64 {
    speed * KPH_TO_MPH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(Some(0.0)), Some(32.0));
        assert_eq!(celsius_to_fahrenheit(Some(100.0)), Some(212.0));
        assert_eq!(celsius_to_fahrenheit(Some(-40.0)), Some(-40.0));
        assert_eq!(celsius_to_fahrenheit(None), None);
    }

    #[test]
    fn test_speed_conversions() {
        assert_close(meters_per_second_to_mph(1.0), 2.237);
        assert_close(meters_per_second_to_mph(0.0), 0.0);
        assert_close(kilometers_per_hour_to_mph(100.0), 62.1371);
    }

    #[test]
    fn test_from_uom() {
        assert_eq!(Unit::from_uom("wmoUnit:degC"), Unit::Celsius);
        assert_eq!(Unit::from_uom("wmoUnit:km_h-1"), Unit::KilometersPerHour);
        assert_eq!(Unit::from_uom("wmoUnit:percent"), Unit::Percent);
        assert_eq!(Unit::from_uom("wmoUnit:degree_(angle)"), Unit::DegreesAngle);
        assert_eq!(Unit::from_uom("unit:m_s-1"), Unit::MetersPerSecond);
        assert_eq!(Unit::from_uom("degF"), Unit::Fahrenheit);
        assert_eq!(
            Unit::from_uom("wmoUnit:Pa"),
            Unit::Other("Pa".to_string())
        );
    }

    #[test]
    fn test_to_imperial() {
        let (value, unit) = Unit::Celsius.to_imperial(8.0);
        assert_close(value, 46.4);
        assert_eq!(unit, Unit::Fahrenheit);

        let (value, unit) = Unit::MetersPerSecond.to_imperial(10.0);
        assert_close(value, 22.37);
        assert_eq!(unit, Unit::MilesPerHour);

        let (value, unit) = Unit::Percent.to_imperial(55.0);
        assert_eq!(value, 55.0);
        assert_eq!(unit, Unit::Percent);
    }

    #[test]
    fn test_display() {
        assert_eq!(Unit::Fahrenheit.to_string(), "°F");
        assert_eq!(Unit::Other("Pa".into()).to_string(), "Pa");
    }
}
