//! Unit conversion for length, weight, and temperature

use serde::{Deserialize, Serialize};

use super::ToolError;

/// Conversion category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
}

/// Length units and their factor to meters
pub const LENGTH_UNITS: &[(&str, f64)] = &[
    ("meters", 1.0),
    ("kilometers", 1000.0),
    ("centimeters", 0.01),
    ("millimeters", 0.001),
    ("inches", 0.0254),
    ("feet", 0.3048),
    ("yards", 0.9144),
    ("miles", 1609.34),
];

/// Weight units and their factor to kilograms
pub const WEIGHT_UNITS: &[(&str, f64)] = &[
    ("kilograms", 1.0),
    ("grams", 0.001),
    ("milligrams", 0.000001),
    ("pounds", 0.453592),
    ("ounces", 0.0283495),
];

/// Temperature units, converted through a Celsius pivot
pub const TEMPERATURE_UNITS: &[&str] = &["celsius", "fahrenheit", "kelvin"];

/// Convert `value` between two units of the same category
pub fn convert(
    category: UnitCategory,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ToolError> {
    if !value.is_finite() {
        return Err(ToolError::InvalidInput(
            "Value must be a finite number".to_string(),
        ));
    }

    match category {
        UnitCategory::Length => convert_by_factor(LENGTH_UNITS, value, from, to),
        UnitCategory::Weight => convert_by_factor(WEIGHT_UNITS, value, from, to),
        UnitCategory::Temperature => convert_temperature(value, from, to),
    }
}

fn factor(table: &[(&str, f64)], unit: &str) -> Result<f64, ToolError> {
    table
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, f)| *f)
        .ok_or_else(|| ToolError::UnknownUnit(unit.to_string()))
}

fn convert_by_factor(
    table: &[(&str, f64)],
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ToolError> {
    let base = value * factor(table, from)?;
    Ok(base / factor(table, to)?)
}

fn convert_temperature(value: f64, from: &str, to: &str) -> Result<f64, ToolError> {
    let celsius = match from {
        "celsius" => value,
        "fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "kelvin" => value - 273.15,
        other => return Err(ToolError::UnknownUnit(other.to_string())),
    };
    match to {
        "celsius" => Ok(celsius),
        "fahrenheit" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "kelvin" => Ok(celsius + 273.15),
        other => Err(ToolError::UnknownUnit(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_length_meters_to_kilometers() {
        assert_close(convert(UnitCategory::Length, 1500.0, "meters", "kilometers").unwrap(), 1.5);
    }

    #[test]
    fn test_length_miles_to_feet() {
        let feet = convert(UnitCategory::Length, 1.0, "miles", "feet").unwrap();
        assert_close(feet, 1609.34 / 0.3048);
    }

    #[test]
    fn test_weight_pounds_to_grams() {
        assert_close(
            convert(UnitCategory::Weight, 2.0, "pounds", "grams").unwrap(),
            907.184,
        );
    }

    #[test]
    fn test_temperature_celsius_to_fahrenheit() {
        assert_close(
            convert(UnitCategory::Temperature, 100.0, "celsius", "fahrenheit").unwrap(),
            212.0,
        );
    }

    #[test]
    fn test_temperature_fahrenheit_to_kelvin() {
        assert_close(
            convert(UnitCategory::Temperature, 32.0, "fahrenheit", "kelvin").unwrap(),
            273.15,
        );
    }

    #[test]
    fn test_identity_conversion() {
        assert_close(convert(UnitCategory::Length, 42.0, "yards", "yards").unwrap(), 42.0);
        assert_close(
            convert(UnitCategory::Temperature, -40.0, "celsius", "celsius").unwrap(),
            -40.0,
        );
    }

    #[test]
    fn test_fahrenheit_celsius_fixed_point() {
        assert_close(
            convert(UnitCategory::Temperature, -40.0, "fahrenheit", "celsius").unwrap(),
            -40.0,
        );
    }

    #[test]
    fn test_unknown_unit_is_an_error() {
        assert!(matches!(
            convert(UnitCategory::Length, 1.0, "cubits", "meters"),
            Err(ToolError::UnknownUnit(_))
        ));
        assert!(convert(UnitCategory::Weight, 1.0, "kilograms", "stone").is_err());
        assert!(convert(UnitCategory::Temperature, 1.0, "celsius", "rankine").is_err());
    }
}
