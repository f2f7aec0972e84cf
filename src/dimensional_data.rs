use serde::Serialize;

use crate::units::{Measurement, Units};
use std::fmt;
use std::option::Option;
use std::str::FromStr;

/// A single measured quantity. `value` is `None` once the field has been
/// masked as missing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DimensionalData<T> {
    pub value: Option<T>,
    pub variable_name: &'static str,
    pub measurement: Measurement,
    pub unit: Units,
}

impl<T> DimensionalData<T> {
    pub fn unit_label(&self, abbrev: bool) -> &'static str {
        self.unit.label(&self.measurement, abbrev)
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

impl<T> DimensionalData<T>
where
    T: FromStr,
{
    /// Parses the raw token, failing with the variable name when the token is
    /// not a valid value.
    pub fn try_from_raw_data(
        raw_data: &str,
        variable_name: &'static str,
        measurement: Measurement,
        unit: Units,
    ) -> Result<DimensionalData<T>, String> {
        let value = raw_data
            .parse()
            .map_err(|_| format!("invalid {variable_name}: {raw_data:?}"))?;
        Ok(DimensionalData {
            value: Some(value),
            variable_name,
            measurement,
            unit,
        })
    }
}

impl DimensionalData<f64> {
    /// Clears the value when it equals one of the given sentinels or is not
    /// finite (`NaN`, `inf`).
    pub fn mask(&mut self, sentinels: &[f64]) {
        if let Some(val) = self.value {
            if !val.is_finite() || sentinels.iter().any(|s| *s == val) {
                self.value = None;
            }
        }
    }
}

impl<T> fmt::Display for DimensionalData<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.value {
            Some(ref val) => write!(f, "{} {}", val, self.unit_label(true)),
            None => write!(f, "N/A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_sentinel() {
        let mut height = DimensionalData::<f64>::try_from_raw_data(
            "99.99",
            "significant wave height",
            Measurement::Length,
            Units::Metric,
        )
        .unwrap();
        assert_eq!(height.to_string(), "99.99 m");

        height.mask(&[66.66, 99.99]);
        assert!(height.is_missing());
        assert_eq!(height.to_string(), "N/A");
    }

    #[test]
    fn test_mask_non_finite() {
        for raw in ["NaN", "nan", "inf", "-inf"] {
            let mut direction = DimensionalData::<f64>::try_from_raw_data(
                raw,
                "wave direction",
                Measurement::Direction,
                Units::Metric,
            )
            .unwrap();
            assert!(!direction.is_missing());

            direction.mask(&[]);
            assert!(direction.is_missing(), "{raw} should be masked");
        }
    }

    #[test]
    fn test_invalid_raw_data() {
        let parsed = DimensionalData::<f64>::try_from_raw_data(
            "1.2.3",
            "average wave period",
            Measurement::Time,
            Units::Metric,
        );
        assert!(parsed.is_err());
    }
}
