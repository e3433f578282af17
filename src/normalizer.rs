//! Input normalization
//!
//! Resolves either field group of [`Inputs`] into the canonical
//! `(weight_kg, height_cm)` pair the calculators run on, validating that the
//! fields required by the selected unit system are present.

use crate::error::{require, CalcError};
use crate::types::{Inputs, Units};
use crate::units;

/// Normalize raw inputs into a canonical `(weight_kg, height_cm)` pair.
///
/// Age is validated here regardless of unit system so every entry path into
/// the pipeline enforces it.
pub fn normalize(inputs: &Inputs) -> Result<(f64, f64), CalcError> {
    require(inputs.age_years > 0, "Age must be a positive integer.")?;

    match inputs.units {
        Units::Metric => {
            let weight_kg = inputs
                .weight_kg
                .ok_or_else(|| CalcError::invalid("Metric units require weight_kg."))?;
            let height_cm = inputs
                .height_cm
                .ok_or_else(|| CalcError::invalid("Metric units require height_cm."))?;
            Ok((weight_kg, height_cm))
        }
        Units::Imperial => {
            let weight_lb = inputs
                .weight_lb
                .ok_or_else(|| CalcError::invalid("Imperial units require weight_lb."))?;
            let (height_ft, height_in) = match (inputs.height_ft, inputs.height_in) {
                (Some(ft), Some(inches)) => (ft, inches),
                _ => {
                    return Err(CalcError::invalid(
                        "Imperial units require height_ft and height_in.",
                    ))
                }
            };
            let weight_kg = units::pounds_to_kg(weight_lb)?;
            let height_cm = units::feet_inches_to_cm(height_ft, height_in)?;
            Ok((weight_kg, height_cm))
        }
    }
}
