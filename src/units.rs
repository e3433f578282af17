//! Imperial-to-metric unit conversion
//!
//! All downstream calculation works in SI units (kg, cm); imperial inputs are
//! converted here, at the boundary, and nowhere else.

use crate::error::{require, CalcError};

/// Pounds per kilogram, exact by international yard and pound agreement
const KG_PER_LB: f64 = 0.45359237;

/// Centimeters per inch, exact
const CM_PER_INCH: f64 = 2.54;

/// Convert a weight in pounds to kilograms.
///
/// Fails unless `lb` is finite and strictly positive.
pub fn pounds_to_kg(lb: f64) -> Result<f64, CalcError> {
    require(lb.is_finite() && lb > 0.0, "Weight must be a positive number.")?;
    Ok(lb * KG_PER_LB)
}

/// Convert a height in inches to centimeters.
///
/// Fails unless `inches` is finite and strictly positive.
pub fn inches_to_cm(inches: f64) -> Result<f64, CalcError> {
    require(
        inches.is_finite() && inches > 0.0,
        "Height must be a positive number.",
    )?;
    Ok(inches * CM_PER_INCH)
}

/// Convert a feet-and-inches height to centimeters.
///
/// The components are unsigned so negatives are unrepresentable; the combined
/// total must still be greater than zero.
pub fn feet_inches_to_cm(ft: u32, inches: u32) -> Result<f64, CalcError> {
    let total_inches = u64::from(ft) * 12 + u64::from(inches);
    require(total_inches > 0, "Height must be greater than 0.")?;
    inches_to_cm(total_inches as f64)
}
