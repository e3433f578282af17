//! Body Mass Index calculation and classification

use crate::error::{require, CalcError};
use crate::types::BmiCategory;

/// Compute BMI from canonical metric measurements.
///
/// Formula: weight(kg) / height(m)². Both arguments must be finite and
/// strictly positive.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64, CalcError> {
    require(
        weight_kg.is_finite() && weight_kg > 0.0,
        "Weight must be a positive number.",
    )?;
    require(
        height_cm.is_finite() && height_cm > 0.0,
        "Height must be a positive number.",
    )?;
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Classify a BMI value into its category.
///
/// Half-open intervals with boundaries at 18.5, 25 and 30; each boundary
/// value belongs to the higher category.
pub fn bmi_category(bmi: f64) -> Result<BmiCategory, CalcError> {
    require(bmi.is_finite() && bmi > 0.0, "BMI must be a positive number.")?;
    let category = if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };
    Ok(category)
}
