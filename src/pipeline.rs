//! Pipeline orchestration
//!
//! This module provides the public API for MetriCal. It sequences the full
//! calculation from raw inputs to a complete results value:
//! normalization → BMI → classification → BMR → TDEE.

use crate::bmi;
use crate::energy;
use crate::error::CalcError;
use crate::normalizer;
use crate::types::{ActivityLevel, Inputs, Results};

/// Compute BMI, category, BMR and TDEE in one call.
///
/// Stages run in a fixed order and short-circuit on the first failure; a
/// partial result is never returned. This is the sole entry point external
/// callers need.
///
/// # Example
/// ```
/// use metrical::{calculate_all, ActivityLevel, Inputs, Sex, Units};
///
/// let inputs = Inputs {
///     units: Units::Metric,
///     sex: Sex::Male,
///     age_years: 30,
///     weight_kg: Some(82.0),
///     height_cm: Some(178.0),
///     weight_lb: None,
///     height_ft: None,
///     height_in: None,
/// };
/// let results = calculate_all(&inputs, ActivityLevel::Moderate)?;
/// assert!(results.tdee > results.bmr);
/// # Ok::<(), metrical::CalcError>(())
/// ```
pub fn calculate_all(inputs: &Inputs, activity: ActivityLevel) -> Result<Results, CalcError> {
    let (weight_kg, height_cm) = normalizer::normalize(inputs)?;

    let bmi_value = bmi::bmi(weight_kg, height_cm)?;
    let category = bmi::bmi_category(bmi_value)?;

    let bmr = energy::bmr_mifflin_st_jeor(weight_kg, height_cm, inputs.age_years, inputs.sex)?;
    let (tdee, activity_multiplier) = energy::tdee_from_bmr(bmr, activity)?;

    Ok(Results {
        bmi: bmi_value,
        bmi_category: category,
        bmr,
        tdee,
        activity_multiplier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BmiCategory, Sex, Units};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn metric_inputs(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> Inputs {
        Inputs {
            units: Units::Metric,
            sex,
            age_years,
            weight_kg: Some(weight_kg),
            height_cm: Some(height_cm),
            weight_lb: None,
            height_ft: None,
            height_in: None,
        }
    }

    #[test]
    fn metric_bmi_known_value() {
        let inputs = metric_inputs(82.0, 178.0, 30, Sex::Male);
        let r = calculate_all(&inputs, ActivityLevel::Sedentary).unwrap();
        assert_eq!((r.bmi * 100.0).round() / 100.0, 25.88);
        assert_eq!(r.bmi_category, BmiCategory::Overweight);
    }

    #[test]
    fn metric_tdee_greater_than_bmr() {
        let inputs = metric_inputs(82.0, 178.0, 30, Sex::Male);
        let r = calculate_all(&inputs, ActivityLevel::Moderate).unwrap();
        assert!(r.tdee > r.bmr);
    }

    #[test]
    fn imperial_reasonable_bmi_range() {
        let inputs = Inputs {
            units: Units::Imperial,
            sex: Sex::Male,
            age_years: 30,
            weight_kg: None,
            height_cm: None,
            weight_lb: Some(180.0),
            height_ft: Some(5),
            height_in: Some(10),
        };
        let r = calculate_all(&inputs, ActivityLevel::Sedentary).unwrap();
        assert!(r.bmi > 25.0 && r.bmi < 26.5, "bmi = {}", r.bmi);
    }

    #[test]
    fn zero_age_fails_before_any_result() {
        let inputs = metric_inputs(82.0, 178.0, 0, Sex::Male);
        let err = calculate_all(&inputs, ActivityLevel::Sedentary).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: Age must be a positive integer."
        );
    }

    #[test]
    fn missing_metric_height_fails() {
        let mut inputs = metric_inputs(82.0, 178.0, 30, Sex::Male);
        inputs.height_cm = None;
        assert!(calculate_all(&inputs, ActivityLevel::Sedentary).is_err());
    }

    proptest! {
        /// Result invariants hold across the valid metric domain, for every
        /// activity level: tdee == bmr * multiplier, tdee > bmr, and the
        /// category matches an independent classification of the BMI.
        #[test]
        fn prop_results_invariants(
            weight in 30.0f64..250.0,
            height in 120.0f64..220.0,
            age in 1u32..110,
        ) {
            let inputs = metric_inputs(weight, height, age, Sex::Female);
            for level in ActivityLevel::all() {
                let r = calculate_all(&inputs, level).unwrap();
                prop_assert!((r.tdee - r.bmr * r.activity_multiplier).abs() < 1e-9);
                prop_assert!(r.tdee > r.bmr);
                prop_assert_eq!(
                    r.bmi_category,
                    crate::bmi::bmi_category(r.bmi).unwrap()
                );
            }
        }
    }
}
