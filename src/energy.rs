//! Energy expenditure: BMR (Mifflin-St Jeor) and TDEE
//!
//! Only the Mifflin-St Jeor equation is implemented; no alternative BMR
//! equations are supported.

use crate::error::{require, CalcError};
use crate::types::{ActivityLevel, Sex};

/// Compute Basal Metabolic Rate via the Mifflin-St Jeor equation.
///
/// Men:   10 × weight(kg) + 6.25 × height(cm) − 5 × age(y) + 5
/// Women: 10 × weight(kg) + 6.25 × height(cm) − 5 × age(y) − 161
///
/// Age is re-validated here so the function holds its own preconditions even
/// when called outside the pipeline.
pub fn bmr_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
) -> Result<f64, CalcError> {
    require(
        weight_kg.is_finite() && weight_kg > 0.0,
        "Weight must be a positive number.",
    )?;
    require(
        height_cm.is_finite() && height_cm > 0.0,
        "Height must be a positive number.",
    )?;
    require(age_years > 0, "Age must be a positive integer.")?;

    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    Ok(match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    })
}

/// Scale a BMR by the activity-level multiplier.
///
/// Returns `(tdee, multiplier)`; the multiplier comes from the exhaustive
/// match on [`ActivityLevel`], so the lookup is total by construction.
pub fn tdee_from_bmr(bmr: f64, activity: ActivityLevel) -> Result<(f64, f64), CalcError> {
    require(bmr.is_finite() && bmr > 0.0, "BMR must be a positive number.")?;
    let multiplier = activity.multiplier();
    Ok((bmr * multiplier, multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn known_male_bmr() {
        // 82 kg, 178 cm, 30y male: 820 + 1112.5 - 150 + 5
        let bmr = bmr_mifflin_st_jeor(82.0, 178.0, 30, Sex::Male).unwrap();
        assert_eq!(bmr, 1787.5);
    }

    #[test]
    fn known_female_bmr() {
        // Same body, female offset: 820 + 1112.5 - 150 - 161
        let bmr = bmr_mifflin_st_jeor(82.0, 178.0, 30, Sex::Female).unwrap();
        assert_eq!(bmr, 1621.5);
    }

    #[test]
    fn zero_age_is_rejected() {
        let err = bmr_mifflin_st_jeor(82.0, 178.0, 0, Sex::Male).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: Age must be a positive integer."
        );
    }

    #[test]
    fn nonpositive_measurements_are_rejected() {
        assert!(bmr_mifflin_st_jeor(0.0, 178.0, 30, Sex::Male).is_err());
        assert!(bmr_mifflin_st_jeor(82.0, -178.0, 30, Sex::Male).is_err());
        assert!(bmr_mifflin_st_jeor(f64::NAN, 178.0, 30, Sex::Male).is_err());
    }

    #[test]
    fn tdee_is_bmr_times_multiplier() {
        let (tdee, multiplier) = tdee_from_bmr(1787.5, ActivityLevel::Moderate).unwrap();
        assert_eq!(multiplier, 1.55);
        assert!((tdee - 1787.5 * 1.55).abs() < 1e-9);
    }

    #[test]
    fn nonpositive_bmr_is_rejected() {
        assert!(tdee_from_bmr(0.0, ActivityLevel::Sedentary).is_err());
        assert!(tdee_from_bmr(-100.0, ActivityLevel::Sedentary).is_err());
        assert!(tdee_from_bmr(f64::INFINITY, ActivityLevel::Sedentary).is_err());
    }

    #[test]
    fn tdee_exceeds_bmr_for_every_level() {
        for level in ActivityLevel::all() {
            let (tdee, _) = tdee_from_bmr(1500.0, level).unwrap();
            assert!(tdee > 1500.0, "{:?}", level);
        }
    }

    proptest! {
        /// Male offset exceeds female offset by exactly 166 kcal/day
        #[test]
        fn prop_male_bmr_exceeds_female(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18u32..80
        ) {
            let male = bmr_mifflin_st_jeor(weight, height, age, Sex::Male).unwrap();
            let female = bmr_mifflin_st_jeor(weight, height, age, Sex::Female).unwrap();
            prop_assert!((male - female - 166.0).abs() < 1e-9);
        }

        /// TDEE stays proportional to BMR across the valid domain
        #[test]
        fn prop_tdee_proportional(bmr in 500.0f64..4000.0) {
            for level in ActivityLevel::all() {
                let (tdee, multiplier) = tdee_from_bmr(bmr, level).unwrap();
                prop_assert!((tdee - bmr * multiplier).abs() < 1e-9);
                prop_assert!(tdee > bmr);
            }
        }
    }
}
