//! Core types for the MetriCal pipeline
//!
//! This module defines the data structures that flow through each stage of the
//! calculation: raw inputs, the closed enumerations they select over, and the
//! final results value.

use serde::{Deserialize, Serialize};

/// Input unit system selector
///
/// Chooses which field group of [`Inputs`] is authoritative; the other group
/// is ignored even if populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

/// Biological sex, used only for the BMR offset term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Physical job plus training
    ExtraActive,
}

impl ActivityLevel {
    /// TDEE multiplier for this level.
    ///
    /// The match is exhaustive over the closed variant set, so a new level
    /// without a multiplier is a compile error rather than a missing lookup.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Human-readable description for help text and listings
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "little/no exercise",
            ActivityLevel::Light => "light exercise 1-3 days/week",
            ActivityLevel::Moderate => "moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "physical job + training",
        }
    }

    /// Wire name, matching the serde kebab-case form
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::VeryActive => "very-active",
            ActivityLevel::ExtraActive => "extra-active",
        }
    }

    /// All levels, in ascending multiplier order
    pub fn all() -> [ActivityLevel; 5] {
        [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::VeryActive,
            ActivityLevel::ExtraActive,
        ]
    }
}

/// BMI category classification
///
/// Serializes to the conventional WHO labels ("Normal weight" etc.) so the
/// structured output carries the same strings as the human-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw calculation inputs
///
/// Immutable value object constructed fresh per request. Exactly the field
/// group matching `units` must be populated; the normalizer validates this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inputs {
    /// Which field group below is authoritative
    pub units: Units,
    /// Biological sex for the BMR equation
    pub sex: Sex,
    /// Age in whole years, must be positive
    pub age_years: u32,

    /// Weight in kilograms (metric)
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Height in centimeters (metric)
    #[serde(default)]
    pub height_cm: Option<f64>,

    /// Weight in pounds (imperial)
    #[serde(default)]
    pub weight_lb: Option<f64>,
    /// Height feet component (imperial)
    #[serde(default)]
    pub height_ft: Option<u32>,
    /// Height inches component (imperial)
    #[serde(default)]
    pub height_in: Option<u32>,
}

/// Complete calculation results
///
/// Either all four derived quantities are produced or none are; the pipeline
/// never returns a partial value. Invariant: `tdee == bmr * activity_multiplier`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Results {
    /// Body Mass Index, kg/m²
    pub bmi: f64,
    /// Category the BMI falls in
    pub bmi_category: BmiCategory,
    /// Basal Metabolic Rate, kcal/day
    pub bmr: f64,
    /// Total Daily Energy Expenditure, kcal/day
    pub tdee: f64,
    /// Multiplier applied to BMR to obtain TDEE
    pub activity_multiplier: f64,
}
