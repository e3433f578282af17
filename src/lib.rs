//! MetriCal - BMI/BMR/TDEE calculator with metric and imperial input support
//!
//! MetriCal computes three health metrics from a person's sex, age, weight
//! and height through a deterministic pipeline: input normalization → BMI
//! calculation and classification → BMR (Mifflin-St Jeor) → TDEE.
//!
//! Every operation is a pure function of its arguments; there is no state,
//! no I/O, and no shared mutable data anywhere in the library, so concurrent
//! callers need no synchronization.
//!
//! ## Modules
//!
//! - **units**: imperial → metric conversion at the input boundary
//! - **normalizer**: resolve either unit system into canonical (kg, cm)
//! - **bmi** / **energy**: the BMI, BMR and TDEE calculators
//! - **pipeline**: the single-call orchestrator

pub mod bmi;
pub mod energy;
pub mod error;
pub mod normalizer;
pub mod pipeline;
pub mod types;
pub mod units;

pub use error::CalcError;
pub use pipeline::calculate_all;
pub use types::{ActivityLevel, BmiCategory, Inputs, Results, Sex, Units};

/// MetriCal version, from the package manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
