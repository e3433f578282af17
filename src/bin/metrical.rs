//! MetriCal CLI - Command-line interface for MetriCal
//!
//! Commands:
//! - calc: Calculate BMI, BMR, and TDEE from body measurements
//! - activity-levels: List activity levels and their TDEE multipliers

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use metrical::{calculate_all, ActivityLevel, CalcError, Inputs, Results, Sex, Units, VERSION};

/// MetriCal - BMI/BMR/TDEE calculator with metric/imperial support
#[derive(Parser)]
#[command(name = "metrical")]
#[command(version = VERSION)]
#[command(about = "Calculate BMI, BMR, and TDEE", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate BMI, BMR, and TDEE
    Calc {
        /// Biological sex used by the BMR equation
        #[arg(long, value_enum)]
        sex: Sex,

        /// Age in years
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        age: u32,

        /// Input units for weight/height
        #[arg(short, long, value_enum, default_value_t = Units::Imperial)]
        units: Units,

        /// Weight in kilograms (metric)
        #[arg(long)]
        weight_kg: Option<f64>,

        /// Height in centimeters (metric)
        #[arg(long)]
        height_cm: Option<f64>,

        /// Weight in pounds (imperial)
        #[arg(long)]
        weight_lb: Option<f64>,

        /// Height feet component (imperial)
        #[arg(long)]
        height_ft: Option<u32>,

        /// Height inches component (imperial)
        #[arg(long)]
        height_in: Option<u32>,

        /// Activity level used to compute TDEE
        #[arg(long, value_enum, default_value_t = ActivityLevel::Moderate)]
        activity: ActivityLevel,

        /// Print machine-readable JSON output
        #[arg(long)]
        json: bool,
    },

    /// Show activity levels and multipliers
    ActivityLevels,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), MetricalCliError> {
    match cli.command {
        Commands::Calc {
            sex,
            age,
            units,
            weight_kg,
            height_cm,
            weight_lb,
            height_ft,
            height_in,
            activity,
            json,
        } => {
            let inputs = Inputs {
                units,
                sex,
                age_years: age,
                weight_kg,
                height_cm,
                weight_lb,
                height_ft,
                height_in,
            };

            let results = calculate_all(&inputs, activity)?;

            if json {
                print_json(&results, activity)?;
            } else {
                print_human(&results, activity);
            }
            Ok(())
        }

        Commands::ActivityLevels => {
            println!("Activity levels:");
            for level in ActivityLevel::all() {
                println!(
                    "- {:<13} (x{:<5}) {}",
                    level.as_str(),
                    level.multiplier(),
                    level.description()
                );
            }
            Ok(())
        }
    }
}

fn print_human(results: &Results, activity: ActivityLevel) {
    // Decorated header only when talking to a terminal
    if atty::is(atty::Stream::Stdout) {
        println!("\n📊 Results");
        println!("{}", "-".repeat(40));
    }
    println!("BMI:  {:.2}  ({})", results.bmi, results.bmi_category);
    println!("BMR:  {:.0} kcal/day", results.bmr);
    println!(
        "TDEE: {:.0} kcal/day  ({}, x{})",
        results.tdee,
        activity.as_str(),
        results.activity_multiplier
    );
}

fn print_json(results: &Results, activity: ActivityLevel) -> Result<(), MetricalCliError> {
    let payload = JsonReport {
        bmi: (results.bmi * 100.0).round() / 100.0,
        bmi_category: results.bmi_category.label().to_string(),
        bmr_kcal_per_day: results.bmr.round() as i64,
        tdee_kcal_per_day: results.tdee.round() as i64,
        activity_level: activity.as_str().to_string(),
        activity_multiplier: results.activity_multiplier,
    };
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

// Report types

#[derive(serde::Serialize)]
struct JsonReport {
    bmi: f64,
    bmi_category: String,
    bmr_kcal_per_day: i64,
    tdee_kcal_per_day: i64,
    activity_level: String,
    activity_multiplier: f64,
}

// Error types

#[derive(Debug)]
enum MetricalCliError {
    Calc(CalcError),
    Json(serde_json::Error),
}

impl From<CalcError> for MetricalCliError {
    fn from(e: CalcError) -> Self {
        MetricalCliError::Calc(e)
    }
}

impl From<serde_json::Error> for MetricalCliError {
    fn from(e: serde_json::Error) -> Self {
        MetricalCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<MetricalCliError> for CliError {
    fn from(e: MetricalCliError) -> Self {
        match e {
            MetricalCliError::Calc(e) => CliError {
                code: "INVALID_INPUT".to_string(),
                message: e.to_string(),
                hint: Some(
                    "Provide the weight/height fields matching --units".to_string(),
                ),
            },
            MetricalCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
        }
    }
}
