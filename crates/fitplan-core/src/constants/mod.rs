// ABOUTME: Planner constants grouped by domain (limits, input defaults, labels)
// ABOUTME: Single source for the numbers the selectors, validator, and advice rules share
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being scattered
//! through the selectors.

/// Numeric limits applied while deriving a plan
pub mod limits {
    /// Daily calorie target never drops below this value
    pub const MIN_DAILY_CALORIES: u32 = 1200;

    /// Calorie deficit applied for weight loss goals
    pub const WEIGHT_LOSS_DEFICIT_KCAL: i64 = 500;

    /// Calorie surplus applied for muscle building goals
    pub const MUSCLE_GAIN_SURPLUS_KCAL: i64 = 300;

    /// Ages strictly above this get reduced training volume and extra warnings
    pub const SENIOR_AGE_THRESHOLD: u32 = 50;

    /// Ages strictly above this get balance and heart-rate warnings
    pub const ELDERLY_AGE_THRESHOLD: u32 = 65;

    /// Lowest set count after senior volume reduction
    pub const SENIOR_MIN_SETS: u32 = 2;

    /// Lowest rep count after senior volume reduction
    pub const SENIOR_MIN_REPS: u32 = 8;

    /// Rep multiplier for senior volume reduction (result is floored)
    pub const SENIOR_REPS_FACTOR: f64 = 0.8;
}

/// Defaults substituted for missing or unparsable input
pub mod defaults {
    /// Age used when the form value is missing or unparsable
    pub const AGE_YEARS: u32 = 25;

    /// Weight used when the form value is missing or unparsable
    pub const WEIGHT_KG: f64 = 70.0;

    /// Height used when the form value is missing or unparsable
    pub const HEIGHT_CM: f64 = 170.0;

    /// Set count used when a plan carries an unparsable `sets` value
    pub const ROUTINE_SETS: u32 = 1;

    /// Rep count used when a plan carries an unparsable `reps` value
    pub const ROUTINE_REPS: u32 = 10;
}

/// Labels that appear in responses
pub mod labels {
    /// `generatedBy` value when the remote predictor produced the plan
    pub const GENERATED_BY_PREDICTOR: &str = "AI RNN Model (90% Accuracy)";

    /// `generatedBy` value when the rule-based selectors produced the plan
    pub const GENERATED_BY_RULES: &str = "Rule-based Planner";

    /// Meal slot names, in the order they appear in a diet plan
    pub const BREAKFAST: &str = "Breakfast";
    /// Mid-morning snack slot
    pub const MORNING_SNACK: &str = "Morning Snack";
    /// Lunch slot
    pub const LUNCH: &str = "Lunch";
    /// Mid-afternoon snack slot
    pub const AFTERNOON_SNACK: &str = "Afternoon Snack";
    /// Dinner slot
    pub const DINNER: &str = "Dinner";
    /// Evening snack slot (build muscle only)
    pub const EVENING_SNACK: &str = "Evening Snack";
}

/// Service identifiers used in logs and health responses
pub mod service_names {
    /// Name of the HTTP service
    pub const FITPLAN_SERVER: &str = "fitplan-server";

    /// Name used for the remote predictor in errors and logs
    pub const PLAN_PREDICTOR: &str = "Plan Predictor API";
}
