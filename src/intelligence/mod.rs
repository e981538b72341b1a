// ABOUTME: Rule-based planning: catalogs, keyword classification, selectors, validation, and advice
// ABOUTME: Pure functions over static data; randomness is injected by the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Everything needed to produce a plan without the remote predictor:
//!
//! - **catalog** / **`meal_catalog`**: static workout and meal templates
//! - **classifier**: keyword tables mapping free text to goals and exclusions
//! - **`nutrition_calculator`**: BMR, TDEE, and the daily calorie target
//! - **`workout_selector`** / **`diet_selector`**: template selection and filtering
//! - **`plan_validator`**: sanitizer shared by both generation paths
//! - **advice**: tips, warnings, hydration, and supplements

/// Tips, warnings, hydration, and supplement rules
pub mod advice;
/// Workout templates by level and goal
pub mod catalog;
/// Keyword classification of goals, injuries, and allergies
pub mod classifier;
/// Diet selection with allergy filtering
pub mod diet_selector;
/// Meal variant tables by goal
pub mod meal_catalog;
/// Calorie target calculation
pub mod nutrition_calculator;
/// Best-effort plan sanitizer
pub mod plan_validator;
/// Workout selection with age scaling and injury filtering
pub mod workout_selector;

pub use advice::{advise, Advice};
pub use classifier::{DietGoal, WorkoutGoal};
pub use diet_selector::select_diet;
pub use plan_validator::{validate_diet, validate_workout, Sanitized};
pub use workout_selector::select_workout;
