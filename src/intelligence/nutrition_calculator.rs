// ABOUTME: Calorie target calculation from body metrics, fitness level, and diet goal
// ABOUTME: Mifflin-St Jeor BMR, level-based activity multiplier, goal offset, and floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use super::classifier::DietGoal;
use fitplan_core::constants::limits;
use fitplan_core::models::{FitnessLevel, UserProfile};
use serde::{Deserialize, Serialize};

/// Mifflin-St Jeor coefficients
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BmrConfig {
    /// kcal per kg of body weight
    pub msj_weight_coef: f64,
    /// kcal per cm of height
    pub msj_height_coef: f64,
    /// kcal per year of age (negative)
    pub msj_age_coef: f64,
    /// Constant term
    pub msj_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_constant: 5.0,
        }
    }
}

/// Activity multipliers by fitness level
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Beginner multiplier
    pub beginner: f64,
    /// Intermediate multiplier
    pub intermediate: f64,
    /// Advanced multiplier
    pub advanced: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            beginner: 1.3,
            intermediate: 1.55,
            advanced: 1.725,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for a level
    #[must_use]
    pub const fn factor(&self, level: FitnessLevel) -> f64 {
        match level {
            FitnessLevel::Beginner => self.beginner,
            FitnessLevel::Intermediate => self.intermediate,
            FitnessLevel::Advanced => self.advanced,
        }
    }
}

/// Intermediate values behind a calorie target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieTarget {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Final daily calorie target after goal offset and floor
    pub daily_calories: u32,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + 5
#[must_use]
pub fn calculate_mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    weight_component + height_component + age_component + config.msj_constant
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x activity factor for the level
#[must_use]
pub fn calculate_tdee(bmr: f64, level: FitnessLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * config.factor(level)
}

/// Offset added to the rounded TDEE for a goal
#[must_use]
pub const fn goal_offset_kcal(goal: DietGoal) -> i64 {
    match goal {
        DietGoal::WeightLoss => -limits::WEIGHT_LOSS_DEFICIT_KCAL,
        DietGoal::BuildMuscle => limits::MUSCLE_GAIN_SURPLUS_KCAL,
        DietGoal::Maintain => 0,
    }
}

/// Daily calorie target: `round(TDEE) + offset`, never below the minimum
#[must_use]
pub fn calculate_daily_calories(tdee: f64, goal: DietGoal) -> u32 {
    let target = (tdee.round() as i64).saturating_add(goal_offset_kcal(goal));
    let floor = i64::from(limits::MIN_DAILY_CALORIES);
    u32::try_from(target.max(floor)).unwrap_or(u32::MAX)
}

/// Run the full calculation for a profile with the default coefficients
#[must_use]
pub fn calorie_target(profile: &UserProfile, goal: DietGoal) -> CalorieTarget {
    let bmr = calculate_mifflin_st_jeor(
        profile.weight,
        profile.height,
        profile.age,
        &BmrConfig::default(),
    );
    let tdee = calculate_tdee(bmr, profile.level(), &ActivityFactorsConfig::default());
    CalorieTarget {
        bmr,
        tdee,
        daily_calories: calculate_daily_calories(tdee, goal),
    }
}
