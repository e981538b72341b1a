// ABOUTME: Static coaching advice attached to every generated plan
// ABOUTME: Tips by level and goal, age warnings, hydration target, and supplement suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::classifier::{classify_tip_goal, wants_muscle_supplements, DietGoal};
use fitplan_core::constants::limits;
use fitplan_core::models::{FitnessLevel, UserProfile};
use serde::{Deserialize, Serialize};

const BEGINNER_TIPS: &[&str] = &[
    "Start slow and focus on proper form before increasing intensity",
    "Take rest days seriously - they're crucial for muscle recovery",
    "Stay hydrated throughout your workouts",
];

const INTERMEDIATE_TIPS: &[&str] = &[
    "Consider tracking your progress with measurements and photos",
    "Mix up your routine every 4-6 weeks to avoid plateaus",
    "Focus on progressive overload - gradually increase weight or reps",
];

const ADVANCED_TIPS: &[&str] = &[
    "Implement periodization in your training for optimal results",
    "Consider working with a coach for specialized programming",
    "Pay attention to mobility and recovery work",
];

const WEIGHT_LOSS_TIPS: &[&str] = &[
    "Maintain a consistent calorie deficit of 300-500 calories",
    "Prioritize protein to preserve muscle mass while losing fat",
    "Combine cardio with strength training for best results",
];

const BUILD_MUSCLE_TIPS: &[&str] = &[
    "Eat in a slight calorie surplus (200-300 calories above maintenance)",
    "Consume 1.6-2.2g of protein per kg of body weight",
    "Get 7-9 hours of quality sleep for muscle recovery",
];

const SENIOR_WARNINGS: &[&str] = &[
    "Consult with a healthcare provider before starting any new exercise program",
    "Focus on low-impact exercises if you have joint concerns",
    "Warm up thoroughly before each workout",
];

const ELDERLY_WARNINGS: &[&str] = &[
    "Consider balance and stability exercises to prevent falls",
    "Monitor your heart rate during cardiovascular exercise",
];

const MUSCLE_SUPPLEMENTS: &[&str] = &["Whey Protein", "Creatine Monohydrate", "Multivitamin"];

const GENERAL_SUPPLEMENTS: &[&str] = &["Multivitamin", "Fish Oil", "Vitamin D3"];

/// Advice block shared by both plan generation paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    /// Level tips followed by goal tips
    pub tips: Vec<String>,
    /// Age warnings; empty for younger profiles
    pub warnings: Vec<String>,
    /// Daily water recommendation
    pub hydration: String,
    /// Suggested supplements
    pub supplements: Vec<String>,
}

fn owned<'a>(items: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
    items.iter().map(|item| (*item).to_owned())
}

/// Tips for the level, then for the goal when it is recognized
#[must_use]
pub fn tips(level: FitnessLevel, goals: &str) -> Vec<String> {
    let level_tips = match level {
        FitnessLevel::Beginner => BEGINNER_TIPS,
        FitnessLevel::Intermediate => INTERMEDIATE_TIPS,
        FitnessLevel::Advanced => ADVANCED_TIPS,
    };
    let goal_tips: &[&str] = match classify_tip_goal(goals) {
        Some(DietGoal::WeightLoss) => WEIGHT_LOSS_TIPS,
        Some(DietGoal::BuildMuscle) => BUILD_MUSCLE_TIPS,
        Some(DietGoal::Maintain) | None => &[],
    };
    owned(level_tips).chain(owned(goal_tips)).collect()
}

/// Age based safety warnings
#[must_use]
pub fn warnings(age: u32) -> Vec<String> {
    let mut warnings = Vec::new();
    if age > limits::SENIOR_AGE_THRESHOLD {
        warnings.extend(owned(SENIOR_WARNINGS));
    }
    if age > limits::ELDERLY_AGE_THRESHOLD {
        warnings.extend(owned(ELDERLY_WARNINGS));
    }
    warnings
}

/// Daily water recommendation for a level
#[must_use]
pub fn hydration(level: FitnessLevel) -> String {
    let glasses = match level {
        FitnessLevel::Beginner => "8-10",
        FitnessLevel::Intermediate => "10-12",
        FitnessLevel::Advanced => "12-15",
    };
    format!("Drink {glasses} glasses of water daily")
}

/// Supplement suggestions for a goal
#[must_use]
pub fn supplements(goals: &str) -> Vec<String> {
    let stack = if wants_muscle_supplements(goals) {
        MUSCLE_SUPPLEMENTS
    } else {
        GENERAL_SUPPLEMENTS
    };
    owned(stack).collect()
}

/// Full advice block for a profile
#[must_use]
pub fn advise(profile: &UserProfile) -> Advice {
    let level = profile.level();
    Advice {
        tips: tips(level, &profile.fitness_goals),
        warnings: warnings(profile.age),
        hydration: hydration(level),
        supplements: supplements(&profile.fitness_goals),
    }
}
