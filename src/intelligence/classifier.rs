// ABOUTME: Keyword tables that classify free-text goals, injuries, and allergies
// ABOUTME: Case-insensitive substring matching in a fixed priority order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Free-text classification
//!
//! Every classifier here is a best-effort substring heuristic. Keywords are
//! checked in table order and the first matching category wins, so
//! "gain weight" is a weight loss goal for workouts because `weight` is
//! checked before `gain`.
//!
//! | Classifier | Category | Keywords |
//! |---|---|---|
//! | workout goal | weight loss | `loss`, `lose`, `weight` |
//! | workout goal | build muscle | `muscle`, `gain`, `bulk` |
//! | diet goal | weight loss | `loss`, `lose` |
//! | diet goal | build muscle | `muscle`, `gain`, `bulk` |
//! | tip goal | weight loss | `loss`, `lose` |
//! | tip goal | build muscle | `muscle`, `gain` |
//! | supplements | muscle stack | `muscle` |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keywords that mark a weight loss goal when picking a workout
pub const WORKOUT_WEIGHT_LOSS_KEYWORDS: &[&str] = &["loss", "lose", "weight"];

/// Keywords that mark a weight loss goal for diet and tips
pub const WEIGHT_LOSS_KEYWORDS: &[&str] = &["loss", "lose"];

/// Keywords that mark a muscle building goal
pub const BUILD_MUSCLE_KEYWORDS: &[&str] = &["muscle", "gain", "bulk"];

/// Keywords that select muscle building tips
pub const MUSCLE_TIP_KEYWORDS: &[&str] = &["muscle", "gain"];

/// Keyword that selects the muscle supplement stack
pub const MUSCLE_SUPPLEMENT_KEYWORD: &str = "muscle";

/// Maps words found in a user's injury text to exercise name fragments to avoid
#[derive(Debug, Clone, Copy)]
pub struct InjuryRule {
    /// Any of these in the injury text activates the rule
    pub triggers: &'static [&'static str],
    /// Routines whose name contains any of these are removed
    pub excluded_exercises: &'static [&'static str],
}

/// Injury exclusion rules; matching rules compound
pub const INJURY_RULES: &[InjuryRule] = &[
    InjuryRule {
        triggers: &["knee"],
        excluded_exercises: &["squat", "lunge", "jump"],
    },
    InjuryRule {
        triggers: &["shoulder", "arm"],
        excluded_exercises: &["press", "push"],
    },
];

/// Maps an allergy keyword to food name fragments to avoid
#[derive(Debug, Clone, Copy)]
pub struct AllergyRule {
    /// Keyword looked for in the allergy text
    pub trigger: &'static str,
    /// Foods whose name contains any of these are removed
    pub excluded_foods: &'static [&'static str],
}

/// Allergy exclusion rules
pub const ALLERGY_RULES: &[AllergyRule] = &[
    AllergyRule {
        trigger: "dairy",
        excluded_foods: &["milk", "cheese", "yogurt", "butter"],
    },
    AllergyRule {
        trigger: "nut",
        excluded_foods: &["nut", "peanut", "almond"],
    },
    AllergyRule {
        trigger: "gluten",
        excluded_foods: &["bread", "pasta", "wheat"],
    },
    AllergyRule {
        trigger: "egg",
        excluded_foods: &["egg"],
    },
    AllergyRule {
        trigger: "fish",
        excluded_foods: &["fish", "salmon", "tuna"],
    },
    AllergyRule {
        trigger: "shellfish",
        excluded_foods: &["shrimp", "crab"],
    },
];

/// Goal category used to pick a workout template
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutGoal {
    /// Calorie burning focus
    WeightLoss,
    /// Hypertrophy focus
    BuildMuscle,
    /// General conditioning
    ImproveFitness,
}

impl WorkoutGoal {
    /// Human readable name ("weight loss", ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight loss",
            Self::BuildMuscle => "build muscle",
            Self::ImproveFitness => "improve fitness",
        }
    }
}

impl fmt::Display for WorkoutGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Goal category used to pick meals and the calorie offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietGoal {
    /// Calorie deficit
    WeightLoss,
    /// Calorie surplus
    BuildMuscle,
    /// Calorie balance
    Maintain,
}

impl DietGoal {
    /// Human readable name ("weight loss", ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight loss",
            Self::BuildMuscle => "build muscle",
            Self::Maintain => "maintain",
        }
    }
}

impl fmt::Display for DietGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Classify a goal for workout template lookup
#[must_use]
pub fn classify_workout_goal(goals: &str) -> WorkoutGoal {
    let goals = goals.to_lowercase();
    if contains_any(&goals, WORKOUT_WEIGHT_LOSS_KEYWORDS) {
        WorkoutGoal::WeightLoss
    } else if contains_any(&goals, BUILD_MUSCLE_KEYWORDS) {
        WorkoutGoal::BuildMuscle
    } else {
        WorkoutGoal::ImproveFitness
    }
}

/// Classify a goal for meal selection and calorie adjustment
#[must_use]
pub fn classify_diet_goal(goals: &str) -> DietGoal {
    let goals = goals.to_lowercase();
    if contains_any(&goals, WEIGHT_LOSS_KEYWORDS) {
        DietGoal::WeightLoss
    } else if contains_any(&goals, BUILD_MUSCLE_KEYWORDS) {
        DietGoal::BuildMuscle
    } else {
        DietGoal::Maintain
    }
}

/// Classify a goal for goal-specific tips; `None` means no goal tips apply
#[must_use]
pub fn classify_tip_goal(goals: &str) -> Option<DietGoal> {
    let goals = goals.to_lowercase();
    if contains_any(&goals, WEIGHT_LOSS_KEYWORDS) {
        Some(DietGoal::WeightLoss)
    } else if contains_any(&goals, MUSCLE_TIP_KEYWORDS) {
        Some(DietGoal::BuildMuscle)
    } else {
        None
    }
}

/// Whether the goal asks for the muscle supplement stack
#[must_use]
pub fn wants_muscle_supplements(goals: &str) -> bool {
    goals.to_lowercase().contains(MUSCLE_SUPPLEMENT_KEYWORD)
}

/// Whether the injury text describes an actual injury.
///
/// Empty text, `none`, and anything containing `no` ("no injuries",
/// "nothing") are treated as no injury.
#[must_use]
pub fn reports_injury(injuries: &str) -> bool {
    let injuries = injuries.trim().to_lowercase();
    !injuries.is_empty() && injuries != "none" && !injuries.contains("no")
}

/// Exercise name fragments to avoid for the given injury text
#[must_use]
pub fn excluded_exercise_fragments(injuries: &str) -> Vec<&'static str> {
    if !reports_injury(injuries) {
        return Vec::new();
    }
    let injuries = injuries.to_lowercase();
    INJURY_RULES
        .iter()
        .filter(|rule| contains_any(&injuries, rule.triggers))
        .flat_map(|rule| rule.excluded_exercises.iter().copied())
        .collect()
}

/// Whether the allergy text enables food filtering
#[must_use]
pub fn reports_allergy(allergies: &str) -> bool {
    let allergies = allergies.trim().to_lowercase();
    !allergies.is_empty() && !allergies.contains("none")
}

/// Food name fragments to avoid for the given allergy text
#[must_use]
pub fn excluded_food_fragments(allergies: &str) -> Vec<&'static str> {
    if !reports_allergy(allergies) {
        return Vec::new();
    }
    let allergies = allergies.to_lowercase();
    ALLERGY_RULES
        .iter()
        .filter(|rule| allergies.contains(rule.trigger))
        .flat_map(|rule| rule.excluded_foods.iter().copied())
        .collect()
}

/// Whether a name contains any of the (lowercase) fragments, ignoring case
#[must_use]
pub fn matches_fragment(name: &str, fragments: &[&str]) -> bool {
    !fragments.is_empty() && contains_any(&name.to_lowercase(), fragments)
}
