// ABOUTME: Workout, diet, and generated plan shapes returned by the planner
// ABOUTME: All JSON field names are camelCase to match the request form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One exercise with its prescribed volume
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseRoutine {
    /// Exercise name
    pub name: String,
    /// Number of sets, at least 1
    pub sets: u32,
    /// Repetitions per set (seconds or minutes for timed exercises), at least 1
    pub reps: u32,
}

impl ExerciseRoutine {
    /// Create a routine
    #[must_use]
    pub fn new(name: impl Into<String>, sets: u32, reps: u32) -> Self {
        Self {
            name: name.into(),
            sets,
            reps,
        }
    }
}

/// Routines assigned to one weekday
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutDay {
    /// Weekday name ("Monday", ...)
    pub day: String,
    /// Routines in the order they are performed
    pub routines: Vec<ExerciseRoutine>,
}

/// Weekly training plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WorkoutPlan {
    /// Training days in order
    pub schedule: Vec<String>,
    /// One entry per scheduled day
    pub exercises: Vec<WorkoutDay>,
}

impl WorkoutPlan {
    /// Total number of routines across all days
    #[must_use]
    pub fn routine_count(&self) -> usize {
        self.exercises.iter().map(|day| day.routines.len()).sum()
    }
}

/// A named meal and its foods
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meal {
    /// Slot name ("Breakfast", "Lunch", ...)
    pub name: String,
    /// Foods in serving order
    pub foods: Vec<String>,
}

/// Daily eating plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    /// Calorie target, never below the configured minimum
    pub daily_calories: u32,
    /// Meals in the order they are eaten
    pub meals: Vec<Meal>,
}

/// Successful response of the plan endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    /// Always `true`; failures use the error envelope instead
    pub success: bool,
    /// Weekly workout
    pub workout_plan: WorkoutPlan,
    /// Daily diet
    pub diet_plan: DietPlan,
    /// Creation time
    pub generated_at: DateTime<Utc>,
    /// Which path produced the plan
    pub generated_by: String,
    /// Metadata reported by the remote predictor, passed through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_info: Option<Value>,
    /// Level and goal specific tips
    pub tips: Vec<String>,
    /// Age related warnings, omitted when there are none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    /// Daily water recommendation
    pub hydration: String,
    /// Suggested supplements
    pub supplements: Vec<String>,
}
