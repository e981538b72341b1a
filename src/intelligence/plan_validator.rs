// ABOUTME: Best-effort sanitizer that narrows arbitrary plan JSON into the strict plan shapes
// ABOUTME: Never rejects; malformed values are defaulted and reported back to the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan validation
//!
//! Plans arrive from the remote predictor in whatever shape it produced, so
//! validation works on raw JSON. Unknown fields are dropped, missing arrays
//! become empty, and numeric fields that fail to parse (or are not positive)
//! fall back to defaults: 1 set, 10 reps, and the minimum daily calories.

use fitplan_core::constants::{defaults, limits};
use fitplan_core::models::loose;
use fitplan_core::models::{DietPlan, ExerciseRoutine, Meal, WorkoutDay, WorkoutPlan};
use serde_json::Value;

/// A sanitized value plus the JSON paths that had to be defaulted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized<T> {
    /// The sanitized value
    pub value: T,
    /// Paths of fields that were missing, malformed, or out of range
    pub defaulted_fields: Vec<String>,
}

impl<T> Sanitized<T> {
    /// Whether the input already had the strict shape
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.defaulted_fields.is_empty()
    }
}

/// Collects defaulted field paths while walking a plan
#[derive(Default)]
struct Report {
    defaulted: Vec<String>,
}

impl Report {
    fn array<'v>(&mut self, value: Option<&'v Value>, path: &str) -> &'v [Value] {
        match value.and_then(Value::as_array) {
            Some(items) => items,
            None => {
                self.defaulted.push(path.to_owned());
                &[]
            }
        }
    }

    fn text(&mut self, value: Option<&Value>, path: &str) -> String {
        value.and_then(loose::text).unwrap_or_else(|| {
            self.defaulted.push(path.to_owned());
            String::new()
        })
    }

    fn count(&mut self, value: Option<&Value>, path: &str, default: u32) -> u32 {
        value
            .and_then(loose::integer)
            .filter(|count| *count > 0)
            .and_then(|count| u32::try_from(count).ok())
            .unwrap_or_else(|| {
                self.defaulted.push(path.to_owned());
                default
            })
    }

    fn finish<T>(self, value: T) -> Sanitized<T> {
        Sanitized {
            value,
            defaulted_fields: self.defaulted,
        }
    }
}

/// Narrow raw JSON into a [`WorkoutPlan`]
#[must_use]
pub fn validate_workout(raw: &Value) -> Sanitized<WorkoutPlan> {
    let mut report = Report::default();

    let schedule = report
        .array(raw.get("schedule"), "schedule")
        .iter()
        .enumerate()
        .filter_map(|(i, day)| {
            let text = loose::text(day);
            if text.is_none() {
                report.defaulted.push(format!("schedule[{i}]"));
            }
            text
        })
        .collect();

    let exercises = report
        .array(raw.get("exercises"), "exercises")
        .iter()
        .enumerate()
        .map(|(i, day)| validate_day(&mut report, day, i))
        .collect();

    report.finish(WorkoutPlan {
        schedule,
        exercises,
    })
}

fn validate_day(report: &mut Report, day: &Value, index: usize) -> WorkoutDay {
    let path = format!("exercises[{index}]");
    let name = report.text(day.get("day"), &format!("{path}.day"));
    let routines = report
        .array(day.get("routines"), &format!("{path}.routines"))
        .iter()
        .enumerate()
        .map(|(j, routine)| {
            let path = format!("{path}.routines[{j}]");
            ExerciseRoutine {
                name: report.text(routine.get("name"), &format!("{path}.name")),
                sets: report.count(
                    routine.get("sets"),
                    &format!("{path}.sets"),
                    defaults::ROUTINE_SETS,
                ),
                reps: report.count(
                    routine.get("reps"),
                    &format!("{path}.reps"),
                    defaults::ROUTINE_REPS,
                ),
            }
        })
        .collect();

    WorkoutDay {
        day: name,
        routines,
    }
}

/// Narrow raw JSON into a [`DietPlan`]
#[must_use]
pub fn validate_diet(raw: &Value) -> Sanitized<DietPlan> {
    let mut report = Report::default();

    let daily_calories = match raw.get("dailyCalories").and_then(loose::integer) {
        Some(calories) if calories >= i64::from(limits::MIN_DAILY_CALORIES) => {
            u32::try_from(calories).unwrap_or(u32::MAX)
        }
        _ => {
            report.defaulted.push("dailyCalories".to_owned());
            limits::MIN_DAILY_CALORIES
        }
    };

    let meals = report
        .array(raw.get("meals"), "meals")
        .iter()
        .enumerate()
        .map(|(i, meal)| {
            let name = report.text(meal.get("name"), &format!("meals[{i}].name"));
            let foods = report
                .array(meal.get("foods"), &format!("meals[{i}].foods"))
                .iter()
                .filter_map(loose::text)
                .collect();
            Meal { name, foods }
        })
        .collect();

    report.finish(DietPlan {
        daily_calories,
        meals,
    })
}
