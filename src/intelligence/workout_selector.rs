// ABOUTME: Rule-based workout selection from the static catalog
// ABOUTME: Applies senior volume reduction and injury-based exercise exclusion to the template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::catalog::workout_template;
use super::classifier::{classify_workout_goal, excluded_exercise_fragments, matches_fragment};
use fitplan_core::constants::limits;
use fitplan_core::models::{ExerciseRoutine, UserProfile, WorkoutPlan};
use tracing::{debug, warn};

/// Select a weekly workout for a profile.
///
/// The template is chosen by normalized level and classified goal. Profiles
/// older than the senior threshold get reduced volume, and routines that
/// stress a reported injury are removed. A day can end up with no routines;
/// it stays in the schedule and is logged.
#[must_use]
pub fn select_workout(profile: &UserProfile) -> WorkoutPlan {
    let level = profile.level();
    let goal = classify_workout_goal(&profile.fitness_goals);
    let mut plan = workout_template(level, goal).to_plan();

    debug!(level = %level, goal = %goal, "Selected workout template");

    if profile.age > limits::SENIOR_AGE_THRESHOLD {
        for routine in plan.exercises.iter_mut().flat_map(|day| day.routines.iter_mut()) {
            reduce_for_senior(routine);
        }
    }

    apply_injury_filter(&mut plan, &profile.injuries);

    plan
}

/// Remove routines that stress the reported injuries.
///
/// Days are never dropped or back-filled, even when every routine is removed.
pub fn apply_injury_filter(plan: &mut WorkoutPlan, injuries: &str) {
    let excluded = excluded_exercise_fragments(injuries);
    if excluded.is_empty() {
        return;
    }
    for day in &mut plan.exercises {
        day.routines
            .retain(|routine| !matches_fragment(&routine.name, &excluded));
        if day.routines.is_empty() {
            warn!(
                day = %day.day,
                injuries = %injuries,
                "Injury filtering removed every routine for a scheduled day"
            );
        }
    }
}

/// Lower sets and reps for older trainees: `sets = max(2, sets - 1)`,
/// `reps = max(8, floor(reps * 0.8))`
pub fn reduce_for_senior(routine: &mut ExerciseRoutine) {
    routine.sets = routine
        .sets
        .saturating_sub(1)
        .max(limits::SENIOR_MIN_SETS);
    let scaled = (f64::from(routine.reps) * limits::SENIOR_REPS_FACTOR).floor() as u32;
    routine.reps = scaled.max(limits::SENIOR_MIN_REPS);
}
