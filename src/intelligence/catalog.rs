// ABOUTME: Static workout templates keyed by fitness level and workout goal
// ABOUTME: Nine weekly programs with per-day routines and their set/rep prescriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout catalog
//!
//! Templates are process-wide immutable data. A template's schedule is
//! derived from its day list, so every scheduled day has exactly one entry.
//! Reps are seconds for holds and minutes for cardio blocks such as
//! "Brisk Walking".

use super::classifier::WorkoutGoal;
use fitplan_core::models::{ExerciseRoutine, FitnessLevel, WorkoutDay, WorkoutPlan};

/// One exercise prescription in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutineTemplate {
    /// Exercise name
    pub name: &'static str,
    /// Number of sets
    pub sets: u32,
    /// Repetitions, seconds, or minutes per set
    pub reps: u32,
}

/// Routines for one training day
#[derive(Debug, Clone, Copy)]
pub struct DayTemplate {
    /// Weekday name
    pub day: &'static str,
    /// Routines in order
    pub routines: &'static [RoutineTemplate],
}

/// A weekly program
#[derive(Debug, Clone, Copy)]
pub struct WorkoutTemplate {
    /// Training days in schedule order
    pub days: &'static [DayTemplate],
}

impl WorkoutTemplate {
    /// Scheduled weekday names in order
    pub fn schedule(&self) -> impl Iterator<Item = &'static str> {
        let days: &'static [DayTemplate] = self.days;
        days.iter().map(|day| day.day)
    }

    /// Owned copy of the template as a plan
    #[must_use]
    pub fn to_plan(&self) -> WorkoutPlan {
        WorkoutPlan {
            schedule: self.schedule().map(str::to_owned).collect(),
            exercises: self
                .days
                .iter()
                .map(|day| WorkoutDay {
                    day: day.day.to_owned(),
                    routines: day
                        .routines
                        .iter()
                        .map(|routine| ExerciseRoutine::new(routine.name, routine.sets, routine.reps))
                        .collect(),
                })
                .collect(),
        }
    }
}

const fn routine(name: &'static str, sets: u32, reps: u32) -> RoutineTemplate {
    RoutineTemplate { name, sets, reps }
}

/// Template for a level and goal.
///
/// Every combination is populated, so the lookup cannot miss.
#[must_use]
pub fn workout_template(level: FitnessLevel, goal: WorkoutGoal) -> &'static WorkoutTemplate {
    match (level, goal) {
        (FitnessLevel::Beginner, WorkoutGoal::WeightLoss) => &BEGINNER_WEIGHT_LOSS,
        (FitnessLevel::Beginner, WorkoutGoal::BuildMuscle) => &BEGINNER_BUILD_MUSCLE,
        (FitnessLevel::Beginner, WorkoutGoal::ImproveFitness) => &BEGINNER_IMPROVE_FITNESS,
        (FitnessLevel::Intermediate, WorkoutGoal::WeightLoss) => &INTERMEDIATE_WEIGHT_LOSS,
        (FitnessLevel::Intermediate, WorkoutGoal::BuildMuscle) => &INTERMEDIATE_BUILD_MUSCLE,
        (FitnessLevel::Intermediate, WorkoutGoal::ImproveFitness) => {
            &INTERMEDIATE_IMPROVE_FITNESS
        }
        (FitnessLevel::Advanced, WorkoutGoal::WeightLoss) => &ADVANCED_WEIGHT_LOSS,
        (FitnessLevel::Advanced, WorkoutGoal::BuildMuscle) => &ADVANCED_BUILD_MUSCLE,
        (FitnessLevel::Advanced, WorkoutGoal::ImproveFitness) => &ADVANCED_IMPROVE_FITNESS,
    }
}

static BEGINNER_WEIGHT_LOSS: WorkoutTemplate = WorkoutTemplate {
    days: &[
        DayTemplate {
            day: "Monday",
            routines: &[
                routine("Brisk Walking", 1, 30),
                routine("Bodyweight Squats", 3, 12),
                routine("Wall Push-ups", 3, 10),
                routine("Standing Calf Raises", 3, 15),
                routine("Plank Hold", 3, 20),
            ],
        },
        DayTemplate {
            day: "Wednesday",
            routines: &[
                routine("Jumping Jacks", 3, 20),
                routine("Lunges", 3, 10),
                routine("Knee Push-ups", 3, 12),
                routine("Bicycle Crunches", 3, 15),
                routine("High Knees", 3, 30),
            ],
        },
        DayTemplate {
            day: "Friday",
            routines: &[
                routine("Jump Rope", 3, 60),
                routine("Mountain Climbers", 3, 15),
                routine("Burpees", 3, 8),
                routine("Leg Raises", 3, 12),
                routine("Side Plank", 3, 20),
            ],
        },
    ],
};

static BEGINNER_BUILD_MUSCLE: WorkoutTemplate = WorkoutTemplate {
    days: &[
        DayTemplate {
            day: "Monday",
            routines: &[
                routine("Push-ups", 4, 10),
                routine("Dumbbell Chest Press", 3, 12),
                routine("Dumbbell Shoulder Press", 3, 10),
                routine("Tricep Dips", 3, 10),
                routine("Plank", 3, 30),
            ],
        },
        DayTemplate {
            day: "Wednesday",
            routines: &[
                routine("Bodyweight Squats", 4, 15),
                routine("Lunges", 3, 12),
                routine("Glute Bridges", 3, 15),
                routine("Calf Raises", 4, 20),
                routine("Dead Bug", 3, 15),
            ],
        },
        DayTemplate {
            day: "Friday",
            routines: &[
                routine("Pull-ups (Assisted)", 3, 8),
                routine("Dumbbell Rows", 4, 12),
                routine("Bicep Curls", 3, 12),
                routine("Hammer Curls", 3, 10),
                routine("Russian Twists", 3, 20),
            ],
        },
    ],
};

static BEGINNER_IMPROVE_FITNESS: WorkoutTemplate = WorkoutTemplate {
    days: &[
        DayTemplate {
            day: "Monday",
            routines: &[
                routine("Jogging", 1, 20),
                routine("Squats", 3, 15),
                routine("Push-ups", 3, 12),
                routine("Lunges", 3, 10),
                routine("Plank", 3, 30),
            ],
        },
        DayTemplate {
            day: "Wednesday",
            routines: &[
                routine("Cycling", 1, 25),
                routine("Step-ups", 3, 12),
                routine("Dumbbell Press", 3, 10),
                routine("Crunches", 3, 20),
                routine("Jumping Jacks", 3, 30),
            ],
        },
        DayTemplate {
            day: "Friday",
            routines: &[
                routine("Swimming", 1, 30),
                routine("Burpees", 3, 10),
                routine("Mountain Climbers", 3, 15),
                routine("Leg Raises", 3, 15),
                routine("Side Plank", 3, 25),
            ],
        },
    ],
};

static INTERMEDIATE_WEIGHT_LOSS: WorkoutTemplate = WorkoutTemplate {
    days: &[
        DayTemplate {
            day: "Monday",
            routines: &[
                routine("Running", 1, 30),
                routine("Jump Squats", 4, 15),
                routine("Push-ups", 4, 20),
                routine("Burpees", 4, 12),
                routine("Mountain Climbers", 4, 20),
            ],
        },
        DayTemplate {
            day: "Tuesday",
            routines: &[
                routine("HIIT Intervals", 5, 3),
                routine("Box Jumps", 4, 12),
                routine("Kettlebell Swings", 4, 15),
                routine("Battle Ropes", 4, 30),
                routine("Plank to Push-up", 3, 12),
            ],
        },
        DayTemplate {
            day: "Thursday",
            routines: &[
                routine("Cycling Intervals", 1, 40),
                routine("Jump Lunges", 4, 12),
                routine("Dumbbell Thrusters", 4, 15),
                routine("High Knees", 4, 30),
                routine("Russian Twists", 4, 25),
            ],
        },
        DayTemplate {
            day: "Friday",
            routines: &[
                routine("Rowing Machine", 1, 25),
                routine("Tuck Jumps", 4, 10),
                routine("Dumbbell Snatch", 4, 12),
                routine("Plyo Push-ups", 3, 10),
                routine("V-ups", 4, 15),
            ],
        },
    ],
};

static INTERMEDIATE_BUILD_MUSCLE: WorkoutTemplate = WorkoutTemplate {
    days: &[
        DayTemplate {
            day: "Monday",
            routines: &[
                routine("Barbell Bench Press", 4, 10),
                routine("Incline Dumbbell Press", 4, 12),
                routine("Cable Flyes", 3, 15),
                routine("Overhead Press", 4, 10),
                routine("Lateral Raises", 3, 15),
            ],
        },
        DayTemplate {
            day: "Tuesday",
            routines: &[
                routine("Barbell Squats", 5, 8),
                routine("Romanian Deadlifts", 4, 10),
                routine("Leg Press", 4, 12),
                routine("Leg Curls", 3, 15),
                routine("Calf Raises", 4, 20),
            ],
        },
        DayTemplate {
            day: "Thursday",
            routines: &[
                routine("Pull-ups", 4, 10),
                routine("Barbell Rows", 4, 10),
                routine("Lat Pulldowns", 4, 12),
                routine("Face Pulls", 3, 15),
                routine("Barbell Curls", 4, 12),
            ],
        },
        DayTemplate {
            day: "Friday",
            routines: &[
                routine("Deadlifts", 5, 6),
                routine("Front Squats", 4, 10),
                routine("Walking Lunges", 3, 12),
                routine("Cable Woodchoppers", 3, 15),
                routine("Hanging Leg Raises", 4, 12),
            ],
        },
    ],
};

static INTERMEDIATE_IMPROVE_FITNESS: WorkoutTemplate = WorkoutTemplate {
    days: &[
        DayTemplate {
            day: "Monday",
            routines: &[
                routine("Interval Running", 1, 35),
                routine("Goblet Squats", 4, 15),
                routine("Push-ups", 4, 20),
                routine("Dumbbell Rows", 4, 12),
                routine("Plank", 3, 60),
            ],
        },
        DayTemplate {
            day: "Wednesday",
            routines: &[
                routine("Swimming", 1, 40),
                routine("Box Jumps", 4, 12),
                routine("Bench Dips", 4, 15),
                routine("Bicycle Crunches", 4, 25),
                routine("Burpees", 3, 15),
            ],
        },
        DayTemplate {
            day: "Friday",
            routines: &[
                routine("Cycling", 1, 45),
                routine("Lunges", 4, 15),
                routine("Shoulder Press", 4, 12),
                routine("Pull-ups", 3, 10),
                routine("Russian Twists", 4, 30),
            ],
        },
        DayTemplate {
            day: "Saturday",
            routines: &[
                routine("Hiking/Walking", 1, 60),
                routine("Bodyweight Circuit", 3, 15),
                routine("Core Work", 4, 20),
                routine("Stretching", 1, 15),
            ],
        },
    ],
};

static ADVANCED_WEIGHT_LOSS: WorkoutTemplate = WorkoutTemplate {
    days: &[
        DayTemplate {
            day: "Monday",
            routines: &[
                routine("Sprint Intervals", 8, 2),
                routine("Box Jump Burpees", 5, 15),
                routine("Kettlebell Clean & Press", 5, 12),
                routine("Battle Ropes", 5, 45),
                routine("Plank Variations", 4, 60),
            ],
        },
        DayTemplate {
            day: "Tuesday",
            routines: &[
                routine("Assault Bike", 10, 1),
                routine("Barbell Complexes", 5, 10),
                routine("Sled Push/Pull", 6, 30),
                routine("Tire Flips", 4, 10),
                routine("Hanging Leg Raises", 4, 15),
            ],
        },
        DayTemplate {
            day: "Wednesday",
            routines: &[
                routine("Rowing Sprints", 8, 2),
                routine("Olympic Lifts", 5, 8),
                routine("Prowler Sprints", 6, 20),
                routine("Medicine Ball Slams", 5, 15),
                routine("Ab Wheel Rollouts", 4, 12),
            ],
        },
        DayTemplate {
            day: "Friday",
            routines: &[
                routine("Jump Rope Double Unders", 5, 50),
                routine("Snatch Pulls", 5, 8),
                routine("Box Jumps", 5, 15),
                routine("Farmer's Walks", 4, 60),
                routine("Dragon Flags", 3, 10),
            ],
        },
        DayTemplate {
            day: "Saturday",
            routines: &[
                routine("Long Distance Run", 1, 60),
                routine("Circuit Training", 5, 20),
                routine("HIIT Finisher", 4, 5),
            ],
        },
    ],
};

static ADVANCED_BUILD_MUSCLE: WorkoutTemplate = WorkoutTemplate {
    days: &[
        DayTemplate {
            day: "Monday",
            routines: &[
                routine("Barbell Bench Press", 5, 5),
                routine("Incline Barbell Press", 4, 8),
                routine("Weighted Dips", 4, 10),
                routine("Cable Crossovers", 4, 12),
                routine("Skull Crushers", 4, 12),
            ],
        },
        DayTemplate {
            day: "Tuesday",
            routines: &[
                routine("Deadlifts", 5, 5),
                routine("Barbell Rows", 5, 8),
                routine("Weighted Pull-ups", 4, 8),
                routine("T-Bar Rows", 4, 10),
                routine("Preacher Curls", 4, 12),
            ],
        },
        DayTemplate {
            day: "Thursday",
            routines: &[
                routine("Back Squats", 5, 5),
                routine("Front Squats", 4, 8),
                routine("Bulgarian Split Squats", 4, 10),
                routine("Leg Extensions", 4, 15),
                routine("Standing Calf Raises", 5, 20),
            ],
        },
        DayTemplate {
            day: "Friday",
            routines: &[
                routine("Military Press", 5, 5),
                routine("Arnold Press", 4, 10),
                routine("Lateral Raises", 4, 15),
                routine("Face Pulls", 4, 15),
                routine("Shrugs", 4, 12),
            ],
        },
        DayTemplate {
            day: "Saturday",
            routines: &[
                routine("Power Cleans", 5, 5),
                routine("Romanian Deadlifts", 4, 8),
                routine("Weighted Planks", 4, 60),
                routine("Cable Crunches", 4, 20),
                routine("Landmine Twists", 4, 15),
            ],
        },
    ],
};

static ADVANCED_IMPROVE_FITNESS: WorkoutTemplate = WorkoutTemplate {
    days: &[
        DayTemplate {
            day: "Monday",
            routines: &[
                routine("CrossFit WOD", 1, 30),
                routine("Olympic Lifts", 5, 5),
                routine("Gymnastics Skills", 4, 10),
                routine("Core Circuit", 4, 15),
            ],
        },
        DayTemplate {
            day: "Tuesday",
            routines: &[
                routine("Distance Running", 1, 50),
                routine("Tempo Work", 4, 8),
                routine("Plyometrics", 5, 12),
                routine("Agility Drills", 4, 10),
            ],
        },
        DayTemplate {
            day: "Thursday",
            routines: &[
                routine("Swimming", 1, 60),
                routine("Full Body Circuit", 5, 15),
                routine("Functional Movements", 4, 12),
            ],
        },
        DayTemplate {
            day: "Friday",
            routines: &[
                routine("HIIT Training", 10, 2),
                routine("Compound Lifts", 5, 8),
                routine("Conditioning Work", 4, 20),
            ],
        },
        DayTemplate {
            day: "Saturday",
            routines: &[
                routine("Sport-Specific Training", 1, 90),
                routine("Active Recovery", 1, 30),
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const LEVELS: [FitnessLevel; 3] = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];
    const GOALS: [WorkoutGoal; 3] = [
        WorkoutGoal::WeightLoss,
        WorkoutGoal::BuildMuscle,
        WorkoutGoal::ImproveFitness,
    ];

    #[test]
    fn test_every_template_is_well_formed() {
        for level in LEVELS {
            for goal in GOALS {
                let template = workout_template(level, goal);
                let days: HashSet<_> = template.schedule().collect();
                assert_eq!(days.len(), template.days.len(), "{level}/{goal}");
                for day in template.days {
                    assert!(!day.routines.is_empty());
                    assert!(day.routines.iter().all(|r| r.sets >= 1 && r.reps >= 1));
                }
            }
        }
    }

    #[test]
    fn test_beginner_weight_loss_template() {
        let plan = workout_template(FitnessLevel::Beginner, WorkoutGoal::WeightLoss).to_plan();
        assert_eq!(plan.schedule, vec!["Monday", "Wednesday", "Friday"]);
        assert_eq!(plan.exercises[0].routines.len(), 5);
        assert_eq!(
            plan.exercises[0].routines[0],
            ExerciseRoutine::new("Brisk Walking", 1, 30)
        );
    }

    #[test]
    fn test_schedule_lengths_grow_with_level() {
        let days = |level| workout_template(level, WorkoutGoal::BuildMuscle).days.len();
        assert_eq!(days(FitnessLevel::Beginner), 3);
        assert_eq!(days(FitnessLevel::Intermediate), 4);
        assert_eq!(days(FitnessLevel::Advanced), 5);
    }
}
