use rand::Rng;
use serde::Serialize;

use crate::datasets::catalog::Catalogs;
use crate::services::sampling::sample_rows;

pub const NO_EXERCISES: &str = "No available exercises for this selection.";
pub const EXERCISES_PER_DAY: usize = 3;
pub const DAYS_PER_WEEK: u32 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutDay {
    pub week: u32,
    pub day: u32,
    pub workout: Vec<String>,
}

/// One entry per (week, day), weeks outer. Every day is sampled afresh.
pub fn generate_workout_plan<R: Rng + ?Sized>(
    catalogs: &Catalogs,
    targeted_muscle: &str,
    difficulty: i32,
    num_weeks: u32,
    rng: &mut R,
) -> Vec<WorkoutDay> {
    let candidates = catalogs.filter_exercises(targeted_muscle, difficulty);
    let mut plan = Vec::with_capacity(num_weeks as usize * DAYS_PER_WEEK as usize);

    for week in 1..=num_weeks {
        for day in 1..=DAYS_PER_WEEK {
            let workout = if candidates.is_empty() {
                vec![NO_EXERCISES.to_string()]
            } else {
                sample_rows(&candidates, EXERCISES_PER_DAY, rng)
                    .into_iter()
                    .map(|exercise| format_exercise(&exercise.name))
                    .collect()
            };
            plan.push(WorkoutDay { week, day, workout });
        }
    }

    plan
}

fn format_exercise(name: &str) -> String {
    format!("{} - 3 sets x 8 reps", name)
}
