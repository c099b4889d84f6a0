use rand::Rng;
use serde::Serialize;

use crate::datasets::catalog::Catalogs;
use crate::error::PlanError;
use crate::services::meal_plan::{MealDay, generate_meal_plan};
use crate::services::metabolic::{calorie_target, round_to};
use crate::services::profile::UserProfile;
use crate::services::workout_plan::{WorkoutDay, generate_workout_plan};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanEntry {
    pub week: u32,
    pub day: u32,
    pub workout: Vec<String>,
    pub diet: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanResult {
    pub name: String,
    pub daily_calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub plan: Vec<PlanEntry>,
}

pub fn build_plan<R: Rng + ?Sized>(
    catalogs: &Catalogs,
    profile: &UserProfile,
    rng: &mut R,
) -> Result<PlanResult, PlanError> {
    let workouts = generate_workout_plan(
        catalogs,
        &profile.targeted_muscle,
        profile.difficulty,
        profile.num_weeks,
        rng,
    );

    let target = calorie_target(&profile.biometrics, profile.activity_level, profile.goal);

    let meals = generate_meal_plan(
        catalogs,
        &profile.diet_type,
        target.daily_calories,
        profile.num_weeks,
        rng,
    )?;

    Ok(PlanResult {
        name: profile.name.clone(),
        daily_calories: round_to(target.daily_calories, 2),
        protein: target.protein,
        carbs: target.carbs,
        fats: target.fats,
        plan: merge_plans(workouts, meals)?,
    })
}

/// Pairs workout and meal days index by index; both must cover the same (week, day) sequence.
pub fn merge_plans(
    workouts: Vec<WorkoutDay>,
    meals: Vec<MealDay>,
) -> Result<Vec<PlanEntry>, PlanError> {
    if workouts.len() != meals.len() {
        return Err(PlanError::PlanMisaligned {
            index: workouts.len().min(meals.len()),
        });
    }

    workouts
        .into_iter()
        .zip(meals)
        .enumerate()
        .map(|(index, (workout, meal))| {
            if (workout.week, workout.day) != (meal.week, meal.day) {
                return Err(PlanError::PlanMisaligned { index });
            }
            Ok(PlanEntry {
                week: workout.week,
                day: workout.day,
                workout: workout.workout,
                diet: meal.diet,
            })
        })
        .collect()
}
