use rand::Rng;
use serde::Serialize;

use crate::datasets::catalog::Catalogs;
use crate::error::PlanError;
use crate::services::sampling::sample_rows;
use crate::services::workout_plan::DAYS_PER_WEEK;

pub const NO_MEALS: &str = "No available meals for this selection.";
pub const MEAL_SLOTS: [&str; 4] = ["Breakfast", "Lunch", "Dinner", "Snack"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealDay {
    pub week: u32,
    pub day: u32,
    pub diet: Vec<String>,
}

/// Fills breakfast, lunch, dinner and snack for every (week, day).
///
/// `daily_calories` is carried for callers but does not steer selection; recipes
/// are filtered by diet type only. A diet type matching between one and three
/// recipes cannot fill a day and is rejected up front, unless no day is requested.
pub fn generate_meal_plan<R: Rng + ?Sized>(
    catalogs: &Catalogs,
    diet_type: &str,
    _daily_calories: f64,
    num_weeks: u32,
    rng: &mut R,
) -> Result<Vec<MealDay>, PlanError> {
    let candidates = catalogs.filter_meals(diet_type);

    if num_weeks > 0 && !candidates.is_empty() && candidates.len() < MEAL_SLOTS.len() {
        return Err(PlanError::InsufficientData {
            diet_type: diet_type.trim().to_lowercase(),
            available: candidates.len(),
            required: MEAL_SLOTS.len(),
        });
    }

    let mut plan = Vec::with_capacity(num_weeks as usize * DAYS_PER_WEEK as usize);

    for week in 1..=num_weeks {
        for day in 1..=DAYS_PER_WEEK {
            let diet = if candidates.is_empty() {
                vec![NO_MEALS.to_string()]
            } else {
                MEAL_SLOTS
                    .iter()
                    .zip(sample_rows(&candidates, MEAL_SLOTS.len(), rng))
                    .map(|(slot, meal)| {
                        format!(
                            "{}: {} - {} kcal",
                            slot,
                            meal.recipe_name,
                            format_calories(meal.total_calories)
                        )
                    })
                    .collect()
            };
            plan.push(MealDay { week, day, diet });
        }
    }

    Ok(plan)
}

fn format_calories(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}
