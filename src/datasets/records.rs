use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseRecord {
    #[serde(rename = "Exercise Name")]
    pub name: String,
    #[serde(rename = "Targeted Muscle")]
    pub targeted_muscle: String,
    #[serde(rename = "Difficulty Level")]
    pub difficulty_level: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealRecord {
    #[serde(rename = "Recipe Name")]
    pub recipe_name: String,
    #[serde(rename = "Total Calories")]
    pub total_calories: f64,
    #[serde(rename = "Veg / Non-veg")]
    pub diet_category: String,
}

/// Lower-cased, trimmed form used for every catalog comparison.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

impl ExerciseRecord {
    pub fn matches(&self, targeted_muscle: &str, difficulty_ceiling: i32) -> bool {
        normalize(&self.targeted_muscle) == targeted_muscle
            && self.difficulty_level <= difficulty_ceiling
    }
}

impl MealRecord {
    pub fn matches(&self, diet_type: &str) -> bool {
        normalize(&self.diet_category) == diet_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(muscle: &str, difficulty: i32) -> ExerciseRecord {
        ExerciseRecord {
            name: "Push Up".to_string(),
            targeted_muscle: muscle.to_string(),
            difficulty_level: difficulty,
        }
    }

    #[test]
    fn test_exercise_matches_ignores_case_and_padding() {
        assert!(exercise(" Chest ", 2).matches("chest", 2));
        assert!(exercise("CHEST", 1).matches("chest", 3));
        assert!(!exercise("chest", 4).matches("chest", 3));
        assert!(!exercise("back", 1).matches("chest", 3));
    }

    #[test]
    fn test_meal_matches_diet_category() {
        let meal = MealRecord {
            recipe_name: "Paneer Tikka".to_string(),
            total_calories: 320.0,
            diet_category: "Veg".to_string(),
        };
        assert!(meal.matches("veg"));
        assert!(!meal.matches("non-veg"));
    }
}
