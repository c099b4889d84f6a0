use anyhow::Result;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::datasets::records::{ExerciseRecord, MealRecord, normalize};

/// Exercise and recipe tables, read once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    exercises: Vec<ExerciseRecord>,
    meals: Vec<MealRecord>,
}

impl Catalogs {
    pub fn new(exercises: Vec<ExerciseRecord>, meals: Vec<MealRecord>) -> Self {
        Self { exercises, meals }
    }

    pub fn load(
        exercise_path: impl AsRef<Path>,
        nutrition_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let exercise_path = exercise_path.as_ref();
        let nutrition_path = nutrition_path.as_ref();

        let exercise_file = File::open(exercise_path).map_err(|e| {
            anyhow::anyhow!(
                "Failed to open exercise dataset {}: {}",
                exercise_path.display(),
                e
            )
        })?;
        let nutrition_file = File::open(nutrition_path).map_err(|e| {
            anyhow::anyhow!(
                "Failed to open nutrition dataset {}: {}",
                nutrition_path.display(),
                e
            )
        })?;

        let catalogs = Self::from_readers(exercise_file, nutrition_file)?;

        tracing::info!(
            exercise_count = catalogs.exercises().len(),
            meal_count = catalogs.meals().len(),
            exercise_path = %exercise_path.display(),
            nutrition_path = %nutrition_path.display(),
            "catalog.loaded"
        );

        Ok(catalogs)
    }

    pub fn from_readers<E: Read, N: Read>(exercises: E, meals: N) -> Result<Self> {
        let exercises = read_records(exercises)
            .map_err(|e| anyhow::anyhow!("Failed to parse exercise dataset: {}", e))?;
        let meals = read_records(meals)
            .map_err(|e| anyhow::anyhow!("Failed to parse nutrition dataset: {}", e))?;
        Ok(Self::new(exercises, meals))
    }

    pub fn exercises(&self) -> &[ExerciseRecord] {
        &self.exercises
    }

    pub fn meals(&self) -> &[MealRecord] {
        &self.meals
    }

    pub fn filter_exercises(
        &self,
        targeted_muscle: &str,
        difficulty_ceiling: i32,
    ) -> Vec<&ExerciseRecord> {
        let targeted_muscle = normalize(targeted_muscle);
        self.exercises
            .iter()
            .filter(|exercise| exercise.matches(&targeted_muscle, difficulty_ceiling))
            .collect()
    }

    pub fn filter_meals(&self, diet_type: &str) -> Vec<&MealRecord> {
        let diet_type = normalize(diet_type);
        self.meals
            .iter()
            .filter(|meal| meal.matches(&diet_type))
            .collect()
    }
}

fn read_records<T: DeserializeOwned, R: Read>(reader: R) -> csv::Result<Vec<T>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect()
}
