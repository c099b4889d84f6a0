use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: String,
    pub exercise_dataset_path: String,
    pub nutrition_dataset_path: String,
    pub plan_seed: Option<u64>,
    pub max_weeks: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT").unwrap_or_else(|_| "5001".to_string());
        let exercise_dataset_path = env::var("EXERCISE_DATASET_PATH")
            .unwrap_or_else(|_| "data/exercises.csv".to_string());
        let nutrition_dataset_path = env::var("NUTRITION_DATASET_PATH")
            .unwrap_or_else(|_| "data/nutrition.csv".to_string());

        let plan_seed = match env::var("PLAN_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| anyhow::anyhow!("Invalid PLAN_SEED {:?}: {}", raw, e))?,
            ),
            Err(_) => None,
        };

        let max_weeks = match env::var("MAX_WEEKS") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|e| anyhow::anyhow!("Invalid MAX_WEEKS {:?}: {}", raw, e))?,
            Err(_) => 52,
        };

        Ok(Self {
            port,
            exercise_dataset_path,
            nutrition_dataset_path,
            plan_seed,
            max_weeks,
        })
    }
}
