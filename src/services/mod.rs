pub mod meal_plan;
pub mod metabolic;
pub mod plan;
pub mod profile;
pub mod render;
pub mod sampling;
pub mod workout_plan;
