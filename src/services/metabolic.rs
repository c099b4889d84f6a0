use serde::Serialize;
use std::str::FromStr;

use crate::error::PlanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = PlanError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(PlanError::invalid(
                "gender",
                format!("expected male or female, got {:?}", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Unknown names fall back to sedentary.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            "very active" => Self::VeryActive,
            _ => Self::Sedentary,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Bulking,
    Cutting,
    Maintain,
}

impl Goal {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "bulking" => Self::Bulking,
            "cutting" => Self::Cutting,
            _ => Self::Maintain,
        }
    }

    pub fn calorie_factor(self) -> f64 {
        match self {
            Self::Bulking => 1.2,
            Self::Cutting => 0.8,
            Self::Maintain => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biometrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieTarget {
    pub daily_calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Mifflin-St Jeor basal metabolic rate.
pub fn basal_metabolic_rate(biometrics: &Biometrics) -> f64 {
    let base = 10.0 * biometrics.weight_kg + 6.25 * biometrics.height_cm
        - 5.0 * f64::from(biometrics.age);
    match biometrics.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

pub fn total_daily_energy_expenditure(biometrics: &Biometrics, activity: ActivityLevel) -> f64 {
    basal_metabolic_rate(biometrics) * activity.multiplier()
}

pub fn calorie_target(
    biometrics: &Biometrics,
    activity: ActivityLevel,
    goal: Goal,
) -> CalorieTarget {
    let daily_calories =
        total_daily_energy_expenditure(biometrics, activity) * goal.calorie_factor();
    macro_breakdown(daily_calories)
}

/// Fixed 30/40/30 protein/carbs/fat split by calorie share.
pub fn macro_breakdown(daily_calories: f64) -> CalorieTarget {
    CalorieTarget {
        daily_calories,
        protein: round_to(daily_calories * 0.3 / 4.0, 1),
        carbs: round_to(daily_calories * 0.4 / 4.0, 1),
        fats: round_to(daily_calories * 0.3 / 9.0, 1),
    }
}

/// Rounds on the exact decimal value of `value`, ties to even.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_male() -> Biometrics {
        Biometrics {
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 25,
            gender: Gender::Male,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_bmr_male_and_female() {
        assert_close(basal_metabolic_rate(&reference_male()), 1673.75);

        let female = Biometrics {
            gender: Gender::Female,
            ..reference_male()
        };
        assert_close(basal_metabolic_rate(&female), 1507.75);
    }

    #[test]
    fn test_tdee_and_cutting_target() {
        let biometrics = reference_male();
        assert_close(
            total_daily_energy_expenditure(&biometrics, ActivityLevel::Moderate),
            2594.3125,
        );

        let target = calorie_target(&biometrics, ActivityLevel::Moderate, Goal::Cutting);
        assert_close(round_to(target.daily_calories, 2), 2075.45);
    }

    #[test]
    fn test_bulking_and_maintain() {
        let biometrics = reference_male();
        let tdee = 1673.75 * 1.2;

        let bulking = calorie_target(&biometrics, ActivityLevel::Sedentary, Goal::Bulking);
        assert_close(bulking.daily_calories, tdee * 1.2);

        let maintain = calorie_target(&biometrics, ActivityLevel::Sedentary, Goal::parse("recomp"));
        assert_close(maintain.daily_calories, tdee);
    }

    #[test]
    fn test_macro_breakdown_for_2000_kcal() {
        let target = macro_breakdown(2000.0);
        assert_eq!(target.protein, 150.0);
        assert_eq!(target.carbs, 200.0);
        assert_eq!(target.fats, 66.7);
    }

    #[test]
    fn test_rounding_uses_exact_decimal_with_ties_to_even() {
        let light_bulk = Biometrics {
            weight_kg: 40.0,
            height_cm: 150.0,
            age: 18,
            gender: Gender::Male,
        };
        let target = calorie_target(&light_bulk, ActivityLevel::Light, Goal::Bulking);
        assert_close(target.daily_calories, 2066.625);
        assert_eq!(round_to(target.daily_calories, 2), 2066.62);

        let moderate_cut = Biometrics {
            age: 21,
            ..light_bulk
        };
        let target = calorie_target(&moderate_cut, ActivityLevel::Moderate, Goal::Cutting);
        assert_close(target.daily_calories, 1534.5);
        assert_eq!(target.fats, 51.1);

        assert_eq!(round_to(0.25, 1), 0.2);
        assert_eq!(round_to(0.35, 1), 0.3);
        assert_eq!(round_to(66.666, 1), 66.7);
    }

    #[test]
    fn test_activity_level_parsing() {
        assert_eq!(ActivityLevel::parse("Very Active"), ActivityLevel::VeryActive);
        assert_eq!(ActivityLevel::parse("light"), ActivityLevel::Light);
        assert_eq!(ActivityLevel::parse("couch"), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::parse("").multiplier(), 1.2);
        assert_eq!(ActivityLevel::Active.multiplier(), 1.725);
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!("Male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!(" female ".parse::<Gender>(), Ok(Gender::Female));

        let err = "other".parse::<Gender>().unwrap_err();
        assert!(matches!(err, PlanError::InvalidInput { field: "gender", .. }));
    }
}
