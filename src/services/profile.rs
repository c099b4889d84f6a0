use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::str::FromStr;

use crate::error::PlanError;
use crate::services::metabolic::{ActivityLevel, Biometrics, Gender, Goal};

/// Raw submission, as posted by the HTML form or the JSON API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanForm {
    #[serde(deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub height: String,
    #[serde(deserialize_with = "string_or_number")]
    pub weight: String,
    #[serde(deserialize_with = "string_or_number")]
    pub age: String,
    #[serde(deserialize_with = "string_or_number")]
    pub gender: String,
    #[serde(deserialize_with = "string_or_number")]
    pub goal: String,
    #[serde(deserialize_with = "string_or_number")]
    pub activity_level: String,
    #[serde(deserialize_with = "string_or_number")]
    pub targeted_muscle: String,
    #[serde(deserialize_with = "string_or_number")]
    pub difficulty: String,
    #[serde(deserialize_with = "string_or_number")]
    pub num_weeks: String,
    #[serde(deserialize_with = "string_or_number")]
    pub diet_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub biometrics: Biometrics,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub targeted_muscle: String,
    pub difficulty: i32,
    pub num_weeks: u32,
    pub diet_type: String,
}

impl UserProfile {
    pub fn from_form(form: &PlanForm, max_weeks: u32) -> Result<Self, PlanError> {
        let height_cm = parse_measure("height", &form.height)?;
        let weight_kg = parse_measure("weight", &form.weight)?;
        let age = parse_number::<u32>("age", &form.age)?;
        let gender = form.gender.parse::<Gender>()?;
        let difficulty = parse_number::<i32>("difficulty", &form.difficulty)?;
        let num_weeks = parse_number::<u32>("num_weeks", &form.num_weeks)?;

        if num_weeks > max_weeks {
            return Err(PlanError::invalid(
                "num_weeks",
                format!("at most {} weeks can be planned, got {}", max_weeks, num_weeks),
            ));
        }

        Ok(Self {
            name: form.name.trim().to_string(),
            biometrics: Biometrics {
                weight_kg,
                height_cm,
                age,
                gender,
            },
            activity_level: ActivityLevel::parse(&form.activity_level),
            goal: Goal::parse(&form.goal),
            targeted_muscle: form.targeted_muscle.trim().to_lowercase(),
            difficulty,
            num_weeks,
            diet_type: form.diet_type.trim().to_lowercase(),
        })
    }
}

fn parse_number<T: FromStr>(field: &'static str, raw: &str) -> Result<T, PlanError>
where
    T::Err: fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| PlanError::invalid(field, format!("{:?} is not a valid number ({})", raw, e)))
}

fn parse_measure(field: &'static str, raw: &str) -> Result<f64, PlanError> {
    let value = parse_number::<f64>(field, raw)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(PlanError::invalid(
            field,
            format!("must be a positive number, got {}", raw.trim()),
        ));
    }
    Ok(value)
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct FieldVisitor;

    impl de::Visitor<'_> for FieldVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(FieldVisitor)
}
