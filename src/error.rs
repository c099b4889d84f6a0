use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("invalid value for `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error(
        "only {available} recipe(s) match diet type {diet_type:?}, {required} are needed to fill a day"
    )]
    InsufficientData {
        diet_type: String,
        available: usize,
        required: usize,
    },

    #[error("workout and meal plans disagree at entry {index}")]
    PlanMisaligned { index: usize },
}

impl PlanError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } | Self::InsufficientData { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::PlanMisaligned { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for PlanError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PlanError::invalid("age", "not a number").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            PlanError::InsufficientData {
                diet_type: "veg".to_string(),
                available: 2,
                required: 4,
            }
            .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            PlanError::PlanMisaligned { index: 3 }.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            PlanError::invalid("gender", "expected male or female").to_string(),
            "invalid value for `gender`: expected male or female"
        );
        let err = PlanError::InsufficientData {
            diet_type: "vegan".to_string(),
            available: 1,
            required: 4,
        };
        assert!(err.to_string().contains("only 1 recipe(s)"));
        assert!(err.to_string().contains("\"vegan\""));
    }
}
