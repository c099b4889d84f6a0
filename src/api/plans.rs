use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    response::{Html, IntoResponse, Response},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

use crate::config::Config;
use crate::datasets::catalog::Catalogs;
use crate::error::PlanError;
use crate::services::plan::{PlanResult, build_plan};
use crate::services::profile::{PlanForm, UserProfile};
use crate::services::render;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalogs: Arc<Catalogs>,
}

impl AppState {
    /// A pinned seed makes every request draw the same plan for the same input.
    fn rng(&self) -> StdRng {
        match self.config.plan_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

pub async fn index_handler() -> Html<String> {
    Html(render::render_index())
}

pub async fn health_handler() -> &'static str {
    "ok"
}

pub async fn predict_handler(
    State(state): State<AppState>,
    form: Result<Form<PlanForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "plan.form_rejected");
            let page = render::render_error(&rejection.body_text());
            return (rejection.status(), Html(page)).into_response();
        }
    };

    match generate(&state, &form) {
        Ok(result) => Html(render::render_result(&result)).into_response(),
        Err(e) => (e.status(), Html(render::render_error(&e.to_string()))).into_response(),
    }
}

pub async fn api_plan_handler(
    State(state): State<AppState>,
    Json(form): Json<PlanForm>,
) -> Result<Json<PlanResult>, PlanError> {
    generate(&state, &form).map(Json)
}

fn generate(state: &AppState, form: &PlanForm) -> Result<PlanResult, PlanError> {
    let result = UserProfile::from_form(form, state.config.max_weeks).and_then(|profile| {
        tracing::debug!(
            goal = ?profile.goal,
            activity_level = ?profile.activity_level,
            targeted_muscle = %profile.targeted_muscle,
            diet_type = %profile.diet_type,
            num_weeks = profile.num_weeks,
            "plan.requested"
        );
        build_plan(&state.catalogs, &profile, &mut state.rng())
    });

    match &result {
        Ok(plan) => tracing::info!(
            daily_calories = plan.daily_calories,
            entry_count = plan.plan.len(),
            "plan.generated"
        ),
        Err(e) => tracing::warn!(error = %e, "plan.rejected"),
    }

    result
}
