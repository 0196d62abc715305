use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use crate::duration::parse_duration;
use crate::error::AppError;
use crate::mappings;
use crate::models::domain::SubStepModel;
use crate::models::patch::{all_permitted, PatchOperation};
use crate::models::sub_step::{SubStepCreate, SubStepDetails, SubStepOverview};
use crate::state::AppState;
use crate::validation::Validated;

const PERMITTED_PATCHES: &[(&str, &str)] = &[
    ("replace", "/description"),
    ("replace", "/duration"),
];

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/{id}", get(get_by_id).patch(patch).delete(remove))
}

async fn create(
    State(state): State<AppState>,
    Validated(body): Validated<SubStepCreate>,
) -> Result<(StatusCode, Json<SubStepOverview>), AppError> {
    let model =
        mappings::sub_step_from_create(body).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let stored = state.sub_steps.add(model).await?;
    Ok((StatusCode::CREATED, Json(mappings::sub_step_overview(&stored))))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<SubStepOverview>>, AppError> {
    let models = state.sub_steps.get_all().await?;
    Ok(Json(models.iter().map(mappings::sub_step_overview).collect()))
}

async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubStepDetails>, AppError> {
    let model = state.sub_steps.get_by_id(id).await?;
    Ok(Json(mappings::sub_step_details(model)))
}

async fn patch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(ops): Json<Vec<PatchOperation>>,
) -> Result<Json<SubStepOverview>, AppError> {
    if !all_permitted(&ops, PERMITTED_PATCHES) {
        tracing::warn!(%id, "rejected sub-step patch with unpermitted operation");
        return Err(AppError::BadRequest("Operation not permitted.".into()));
    }

    let mut model = SubStepModel::sparse(id);
    for op in &ops {
        let value = op
            .string_value()
            .ok_or_else(|| AppError::BadRequest(format!("Invalid value for {}", op.path)))?;
        match op.path.as_str() {
            "/description" => model.description = value,
            "/duration" => {
                model.duration =
                    parse_duration(&value).map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            _ => {}
        }
    }

    let updated = state.sub_steps.update(model).await?;
    Ok(Json(mappings::sub_step_overview(&updated)))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sub_steps.delete(id).await?;
    Ok(StatusCode::OK)
}
