use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use crate::error::AppError;
use crate::mappings;
use crate::models::domain::IngredientModel;
use crate::models::ingredient::{IngredientCreate, IngredientDetails, IngredientOverview};
use crate::models::patch::{all_permitted, PatchOperation};
use crate::state::AppState;
use crate::validation::Validated;

const PERMITTED_PATCHES: &[(&str, &str)] = &[
    ("replace", "/name"),
    ("replace", "/details"),
    ("replace", "/amount"),
    ("replace", "/amountType"),
];

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/{id}", get(get_by_id).patch(patch).delete(remove))
}

async fn create(
    State(state): State<AppState>,
    Validated(body): Validated<IngredientCreate>,
) -> Result<(StatusCode, Json<IngredientOverview>), AppError> {
    let stored = state
        .ingredients
        .add(mappings::ingredient_from_create(body))
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(mappings::ingredient_overview(&stored)),
    ))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<IngredientOverview>>, AppError> {
    let models = state.ingredients.get_all().await?;
    Ok(Json(
        models.iter().map(mappings::ingredient_overview).collect(),
    ))
}

async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<IngredientDetails>, AppError> {
    let model = state.ingredients.get_by_id(id).await?;
    Ok(Json(mappings::ingredient_details(model)))
}

async fn patch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(ops): Json<Vec<PatchOperation>>,
) -> Result<Json<IngredientOverview>, AppError> {
    if !all_permitted(&ops, PERMITTED_PATCHES) {
        tracing::warn!(%id, "rejected ingredient patch with unpermitted operation");
        return Err(AppError::BadRequest("Operation not permitted.".into()));
    }

    let mut model = IngredientModel::sparse(id);
    for op in &ops {
        let value = op
            .string_value()
            .ok_or_else(|| AppError::BadRequest(format!("Invalid value for {}", op.path)))?;
        match op.path.as_str() {
            "/name" => model.name = value,
            "/details" => model.details = value,
            "/amount" => model.amount = value,
            "/amountType" => model.amount_type = value,
            _ => {}
        }
    }

    let updated = state.ingredients.update(model).await?;
    Ok(Json(mappings::ingredient_overview(&updated)))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.ingredients.delete(id).await?;
    Ok(StatusCode::OK)
}
