use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use crate::error::AppError;
use crate::mappings;
use crate::models::domain::RecipeModel;
use crate::models::patch::{all_permitted, PatchOperation};
use crate::models::recipe::{RecipeCreate, RecipeDetails, RecipeOverview};
use crate::state::AppState;
use crate::validation::Validated;

/// Replace operations the patch endpoint accepts.
const PERMITTED_PATCHES: &[(&str, &str)] = &[
    ("replace", "/title"),
    ("replace", "/description"),
    ("replace", "/difficulty"),
];

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/{id}", get(get_by_id).patch(patch).delete(remove))
}

async fn create(
    State(state): State<AppState>,
    Validated(body): Validated<RecipeCreate>,
) -> Result<(StatusCode, Json<RecipeOverview>), AppError> {
    let model = state.recipes.add(mappings::recipe_from_create(body)).await?;
    Ok((StatusCode::CREATED, Json(mappings::recipe_overview(&model))))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<RecipeOverview>>, AppError> {
    let models = state.recipes.get_all().await?;
    Ok(Json(models.iter().map(mappings::recipe_overview).collect()))
}

async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecipeDetails>, AppError> {
    let model = state.recipes.get_by_id(id).await?;
    Ok(Json(mappings::recipe_details(model)))
}

async fn patch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(ops): Json<Vec<PatchOperation>>,
) -> Result<Json<RecipeOverview>, AppError> {
    if !all_permitted(&ops, PERMITTED_PATCHES) {
        tracing::warn!(%id, "rejected recipe patch with unpermitted operation");
        return Err(AppError::BadRequest("Operation not permitted.".into()));
    }

    let mut model = RecipeModel::sparse(id);
    for op in &ops {
        let value = op
            .string_value()
            .ok_or_else(|| AppError::BadRequest(format!("Invalid value for {}", op.path)))?;
        match op.path.as_str() {
            "/title" => model.title = value,
            "/description" => model.description = value,
            "/difficulty" => model.difficulty = value,
            _ => {}
        }
    }

    let updated = state.recipes.update(model).await?;
    Ok(Json(mappings::recipe_overview(&updated)))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.recipes.delete(id).await?;
    Ok(StatusCode::OK)
}
