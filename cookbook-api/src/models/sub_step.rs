use super::ingredient::IngredientOverview;
use super::step::StepOverview;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubStepCreate {
    #[validate(length(min = 10, max = 128, message = "Description must be 10-128 characters"))]
    pub description: String,
    /// Fixed lexical format `HH:MM:SS`; rejected with 400 otherwise.
    pub duration: String,
    pub step_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubStepOverview {
    pub id: Uuid,
    pub description: String,
    pub duration: String,
    pub no_of_ingredients: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubStepDetails {
    pub id: Uuid,
    pub description: String,
    pub duration: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub step: Option<StepOverview>,
    pub ingredients: Vec<IngredientOverview>,
}
