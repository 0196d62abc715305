use super::recipe::RecipeOverview;
use super::sub_step::SubStepOverview;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StepCreate {
    #[validate(length(min = 10, max = 128, message = "Description must be 10-128 characters"))]
    pub description: String,
    /// Fixed lexical format `HH:MM:SS`; rejected with 400 otherwise.
    pub duration: String,
    pub recipe_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOverview {
    pub id: Uuid,
    pub description: String,
    pub duration: String,
    pub no_of_sub_steps: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDetails {
    pub id: Uuid,
    pub description: String,
    pub duration: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Parent projection; summarized over its loaded relations only.
    pub recipe: Option<RecipeOverview>,
    pub sub_steps: Vec<SubStepOverview>,
}
