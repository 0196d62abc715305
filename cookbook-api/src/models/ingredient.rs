use super::sub_step::SubStepOverview;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCreate {
    pub sub_step_id: Uuid,
    #[validate(length(min = 3, max = 25, message = "Name must be 3-25 characters"))]
    pub name: String,
    #[validate(length(min = 5, max = 128, message = "Details must be 5-128 characters"))]
    pub details: String,
    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount: i64,
    #[validate(length(min = 1, max = 10, message = "Amount type must be 1-10 characters"))]
    pub amount_type: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientOverview {
    pub id: Uuid,
    pub name: String,
    /// Rendered as `"{amount} {amount_type}"`, e.g. `"5 g"`.
    pub amount: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDetails {
    pub id: Uuid,
    pub name: String,
    pub details: String,
    pub amount: String,
    pub amount_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sub_step: Option<SubStepOverview>,
}
