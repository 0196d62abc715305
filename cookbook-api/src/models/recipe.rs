use super::step::StepOverview;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCreate {
    #[validate(length(min = 5, max = 25, message = "Title must be 5-25 characters"))]
    pub title: String,
    #[validate(length(min = 10, max = 128, message = "Description must be 10-128 characters"))]
    pub description: String,
    #[validate(length(min = 1, max = 10, message = "Difficulty must be 1-10 characters"))]
    pub difficulty: String,
}

/// List-view projection: summary fields are derived from the loaded steps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeOverview {
    pub id: Uuid,
    pub title: String,
    pub difficulty: String,
    pub no_of_steps: usize,
    /// Sum of the step durations, formatted `HH:MM:SS`.
    pub duration: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub steps: Vec<StepOverview>,
}
