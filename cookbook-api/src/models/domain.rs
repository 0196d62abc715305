//! Internal domain models.
//!
//! Each model carries its loaded relations: children as `Vec`s, the parent
//! as an `Option` that is only populated by the detail lookups. The
//! `sparse` constructors produce a model with every data field unset;
//! services interpret blank strings and zero durations on an incoming
//! model as "not set" (see the service update methods).

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RecipeModel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub steps: Vec<StepModel>,
}

impl RecipeModel {
    pub fn sparse(id: Uuid) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            difficulty: String::new(),
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
            steps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StepModel {
    pub id: Uuid,
    pub description: String,
    pub duration: Duration,
    pub recipe_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub recipe: Option<RecipeModel>,
    pub sub_steps: Vec<SubStepModel>,
}

impl StepModel {
    pub fn sparse(id: Uuid) -> Self {
        Self {
            id,
            description: String::new(),
            duration: Duration::zero(),
            recipe_id: Uuid::nil(),
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
            recipe: None,
            sub_steps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubStepModel {
    pub id: Uuid,
    pub description: String,
    pub duration: Duration,
    pub step_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub step: Option<StepModel>,
    pub ingredients: Vec<IngredientModel>,
}

impl SubStepModel {
    pub fn sparse(id: Uuid) -> Self {
        Self {
            id,
            description: String::new(),
            duration: Duration::zero(),
            step_id: Uuid::nil(),
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
            step: None,
            ingredients: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IngredientModel {
    pub id: Uuid,
    pub name: String,
    pub details: String,
    pub amount: String,
    pub amount_type: String,
    pub sub_step_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sub_step: Option<SubStepModel>,
}

impl IngredientModel {
    pub fn sparse(id: Uuid) -> Self {
        Self {
            id,
            name: String::new(),
            details: String::new(),
            amount: String::new(),
            amount_type: String::new(),
            sub_step_id: Uuid::nil(),
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
            sub_step: None,
        }
    }
}
