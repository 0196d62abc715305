use cookbook_data::{DataError, Repository};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::entities::{Ingredient, SubStep};
use crate::mappings;
use crate::models::domain::IngredientModel;

#[derive(Clone)]
pub struct IngredientsService {
    ingredients: Repository<Ingredient>,
    sub_steps: Repository<SubStep>,
}

impl IngredientsService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            ingredients: Repository::new(pool.clone()),
            sub_steps: Repository::new(pool),
        }
    }

    pub async fn add(&self, model: IngredientModel) -> Result<IngredientModel, DataError> {
        if !self.sub_steps.exists(model.sub_step_id).await? {
            return Err(DataError::not_found(format!(
                "sub-step {}",
                model.sub_step_id
            )));
        }
        let stored = self
            .ingredients
            .add(&mappings::ingredient_record(&model))
            .await?;
        Ok(mappings::ingredient_model(stored, None))
    }

    /// Load an ingredient with its parent sub-step.
    pub async fn get_by_id(&self, id: Uuid) -> Result<IngredientModel, DataError> {
        let row = self
            .ingredients
            .find_by_id(id)
            .await?
            .ok_or_else(|| DataError::not_found(format!("ingredient {id}")))?;

        let sub_step = self
            .sub_steps
            .find_by_id(row.sub_step_id)
            .await?
            .map(|s| mappings::sub_step_model(s, None, Vec::new()));
        Ok(mappings::ingredient_model(row, sub_step))
    }

    pub async fn get_all(&self) -> Result<Vec<IngredientModel>, DataError> {
        let rows = self.ingredients.find_all().await?;
        Ok(rows
            .into_iter()
            .map(|row| mappings::ingredient_model(row, None))
            .collect())
    }

    /// Overwrite the fields that are set on the incoming model. Blank
    /// strings count as "not set".
    pub async fn update(&self, model: IngredientModel) -> Result<IngredientModel, DataError> {
        let mut entity = self
            .ingredients
            .find_by_id(model.id)
            .await?
            .ok_or_else(|| DataError::not_found(format!("ingredient {}", model.id)))?;

        if !model.name.trim().is_empty() {
            entity.name = model.name;
        }
        if !model.details.trim().is_empty() {
            entity.details = model.details;
        }
        if !model.amount.trim().is_empty() {
            entity.amount = model.amount;
        }
        if !model.amount_type.trim().is_empty() {
            entity.amount_type = model.amount_type;
        }

        self.ingredients.update(&entity).await?;
        self.get_by_id(entity.id).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DataError> {
        if !self.ingredients.exists(id).await? {
            return Err(DataError::not_found(format!("ingredient {id}")));
        }
        self.ingredients.delete(id).await
    }
}
