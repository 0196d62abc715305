use std::collections::HashMap;

use cookbook_data::{DataError, Repository};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::entities::{Ingredient, Step, SubStep};
use crate::mappings;
use crate::models::domain::SubStepModel;

#[derive(Clone)]
pub struct SubStepsService {
    sub_steps: Repository<SubStep>,
    steps: Repository<Step>,
    ingredients: Repository<Ingredient>,
}

impl SubStepsService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            sub_steps: Repository::new(pool.clone()),
            steps: Repository::new(pool.clone()),
            ingredients: Repository::new(pool),
        }
    }

    pub async fn add(&self, model: SubStepModel) -> Result<SubStepModel, DataError> {
        if !self.steps.exists(model.step_id).await? {
            return Err(DataError::not_found(format!("step {}", model.step_id)));
        }
        let stored = self.sub_steps.add(&mappings::sub_step_record(&model)).await?;
        Ok(mappings::sub_step_model(stored, None, Vec::new()))
    }

    /// Load a sub-step with its parent step and its ingredients.
    pub async fn get_by_id(&self, id: Uuid) -> Result<SubStepModel, DataError> {
        let row = self
            .sub_steps
            .find_by_id(id)
            .await?
            .ok_or_else(|| DataError::not_found(format!("sub-step {id}")))?;

        let step = self
            .steps
            .find_by_id(row.step_id)
            .await?
            .map(|s| mappings::step_model(s, None, Vec::new()));

        let ingredients = self
            .ingredients
            .find_where("sub_step_id", id)
            .await?
            .into_iter()
            .map(|i| mappings::ingredient_model(i, None))
            .collect();
        Ok(mappings::sub_step_model(row, step, ingredients))
    }

    pub async fn get_all(&self) -> Result<Vec<SubStepModel>, DataError> {
        let rows = self.sub_steps.find_all().await?;
        let mut ingredients_by_sub: HashMap<Uuid, Vec<Ingredient>> = HashMap::new();
        for ingredient in self.ingredients.find_all().await? {
            ingredients_by_sub
                .entry(ingredient.sub_step_id)
                .or_default()
                .push(ingredient);
        }
        Ok(rows
            .into_iter()
            .map(|row| {
                let ingredients = ingredients_by_sub
                    .remove(&row.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|i| mappings::ingredient_model(i, None))
                    .collect();
                mappings::sub_step_model(row, None, ingredients)
            })
            .collect())
    }

    /// Overwrite the fields that are set on the incoming model. A blank
    /// description or zero duration counts as "not set".
    pub async fn update(&self, model: SubStepModel) -> Result<SubStepModel, DataError> {
        let mut entity = self
            .sub_steps
            .find_by_id(model.id)
            .await?
            .ok_or_else(|| DataError::not_found(format!("sub-step {}", model.id)))?;

        if !model.description.trim().is_empty() {
            entity.description = model.description;
        }
        if model.duration.num_seconds() > 0 {
            entity.duration_secs = model.duration.num_seconds();
        }

        self.sub_steps.update(&entity).await?;
        self.get_by_id(entity.id).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DataError> {
        if !self.sub_steps.exists(id).await? {
            return Err(DataError::not_found(format!("sub-step {id}")));
        }
        self.sub_steps.delete(id).await
    }
}
