use std::collections::HashMap;

use cookbook_data::{DataError, Repository};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::entities::{Ingredient, Recipe, Step, SubStep};
use crate::mappings;
use crate::models::domain::StepModel;

#[derive(Clone)]
pub struct StepsService {
    steps: Repository<Step>,
    recipes: Repository<Recipe>,
    sub_steps: Repository<SubStep>,
    ingredients: Repository<Ingredient>,
}

impl StepsService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            steps: Repository::new(pool.clone()),
            recipes: Repository::new(pool.clone()),
            sub_steps: Repository::new(pool.clone()),
            ingredients: Repository::new(pool),
        }
    }

    /// The referenced recipe must exist; reported as not-found rather than
    /// left to the foreign-key constraint.
    pub async fn add(&self, model: StepModel) -> Result<StepModel, DataError> {
        if !self.recipes.exists(model.recipe_id).await? {
            return Err(DataError::not_found(format!("recipe {}", model.recipe_id)));
        }
        let stored = self.steps.add(&mappings::step_record(&model)).await?;
        Ok(mappings::step_model(stored, None, Vec::new()))
    }

    /// Load a step with its parent recipe and its sub-steps (including
    /// their ingredients, which the sub-step overview summarizes).
    pub async fn get_by_id(&self, id: Uuid) -> Result<StepModel, DataError> {
        let row = self
            .steps
            .find_by_id(id)
            .await?
            .ok_or_else(|| DataError::not_found(format!("step {id}")))?;

        let recipe = self
            .recipes
            .find_by_id(row.recipe_id)
            .await?
            .map(|r| mappings::recipe_model(r, Vec::new()));

        let mut sub_steps = Vec::new();
        for sub_row in self.sub_steps.find_where("step_id", id).await? {
            let ingredients = self
                .ingredients
                .find_where("sub_step_id", sub_row.id)
                .await?
                .into_iter()
                .map(|i| mappings::ingredient_model(i, None))
                .collect();
            sub_steps.push(mappings::sub_step_model(sub_row, None, ingredients));
        }
        Ok(mappings::step_model(row, recipe, sub_steps))
    }

    pub async fn get_all(&self) -> Result<Vec<StepModel>, DataError> {
        let rows = self.steps.find_all().await?;
        let mut subs_by_step: HashMap<Uuid, Vec<SubStep>> = HashMap::new();
        for sub in self.sub_steps.find_all().await? {
            subs_by_step.entry(sub.step_id).or_default().push(sub);
        }
        Ok(rows
            .into_iter()
            .map(|row| {
                let sub_steps = subs_by_step
                    .remove(&row.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|s| mappings::sub_step_model(s, None, Vec::new()))
                    .collect();
                mappings::step_model(row, None, sub_steps)
            })
            .collect())
    }

    /// Overwrite the fields that are set on the incoming model. A blank
    /// description or zero duration counts as "not set".
    pub async fn update(&self, model: StepModel) -> Result<StepModel, DataError> {
        let mut entity = self
            .steps
            .find_by_id(model.id)
            .await?
            .ok_or_else(|| DataError::not_found(format!("step {}", model.id)))?;

        if !model.description.trim().is_empty() {
            entity.description = model.description;
        }
        if model.duration.num_seconds() > 0 {
            entity.duration_secs = model.duration.num_seconds();
        }

        self.steps.update(&entity).await?;
        self.get_by_id(entity.id).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DataError> {
        if !self.steps.exists(id).await? {
            return Err(DataError::not_found(format!("step {id}")));
        }
        self.steps.delete(id).await
    }
}
