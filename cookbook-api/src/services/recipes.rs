use std::collections::HashMap;

use cookbook_data::{DataError, Repository};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::entities::{Recipe, Step, SubStep};
use crate::mappings;
use crate::models::domain::RecipeModel;

#[derive(Clone)]
pub struct RecipesService {
    recipes: Repository<Recipe>,
    steps: Repository<Step>,
    sub_steps: Repository<SubStep>,
}

impl RecipesService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            recipes: Repository::new(pool.clone()),
            steps: Repository::new(pool.clone()),
            sub_steps: Repository::new(pool),
        }
    }

    pub async fn add(&self, model: RecipeModel) -> Result<RecipeModel, DataError> {
        let stored = self.recipes.add(&mappings::recipe_record(&model)).await?;
        Ok(mappings::recipe_model(stored, Vec::new()))
    }

    /// Load a recipe with its steps and their sub-steps.
    pub async fn get_by_id(&self, id: Uuid) -> Result<RecipeModel, DataError> {
        let row = self
            .recipes
            .find_by_id(id)
            .await?
            .ok_or_else(|| DataError::not_found(format!("recipe {id}")))?;

        let mut steps = Vec::new();
        for step_row in self.steps.find_where("recipe_id", id).await? {
            let sub_steps = self
                .sub_steps
                .find_where("step_id", step_row.id)
                .await?
                .into_iter()
                .map(|s| mappings::sub_step_model(s, None, Vec::new()))
                .collect();
            steps.push(mappings::step_model(step_row, None, sub_steps));
        }
        Ok(mappings::recipe_model(row, steps))
    }

    /// All recipes with the steps the overview projection needs. Steps are
    /// fetched in one query and grouped in memory.
    pub async fn get_all(&self) -> Result<Vec<RecipeModel>, DataError> {
        let rows = self.recipes.find_all().await?;
        let mut steps_by_recipe: HashMap<Uuid, Vec<Step>> = HashMap::new();
        for step in self.steps.find_all().await? {
            steps_by_recipe.entry(step.recipe_id).or_default().push(step);
        }
        Ok(rows
            .into_iter()
            .map(|row| {
                let steps = steps_by_recipe
                    .remove(&row.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|s| mappings::step_model(s, None, Vec::new()))
                    .collect();
                mappings::recipe_model(row, steps)
            })
            .collect())
    }

    /// Overwrite the fields that are set on the incoming model, then
    /// re-fetch. A blank string counts as "not set" and is left untouched,
    /// so a field cannot be cleared to empty through this path.
    pub async fn update(&self, model: RecipeModel) -> Result<RecipeModel, DataError> {
        let mut entity = self
            .recipes
            .find_by_id(model.id)
            .await?
            .ok_or_else(|| DataError::not_found(format!("recipe {}", model.id)))?;

        if !model.title.trim().is_empty() {
            entity.title = model.title;
        }
        if !model.description.trim().is_empty() {
            entity.description = model.description;
        }
        if !model.difficulty.trim().is_empty() {
            entity.difficulty = model.difficulty;
        }

        self.recipes.update(&entity).await?;
        self.get_by_id(entity.id).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DataError> {
        if !self.recipes.exists(id).await? {
            return Err(DataError::not_found(format!("recipe {id}")));
        }
        self.recipes.delete(id).await
    }
}
