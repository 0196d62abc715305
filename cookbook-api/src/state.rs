use sqlx::SqlitePool;

use crate::services::{IngredientsService, RecipesService, StepsService, SubStepsService};

/// Shared application state: one service per entity, all over the same pool.
#[derive(Clone)]
pub struct AppState {
    pub recipes: RecipesService,
    pub steps: StepsService,
    pub sub_steps: SubStepsService,
    pub ingredients: IngredientsService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            recipes: RecipesService::new(pool.clone()),
            steps: StepsService::new(pool.clone()),
            sub_steps: SubStepsService::new(pool.clone()),
            ingredients: IngredientsService::new(pool),
        }
    }
}
