//! Per-entity services. All four share one shape: check parent existence,
//! call the repository, translate absent rows into `DataError::NotFound`.

mod ingredients;
mod recipes;
mod steps;
mod sub_steps;

pub use ingredients::IngredientsService;
pub use recipes::RecipesService;
pub use steps::StepsService;
pub use sub_steps::SubStepsService;
