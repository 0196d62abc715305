//! Pure field copiers between the three model layers.
//!
//! Two passes: wire create models → domain models (plus duration parsing),
//! and domain models ↔ persistence rows. Overview projections derive their
//! summary fields (child counts, duration sums) from the relations loaded
//! onto the domain model.

use chrono::Duration;

use crate::duration::{format_duration, parse_duration, InvalidDuration};
use crate::entities;
use crate::models::domain::{IngredientModel, RecipeModel, StepModel, SubStepModel};
use crate::models::ingredient::{IngredientCreate, IngredientDetails, IngredientOverview};
use crate::models::recipe::{RecipeCreate, RecipeDetails, RecipeOverview};
use crate::models::step::{StepCreate, StepDetails, StepOverview};
use crate::models::sub_step::{SubStepCreate, SubStepDetails, SubStepOverview};

// ── Persistence rows → domain ───────────────────────────────────────────

pub fn recipe_model(row: entities::Recipe, steps: Vec<StepModel>) -> RecipeModel {
    RecipeModel {
        id: row.id,
        title: row.title,
        description: row.description,
        difficulty: row.difficulty,
        created_at: row.created_at,
        updated_at: row.updated_at,
        steps,
    }
}

pub fn step_model(
    row: entities::Step,
    recipe: Option<RecipeModel>,
    sub_steps: Vec<SubStepModel>,
) -> StepModel {
    StepModel {
        id: row.id,
        description: row.description,
        duration: Duration::seconds(row.duration_secs),
        recipe_id: row.recipe_id,
        created_at: row.created_at,
        updated_at: row.updated_at,
        recipe,
        sub_steps,
    }
}

pub fn sub_step_model(
    row: entities::SubStep,
    step: Option<StepModel>,
    ingredients: Vec<IngredientModel>,
) -> SubStepModel {
    SubStepModel {
        id: row.id,
        description: row.description,
        duration: Duration::seconds(row.duration_secs),
        step_id: row.step_id,
        created_at: row.created_at,
        updated_at: row.updated_at,
        step,
        ingredients,
    }
}

pub fn ingredient_model(
    row: entities::Ingredient,
    sub_step: Option<SubStepModel>,
) -> IngredientModel {
    IngredientModel {
        id: row.id,
        name: row.name,
        details: row.details,
        amount: row.amount,
        amount_type: row.amount_type,
        sub_step_id: row.sub_step_id,
        created_at: row.created_at,
        updated_at: row.updated_at,
        sub_step,
    }
}

// ── Domain → persistence rows ───────────────────────────────────────────

pub fn recipe_record(model: &RecipeModel) -> entities::Recipe {
    entities::Recipe {
        id: model.id,
        title: model.title.clone(),
        description: model.description.clone(),
        difficulty: model.difficulty.clone(),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

pub fn step_record(model: &StepModel) -> entities::Step {
    entities::Step {
        id: model.id,
        description: model.description.clone(),
        duration_secs: model.duration.num_seconds(),
        recipe_id: model.recipe_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

pub fn sub_step_record(model: &SubStepModel) -> entities::SubStep {
    entities::SubStep {
        id: model.id,
        description: model.description.clone(),
        duration_secs: model.duration.num_seconds(),
        step_id: model.step_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

pub fn ingredient_record(model: &IngredientModel) -> entities::Ingredient {
    entities::Ingredient {
        id: model.id,
        name: model.name.clone(),
        details: model.details.clone(),
        amount: model.amount.clone(),
        amount_type: model.amount_type.clone(),
        sub_step_id: model.sub_step_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Wire create models → domain ─────────────────────────────────────────

pub fn recipe_from_create(create: RecipeCreate) -> RecipeModel {
    let mut model = RecipeModel::sparse(uuid::Uuid::nil());
    model.title = create.title;
    model.description = create.description;
    model.difficulty = create.difficulty;
    model
}

pub fn step_from_create(create: StepCreate) -> Result<StepModel, InvalidDuration> {
    let mut model = StepModel::sparse(uuid::Uuid::nil());
    model.description = create.description;
    model.duration = parse_duration(&create.duration)?;
    model.recipe_id = create.recipe_id;
    Ok(model)
}

pub fn sub_step_from_create(create: SubStepCreate) -> Result<SubStepModel, InvalidDuration> {
    let mut model = SubStepModel::sparse(uuid::Uuid::nil());
    model.description = create.description;
    model.duration = parse_duration(&create.duration)?;
    model.step_id = create.step_id;
    Ok(model)
}

pub fn ingredient_from_create(create: IngredientCreate) -> IngredientModel {
    let mut model = IngredientModel::sparse(uuid::Uuid::nil());
    model.name = create.name;
    model.details = create.details;
    model.amount = create.amount.to_string();
    model.amount_type = create.amount_type;
    model.sub_step_id = create.sub_step_id;
    model
}

// ── Domain → wire projections ───────────────────────────────────────────

pub fn recipe_overview(model: &RecipeModel) -> RecipeOverview {
    let total: i64 = model.steps.iter().map(|s| s.duration.num_seconds()).sum();
    RecipeOverview {
        id: model.id,
        title: model.title.clone(),
        difficulty: model.difficulty.clone(),
        no_of_steps: model.steps.len(),
        duration: format_duration(Duration::seconds(total)),
    }
}

pub fn recipe_details(model: RecipeModel) -> RecipeDetails {
    RecipeDetails {
        id: model.id,
        title: model.title,
        description: model.description,
        difficulty: model.difficulty,
        created_at: model.created_at,
        updated_at: model.updated_at,
        steps: model.steps.iter().map(step_overview).collect(),
    }
}

pub fn step_overview(model: &StepModel) -> StepOverview {
    StepOverview {
        id: model.id,
        description: model.description.clone(),
        duration: format_duration(model.duration),
        no_of_sub_steps: model.sub_steps.len(),
    }
}

pub fn step_details(model: StepModel) -> StepDetails {
    StepDetails {
        id: model.id,
        description: model.description,
        duration: format_duration(model.duration),
        created_at: model.created_at,
        updated_at: model.updated_at,
        recipe: model.recipe.as_ref().map(recipe_overview),
        sub_steps: model.sub_steps.iter().map(sub_step_overview).collect(),
    }
}

pub fn sub_step_overview(model: &SubStepModel) -> SubStepOverview {
    SubStepOverview {
        id: model.id,
        description: model.description.clone(),
        duration: format_duration(model.duration),
        no_of_ingredients: model.ingredients.len(),
    }
}

pub fn sub_step_details(model: SubStepModel) -> SubStepDetails {
    SubStepDetails {
        id: model.id,
        description: model.description,
        duration: format_duration(model.duration),
        created_at: model.created_at,
        updated_at: model.updated_at,
        step: model.step.as_ref().map(step_overview),
        ingredients: model.ingredients.iter().map(ingredient_overview).collect(),
    }
}

pub fn ingredient_overview(model: &IngredientModel) -> IngredientOverview {
    IngredientOverview {
        id: model.id,
        name: model.name.clone(),
        amount: format!("{} {}", model.amount, model.amount_type),
    }
}

pub fn ingredient_details(model: IngredientModel) -> IngredientDetails {
    IngredientDetails {
        id: model.id,
        name: model.name,
        details: model.details,
        amount: model.amount,
        amount_type: model.amount_type,
        created_at: model.created_at,
        updated_at: model.updated_at,
        sub_step: model.sub_step.as_ref().map(sub_step_overview),
    }
}
