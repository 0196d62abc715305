//! Persistence rows, one per table, implementing [`cookbook_data::Entity`].

mod ingredient;
mod recipe;
mod step;
mod sub_step;

pub use ingredient::Ingredient;
pub use recipe::Recipe;
pub use step::Step;
pub use sub_step::SubStep;
