//! # cookbook-data — generic data access for the CookBook API
//!
//! A small, entity-parameterized CRUD layer over an `sqlx::SqlitePool`.
//! Entity types describe their table and columns through the [`Entity`]
//! trait; [`Repository`] turns that description into the SQL for the
//! standard operations (add, find, update, delete, exists).
//!
//! Audit columns (`id`, `created_at`, `updated_at`) are owned by this
//! layer: identifiers are generated here, never accepted from callers,
//! and timestamps are stamped on insert and update.

pub mod entity;
pub mod error;
pub mod repository;

pub use entity::{Entity, EntityQuery};
pub use error::DataError;
pub use repository::Repository;

pub mod prelude {
    //! Re-exports of the most commonly used data types.
    pub use crate::{DataError, Entity, Repository};
}
