//! HTTP surface: one router per entity, each exposing
//! POST `/`, GET `/`, GET `/{id}`, PATCH `/{id}`, DELETE `/{id}`.

pub mod health;
pub mod ingredients;
pub mod recipes;
pub mod steps;
pub mod sub_steps;
