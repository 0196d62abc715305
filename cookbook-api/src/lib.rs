//! # cookbook-api — recipe-management CRUD service
//!
//! Clients create, read, patch, and delete Recipes composed of Steps,
//! SubSteps, and Ingredients. Every endpoint is a validate → map →
//! repository-call → map-back round trip over the generic data layer in
//! `cookbook-data`.
//!
//! Layers, outside in:
//!
//! - [`controllers`] — axum routers, one per entity, plus the patch
//!   allow-list checks
//! - [`services`] — per-entity orchestration: parent existence checks,
//!   repository calls, not-found translation
//! - [`models`] — wire models (create/overview/details) and the internal
//!   domain models
//! - [`entities`] — persistence rows implementing `cookbook_data::Entity`
//! - [`mappings`] — pure field copiers between the three model layers

pub mod app;
pub mod config;
pub mod controllers;
pub mod duration;
pub mod entities;
pub mod error;
pub mod mappings;
pub mod models;
pub mod services;
pub mod state;
pub mod validation;

/// Initialize the tracing subscriber: env-filter driven, `info` by default.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
