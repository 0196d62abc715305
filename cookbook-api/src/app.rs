use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::controllers;
use crate::state::AppState;

/// Assemble the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(controllers::health::router())
        .nest("/recipes", controllers::recipes::router())
        .nest("/steps", controllers::steps::router())
        .nest("/substeps", controllers::sub_steps::router())
        .nest("/ingredients", controllers::ingredients::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
