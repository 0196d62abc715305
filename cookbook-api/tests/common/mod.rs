#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use cookbook_api::app;
use cookbook_api::state::AppState;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

/// A fresh application over an in-memory database with migrations applied.
pub async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    app::router(AppState::new(pool))
}

/// Drive one request through the router, returning the status and the JSON
/// body (`Null` for empty bodies).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn create_recipe(app: &Router) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/recipes",
        Some(json!({
            "title": "Crispy Soup",
            "description": "Vegetable soup with fresh herbs",
            "difficulty": "Easy"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

pub async fn create_step(app: &Router, recipe_id: &str, duration: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/steps",
        Some(json!({
            "description": "Chop all the vegetables",
            "duration": duration,
            "recipeId": recipe_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

pub async fn create_sub_step(app: &Router, step_id: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/substeps",
        Some(json!({
            "description": "Peel the carrots first",
            "duration": "00:05:00",
            "stepId": step_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

pub async fn create_ingredient(app: &Router, sub_step_id: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/ingredients",
        Some(json!({
            "subStepId": sub_step_id,
            "name": "Salt",
            "details": "Coarse sea salt",
            "amount": 5,
            "amountType": "g"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}
