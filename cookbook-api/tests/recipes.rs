mod common;

use axum::http::{Method, StatusCode};
use common::{create_recipe, create_step, send, test_app};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn health_endpoint_is_up() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "UP");
}

#[tokio::test]
async fn create_returns_201_and_get_round_trips() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
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
    let id = body["id"].as_str().unwrap();
    assert_eq!(body["noOfSteps"], 0);
    assert_eq!(body["duration"], "00:00:00");

    let (status, details) = send(&app, Method::GET, &format!("/recipes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["title"], "Crispy Soup");
    assert_eq!(details["description"], "Vegetable soup with fresh herbs");
    assert_eq!(details["difficulty"], "Easy");
    assert_eq!(details["steps"].as_array().unwrap().len(), 0);
    assert!(details["createdAt"].is_string());
}

#[tokio::test]
async fn create_with_invalid_fields_is_rejected() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/recipes",
        Some(json!({
            "title": "Pho",
            "description": "too short",
            "difficulty": "Easy"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert!(!body["details"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_absent_id_is_404() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/recipes/{}", Uuid::new_v4()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_summarizes_steps() {
    let app = test_app().await;
    let id = create_recipe(&app).await;
    create_step(&app, &id, "00:10:00").await;
    create_step(&app, &id, "00:20:00").await;

    let (status, body) = send(&app, Method::GET, "/recipes", None).await;

    assert_eq!(status, StatusCode::OK);
    let overviews = body.as_array().unwrap();
    assert_eq!(overviews.len(), 1);
    assert_eq!(overviews[0]["noOfSteps"], 2);
    assert_eq!(overviews[0]["duration"], "00:30:00");
}

#[tokio::test]
async fn patch_replace_updates_exactly_that_field() {
    let app = test_app().await;
    let id = create_recipe(&app).await;

    let (status, overview) = send(
        &app,
        Method::PATCH,
        &format!("/recipes/{id}"),
        Some(json!([{ "op": "replace", "path": "/difficulty", "value": "Medium" }])),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(overview["difficulty"], "Medium");

    let (_, details) = send(&app, Method::GET, &format!("/recipes/{id}"), None).await;
    assert_eq!(details["difficulty"], "Medium");
    assert_eq!(details["title"], "Crispy Soup");
    assert_eq!(details["description"], "Vegetable soup with fresh herbs");
}

#[tokio::test]
async fn patch_outside_allow_list_is_400() {
    let app = test_app().await;
    let id = create_recipe(&app).await;

    for ops in [
        json!([{ "op": "remove", "path": "/title" }]),
        json!([{ "op": "replace", "path": "/id", "value": "x" }]),
        json!([
            { "op": "replace", "path": "/title", "value": "Creamy Soup" },
            { "op": "add", "path": "/title", "value": "Creamy Soup" }
        ]),
    ] {
        let (status, body) = send(&app, Method::PATCH, &format!("/recipes/{id}"), Some(ops)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Operation not permitted.");
    }
}

#[tokio::test]
async fn patch_absent_recipe_is_404() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/recipes/{}", Uuid::new_v4()),
        Some(json!([{ "op": "replace", "path": "/title", "value": "Creamy Soup" }])),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_field_in_patch_leaves_stored_value_untouched() {
    // An empty string is indistinguishable from "not set" in the update
    // path, so the stored description survives.
    let app = test_app().await;
    let id = create_recipe(&app).await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/recipes/{id}"),
        Some(json!([{ "op": "replace", "path": "/description", "value": "" }])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, details) = send(&app, Method::GET, &format!("/recipes/{id}"), None).await;
    assert_eq!(details["description"], "Vegetable soup with fresh herbs");
}

#[tokio::test]
async fn delete_twice_is_404() {
    let app = test_app().await;
    let id = create_recipe(&app).await;

    let (status, _) = send(&app, Method::DELETE, &format!("/recipes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::DELETE, &format!("/recipes/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
