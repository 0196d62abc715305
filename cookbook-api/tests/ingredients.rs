mod common;

use axum::http::{Method, StatusCode};
use common::{create_ingredient, create_recipe, create_step, create_sub_step, send, test_app};
use serde_json::json;
use uuid::Uuid;

async fn seeded_sub_step(app: &axum::Router) -> String {
    let recipe_id = create_recipe(app).await;
    let step_id = create_step(app, &recipe_id, "00:10:00").await;
    create_sub_step(app, &step_id).await
}

#[tokio::test]
async fn create_under_missing_sub_step_is_404() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/ingredients",
        Some(json!({
            "subStepId": Uuid::new_v4(),
            "name": "Salt",
            "details": "Coarse sea salt",
            "amount": 5,
            "amountType": "g"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_renders_amount_and_get_returns_details() {
    let app = test_app().await;
    let sub_step_id = seeded_sub_step(&app).await;

    let (status, overview) = send(
        &app,
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
    assert_eq!(overview["amount"], "5 g");
    let id = overview["id"].as_str().unwrap();

    let (status, details) = send(&app, Method::GET, &format!("/ingredients/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["name"], "Salt");
    assert_eq!(details["details"], "Coarse sea salt");
    assert_eq!(details["amount"], "5");
    assert_eq!(details["amountType"], "g");
    assert_eq!(details["subStep"]["description"], "Peel the carrots first");
}

#[tokio::test]
async fn create_with_invalid_fields_is_rejected() {
    let app = test_app().await;
    let sub_step_id = seeded_sub_step(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/ingredients",
        Some(json!({
            "subStepId": sub_step_id,
            "name": "S",
            "details": "ok",
            "amount": 0,
            "amountType": "g"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn patch_amount_type_updates_only_that_field() {
    let app = test_app().await;
    let sub_step_id = seeded_sub_step(&app).await;
    let id = create_ingredient(&app, &sub_step_id).await;

    let (status, overview) = send(
        &app,
        Method::PATCH,
        &format!("/ingredients/{id}"),
        Some(json!([{ "op": "replace", "path": "/amountType", "value": "kg" }])),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(overview["amount"], "5 kg");
    assert_eq!(overview["name"], "Salt");
}

#[tokio::test]
async fn patch_outside_allow_list_is_400() {
    let app = test_app().await;
    let sub_step_id = seeded_sub_step(&app).await;
    let id = create_ingredient(&app, &sub_step_id).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/ingredients/{id}"),
        Some(json!([{ "op": "replace", "path": "/subStepId", "value": "x" }])),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Operation not permitted.");
}

#[tokio::test]
async fn delete_twice_is_404() {
    let app = test_app().await;
    let sub_step_id = seeded_sub_step(&app).await;
    let id = create_ingredient(&app, &sub_step_id).await;

    let (status, _) = send(&app, Method::DELETE, &format!("/ingredients/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::DELETE, &format!("/ingredients/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
