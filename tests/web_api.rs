//! Integration tests for the kinematics HTTP endpoints

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt; // for .collect().await
use planar_arm::web::api::{app, create_router};
use planar_arm::ThreeLinkArm;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn as_f64_vec(value: &Value) -> Vec<f64> {
    value.as_array().unwrap().iter().map(|v| v.as_f64().unwrap()).collect()
}

#[tokio::test]
async fn test_forward_straight_arm() {
    let response = app()
        .oneshot(post_json("/forward", json!({ "angles": [0.0, 0.0, 0.0] })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(as_f64_vec(&json["joint1"]), vec![100.0, 0.0]);
    assert_eq!(as_f64_vec(&json["joint2"]), vec![200.0, 0.0]);
    assert_eq!(as_f64_vec(&json["end_effector"]), vec![300.0, 0.0]);
    assert_eq!(as_f64_vec(&json["angles"]), vec![0.0, 0.0, 0.0]);
}

#[tokio::test]
async fn test_inverse_defaults_hysteresis() {
    let response = app()
        .oneshot(post_json("/inverse", json!({ "target": [300.0, 0.0] })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(as_f64_vec(&json["angles"]), vec![0.0, 0.0, 0.0]);
    assert_eq!(json["blocked"], false);
}

#[tokio::test]
async fn test_inverse_blocked_returns_old_angles() {
    let payload = json!({
        "target": [400.0, -80.0],
        "old_angles": [-11.306, 0.0, 0.0],
        "old_target": [250.0, -50.0]
    });
    let response = app().oneshot(post_json("/inverse", payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(as_f64_vec(&json["angles"]), vec![-11.31, 0.0, 0.0]);
    assert_eq!(json["blocked"], true);
}

#[tokio::test]
async fn test_inverse_permitted_move() {
    let payload = json!({
        "target": [260.0, -60.0],
        "old_angles": [-11.31, 0.0, 0.0],
        "old_target": [250.0, -50.0]
    });
    let response = app().oneshot(post_json("/inverse", payload)).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(as_f64_vec(&json["angles"]), vec![-46.47, 66.94, -33.47]);
    assert_eq!(json["blocked"], false);
}

#[tokio::test]
async fn test_forward_wrong_length_rejected() {
    let response = app()
        .oneshot(post_json("/forward", json!({ "angles": [1.0, 2.0] })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_inverse_non_numeric_rejected() {
    let response = app()
        .oneshot(post_json("/inverse", json!({ "target": ["a", 1.0] })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_missing_content_type_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/forward")
        .body(Body::from(json!({ "angles": [0.0, 0.0, 0.0] }).to_string()))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_arm_info_uses_configured_geometry() {
    let arm = ThreeLinkArm::new(50.0, 1.0).unwrap();
    let request = Request::builder().uri("/arm").body(Body::empty()).unwrap();
    let response = create_router(Arc::new(arm)).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["link_length"], 50.0);
    assert_eq!(json["max_reach"], 150.0);
    assert_eq!(json["angle_tolerance"], 1.0);
}
