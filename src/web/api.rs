//! Defines the Axum API routes and handlers.

use crate::kinematics::{JointPositions, Kinematics, SolveContext, ThreeLinkArm};
use crate::web::models::{ArmInfoResponse, ForwardRequest, InverseRequest, InverseResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

/// The engine is stateless, so handlers share it without locking.
pub type AppState = Arc<dyn Kinematics>;

/// Helper to create a JSON error response with a message and status code
fn json_error(message: &str, status: StatusCode) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

fn rejection_response(rejection: JsonRejection) -> Response {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    json_error(&rejection.body_text(), rejection.status())
}

/// Creates the Axum router with all the API endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/forward", post(forward_handler))
        .route("/inverse", post(inverse_handler))
        .route("/arm", get(arm_info))
        .with_state(state)
}

/// Router backed by the default arm geometry.
pub fn app() -> Router {
    create_router(Arc::new(ThreeLinkArm::default()))
}

/// Handler to compute joint positions from joint angles.
async fn forward_handler(
    State(arm): State<AppState>,
    payload: Result<Json<ForwardRequest>, JsonRejection>,
) -> Result<Json<JointPositions>, Response> {
    let Json(request) = payload.map_err(rejection_response)?;
    Ok(Json(arm.forward(request.angles)))
}

/// Handler to solve joint angles for a target, threading the caller's history.
async fn inverse_handler(
    State(arm): State<AppState>,
    payload: Result<Json<InverseRequest>, JsonRejection>,
) -> Result<Json<InverseResponse>, Response> {
    let Json(request) = payload.map_err(rejection_response)?;
    let context = SolveContext {
        old_angles: request.old_angles.unwrap_or_default(),
        old_target: request.old_target,
    };
    let solution = arm.inverse(request.target, &context);
    if solution.blocked {
        tracing::debug!("Inverse request for {:?} blocked", request.target);
    }
    Ok(Json(InverseResponse { angles: solution.angles, blocked: solution.blocked }))
}

/// Handler to describe the arm geometry.
async fn arm_info(State(arm): State<AppState>) -> Json<ArmInfoResponse> {
    Json(ArmInfoResponse {
        link_length: arm.link_length(),
        max_reach: arm.max_reach(),
        angle_tolerance: arm.angle_tolerance(),
    })
}
