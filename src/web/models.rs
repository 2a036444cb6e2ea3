//! Contains the data models for API requests and responses.

use crate::kinematics::{JointAngles, Point2};
use serde::{Deserialize, Serialize};

/// Request body for `POST /forward`.
#[derive(Debug, Deserialize)]
pub struct ForwardRequest {
    pub angles: JointAngles,
}

/// Request body for `POST /inverse`.
///
/// Omitted hysteresis fields fall back to zero angles and the target itself.
#[derive(Debug, Deserialize)]
pub struct InverseRequest {
    pub target: Point2,
    #[serde(default)]
    pub old_angles: Option<JointAngles>,
    #[serde(default)]
    pub old_target: Option<Point2>,
}

/// Response body for `POST /inverse`.
#[derive(Debug, Serialize)]
pub struct InverseResponse {
    pub angles: JointAngles,
    pub blocked: bool,
}

/// Response body for `GET /arm`.
#[derive(Debug, Serialize)]
pub struct ArmInfoResponse {
    pub link_length: f64,
    pub max_reach: f64,
    pub angle_tolerance: f64,
}
