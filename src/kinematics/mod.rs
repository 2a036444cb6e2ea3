//! Forward and inverse kinematics for a planar arm with three equal revolute links.
//!
//! The engine is a set of pure computations over value types. The only
//! state that survives between inverse solves is the caller's
//! [`SolveContext`], passed in explicitly on every call.

mod angles;
mod forward;
mod guard;
mod inverse;
mod types;

pub use angles::{approx_equal, normalize_degrees, round2};
pub use guard::{clamp_to_reach, is_forbidden_move, Quadrant};
pub use types::{InverseSolution, JointAngles, JointPositions, Point2, SolveContext};

use crate::config::ArmConfig;
use thiserror::Error;

/// Length of each of the three links.
pub const LINK_LENGTH: f64 = 100.0;
/// Radius of the reach disk.
pub const MAX_REACH: f64 = 3.0 * LINK_LENGTH;
/// How close (in degrees) elbow and wrist must be to zero to count as fully extended.
pub const ANGLE_TOLERANCE: f64 = 0.5;

#[derive(Debug, Error, PartialEq)]
pub enum KinematicsError {
    #[error("link length must be finite and > 0, got {0}")]
    InvalidLinkLength(f64),
    #[error("angle tolerance must be finite and >= 0, got {0}")]
    InvalidTolerance(f64),
}

/// Kinematics handler consumed by the HTTP layer and the interactive controller.
pub trait Kinematics: Send + Sync {
    /// Joint and end effector positions for the given angles.
    fn forward(&self, angles: JointAngles) -> JointPositions;

    /// Angles that place the end effector at `target`, subject to reach
    /// clamping and the full-extension move fence.
    fn inverse(&self, target: Point2, context: &SolveContext) -> InverseSolution;

    fn link_length(&self) -> f64;

    fn angle_tolerance(&self) -> f64;

    fn max_reach(&self) -> f64 {
        3.0 * self.link_length()
    }
}

/// Three links of equal length chained from a base at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreeLinkArm {
    link_length: f64,
    angle_tolerance: f64,
}

impl ThreeLinkArm {
    pub fn new(link_length: f64, angle_tolerance: f64) -> Result<Self, KinematicsError> {
        if !link_length.is_finite() || link_length <= 0.0 {
            return Err(KinematicsError::InvalidLinkLength(link_length));
        }
        if !angle_tolerance.is_finite() || angle_tolerance < 0.0 {
            return Err(KinematicsError::InvalidTolerance(angle_tolerance));
        }
        Ok(Self { link_length, angle_tolerance })
    }

    pub fn from_config(config: &ArmConfig) -> Result<Self, KinematicsError> {
        Self::new(config.link_length, config.angle_tolerance)
    }
}

impl Default for ThreeLinkArm {
    fn default() -> Self {
        Self { link_length: LINK_LENGTH, angle_tolerance: ANGLE_TOLERANCE }
    }
}

impl Kinematics for ThreeLinkArm {
    fn forward(&self, angles: JointAngles) -> JointPositions {
        self.solve_forward(angles)
    }

    fn inverse(&self, target: Point2, context: &SolveContext) -> InverseSolution {
        self.solve_inverse(target, context)
    }

    fn link_length(&self) -> f64 {
        self.link_length
    }

    fn angle_tolerance(&self) -> f64 {
        self.angle_tolerance
    }
}

/// Forward kinematics with the default arm geometry.
pub fn forward(angles: JointAngles) -> JointPositions {
    ThreeLinkArm::default().solve_forward(angles)
}

/// Inverse kinematics with the default arm geometry.
pub fn inverse(target: Point2, context: &SolveContext) -> InverseSolution {
    ThreeLinkArm::default().solve_inverse(target, context)
}
