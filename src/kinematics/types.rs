// src/kinematics/types.rs - Value types shared by forward and inverse kinematics
use serde::{Deserialize, Serialize};

/// A point in the arm's plane, base at the origin.
///
/// Serialized as a `[x, y]` array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the arm base.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance_to(&self, other: Point2) -> f64 {
        Point2::new(self.x - other.x, self.y - other.y).norm()
    }
}

impl From<[f64; 2]> for Point2 {
    fn from(p: [f64; 2]) -> Self {
        Self { x: p[0], y: p[1] }
    }
}

impl From<Point2> for [f64; 2] {
    fn from(p: Point2) -> Self {
        [p.x, p.y]
    }
}

/// Joint angles in degrees. Each angle is relative to the previous link.
///
/// Serialized as a `[theta1, theta2, theta3]` array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct JointAngles {
    /// Base joint.
    pub theta1: f64,
    /// Elbow joint.
    pub theta2: f64,
    /// Wrist joint.
    pub theta3: f64,
}

impl JointAngles {
    pub const ZERO: JointAngles = JointAngles { theta1: 0.0, theta2: 0.0, theta3: 0.0 };

    pub fn new(theta1: f64, theta2: f64, theta3: f64) -> Self {
        Self { theta1, theta2, theta3 }
    }

    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.theta1), f(self.theta2), f(self.theta3))
    }
}

impl From<[f64; 3]> for JointAngles {
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<JointAngles> for [f64; 3] {
    fn from(a: JointAngles) -> Self {
        [a.theta1, a.theta2, a.theta3]
    }
}

/// Cartesian positions derived from a set of joint angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointPositions {
    pub joint1: Point2,
    pub joint2: Point2,
    pub end_effector: Point2,
    /// The angles these positions were computed from, echoed unchanged.
    pub angles: JointAngles,
}

/// Hysteresis input for inverse kinematics, owned by the caller.
///
/// The engine only reads it. Callers update their copy after each solve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolveContext {
    pub old_angles: JointAngles,
    /// `None` means "same as the current target", which never trips the guard.
    pub old_target: Option<Point2>,
}

impl SolveContext {
    pub fn new(old_angles: JointAngles, old_target: Point2) -> Self {
        Self { old_angles, old_target: Some(old_target) }
    }
}

/// Result of an inverse kinematics solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InverseSolution {
    /// Joint angles rounded to two decimals.
    pub angles: JointAngles,
    /// Set when the move was rejected near full extension; `angles` are then the previous ones.
    pub blocked: bool,
}
