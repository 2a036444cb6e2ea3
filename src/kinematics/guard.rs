// src/kinematics/guard.rs - Reach clamping and the near-singularity move fence
use super::types::Point2;

/// Strict quadrant of a point. Points on an axis have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    pub fn of(p: Point2) -> Option<Quadrant> {
        match (p.x > 0.0, p.x < 0.0, p.y > 0.0, p.y < 0.0) {
            (true, _, true, _) => Some(Quadrant::First),
            (_, true, true, _) => Some(Quadrant::Second),
            (_, true, _, true) => Some(Quadrant::Third),
            (true, _, _, true) => Some(Quadrant::Fourth),
            _ => None,
        }
    }

    /// Whether a displacement of `(dx, dy)` keeps pushing outward along this quadrant's diagonal.
    pub fn forbids(self, dx: f64, dy: f64) -> bool {
        match self {
            Quadrant::First => dx > 0.0 && dy > 0.0,
            Quadrant::Second => dx < 0.0 && dy > 0.0,
            Quadrant::Third => dx < 0.0 && dy < 0.0,
            Quadrant::Fourth => dx > 0.0 && dy < 0.0,
        }
    }
}

/// Decide whether moving from `previous` to `target` must be rejected.
///
/// Only meaningful once the solved arm is at full extension; the caller
/// checks that first.
pub fn is_forbidden_move(target: Point2, previous: Point2) -> bool {
    match Quadrant::of(target) {
        Some(quadrant) => quadrant.forbids(target.x - previous.x, target.y - previous.y),
        None => false,
    }
}

/// Project `p` radially onto the reach circle when it lies outside it.
pub fn clamp_to_reach(p: Point2, max_reach: f64) -> Point2 {
    let dist = p.norm();
    if dist > max_reach {
        Point2::new(p.x * max_reach / dist, p.y * max_reach / dist)
    } else {
        p
    }
}
