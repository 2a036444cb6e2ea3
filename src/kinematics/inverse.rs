// src/kinematics/inverse.rs - Closed-form solve for the end effector target
use super::ThreeLinkArm;
use super::angles::{approx_equal, normalize_degrees, round2};
use super::guard::{clamp_to_reach, is_forbidden_move};
use super::types::{InverseSolution, JointAngles, Point2, SolveContext};

impl ThreeLinkArm {
    /// Solve for the elbow-up configuration reaching `target`.
    ///
    /// The third link is assumed to point along the base-to-target ray, which
    /// reduces the problem to a two-link solve for the wrist point one link
    /// length short of the target. Targets outside the reach disk are projected
    /// onto its boundary first.
    ///
    /// Near full extension a move that keeps pushing outward along the
    /// target's quadrant diagonal is refused and the previous angles from
    /// `context` come back with `blocked` set.
    pub fn solve_inverse(&self, target: Point2, context: &SolveContext) -> InverseSolution {
        let l = self.link_length;
        let goal = clamp_to_reach(target, 3.0 * l);
        if goal != target {
            tracing::debug!(
                "Target ({:.2}, {:.2}) out of reach, clamped to ({:.2}, {:.2})",
                target.x, target.y, goal.x, goal.y
            );
        }

        let dist = goal.norm();
        let wrist = if dist == 0.0 {
            goal
        } else {
            Point2::new(goal.x - l * goal.x / dist, goal.y - l * goal.y / dist)
        };

        let r = wrist.norm();
        let cos_angle2 = ((r * r - 2.0 * l * l) / (2.0 * l * l)).clamp(-1.0, 1.0);
        let angle2 = cos_angle2.acos();

        let k1 = l + l * angle2.cos();
        let k2 = l * angle2.sin();
        let angle1 = wrist.y.atan2(wrist.x) - k2.atan2(k1);
        let angle3 = (goal.y - wrist.y).atan2(goal.x - wrist.x) - angle1 - angle2;

        let solved = JointAngles::new(angle1, angle2, angle3).map(|a| normalize_degrees(a.to_degrees()));

        if approx_equal(solved.theta2, 0.0, self.angle_tolerance)
            && approx_equal(solved.theta3, 0.0, self.angle_tolerance)
        {
            let previous = context.old_target.unwrap_or(target);
            if is_forbidden_move(goal, previous) {
                tracing::info!(
                    "Move to ({:.2}, {:.2}) blocked at full extension, keeping previous angles",
                    goal.x, goal.y
                );
                return InverseSolution { angles: context.old_angles.map(round2), blocked: true };
            }
        }

        InverseSolution { angles: solved.map(round_angle), blocked: false }
    }
}

/// Round to two decimals without letting -179.995 collapse onto -180.
fn round_angle(deg: f64) -> f64 {
    let rounded = round2(deg);
    if rounded <= -180.0 { rounded + 360.0 } else { rounded }
}
