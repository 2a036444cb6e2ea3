// src/kinematics/forward.rs - Joint angles to Cartesian positions
use super::ThreeLinkArm;
use super::types::{JointAngles, JointPositions, Point2};

impl ThreeLinkArm {
    /// Chain the three links from the origin. Each link's orientation is the
    /// running sum of the angles before it, so inputs need no canonical range.
    pub fn solve_forward(&self, angles: JointAngles) -> JointPositions {
        let l = self.link_length;
        let o1 = angles.theta1.to_radians();
        let o2 = o1 + angles.theta2.to_radians();
        let o3 = o2 + angles.theta3.to_radians();

        let joint1 = Point2::new(l * o1.cos(), l * o1.sin());
        let joint2 = Point2::new(joint1.x + l * o2.cos(), joint1.y + l * o2.sin());
        let end_effector = Point2::new(joint2.x + l * o3.cos(), joint2.y + l * o3.sin());

        JointPositions { joint1, joint2, end_effector, angles }
    }
}
