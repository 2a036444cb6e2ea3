// planar-arm: kinematics engine for a planar three-link arm, plus its HTTP and keyboard front ends

pub mod config;
pub mod controller;
pub mod kinematics;
pub mod web;

pub use config::{load_config, Config, ConfigError};
pub use kinematics::{
    forward, inverse, InverseSolution, JointAngles, JointPositions, Kinematics, KinematicsError,
    Point2, SolveContext, ThreeLinkArm,
};
