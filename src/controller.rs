//! Keyboard-driven end effector control loop.
//!
//! Each key press nudges the end effector target by a fixed step and
//! re-solves the arm. The controller owns the session's [`SolveContext`]
//! history: current angles plus the end effector position they produce.

use std::io::{BufRead, Write};
use thiserror::Error;

use crate::kinematics::{JointAngles, JointPositions, Kinematics, Point2, SolveContext};

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid angle '{0}'")]
    InvalidAngle(String),
    #[error("Expected 3 angles, got {0}")]
    WrongAngleCount(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Target displacement for one key press.
    pub fn delta(self, step: f64) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, step),
            Direction::Down => (0.0, -step),
            Direction::Left => (-step, 0.0),
            Direction::Right => (step, 0.0),
        }
    }

    pub fn key(self) -> char {
        match self {
            Direction::Up => 'W',
            Direction::Down => 'S',
            Direction::Left => 'A',
            Direction::Right => 'D',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Parse a W/A/S/D/Q key, ignoring case and surrounding whitespace.
pub fn parse_command(input: &str) -> Option<Command> {
    match input.trim().to_lowercase().as_str() {
        "w" => Some(Command::Move(Direction::Up)),
        "s" => Some(Command::Move(Direction::Down)),
        "a" => Some(Command::Move(Direction::Left)),
        "d" => Some(Command::Move(Direction::Right)),
        "q" => Some(Command::Quit),
        _ => None,
    }
}

/// Parse comma-separated degrees such as `30, 45, 60`.
pub fn parse_angles(input: &str) -> Result<JointAngles, ControllerError> {
    let values = input
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ControllerError::InvalidAngle(part.to_string()))
        })
        .collect::<Result<Vec<f64>, _>>()?;
    match values.as_slice() {
        [t1, t2, t3] => Ok(JointAngles::new(*t1, *t2, *t3)),
        _ => Err(ControllerError::WrongAngleCount(values.len())),
    }
}

/// Outcome of a single key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveReport {
    pub direction: Direction,
    pub angles: JointAngles,
    pub end_effector: Point2,
    pub blocked: bool,
}

pub struct ArmController<K: Kinematics> {
    arm: K,
    step: f64,
    angles: JointAngles,
    position: Point2,
}

impl<K: Kinematics> ArmController<K> {
    pub fn new(arm: K, step: f64, initial_angles: JointAngles) -> Self {
        let position = arm.forward(initial_angles).end_effector;
        Self { arm, step, angles: initial_angles, position }
    }

    pub fn angles(&self) -> JointAngles {
        self.angles
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    pub fn state(&self) -> JointPositions {
        self.arm.forward(self.angles)
    }

    /// Move the target one step and adopt whatever the solver returns.
    ///
    /// The new position comes from forward kinematics on the returned
    /// angles, not from the requested target.
    pub fn apply(&mut self, direction: Direction) -> MoveReport {
        let (dx, dy) = direction.delta(self.step);
        let target = Point2::new(self.position.x + dx, self.position.y + dy);
        let context = SolveContext::new(self.angles, self.position);
        let solution = self.arm.inverse(target, &context);
        let end_effector = self.arm.forward(solution.angles).end_effector;

        tracing::debug!(
            "{} -> target ({:.2}, {:.2}), angles {:?}",
            direction.key(), target.x, target.y, solution.angles
        );

        self.angles = solution.angles;
        self.position = end_effector;
        MoveReport { direction, angles: solution.angles, end_effector, blocked: solution.blocked }
    }
}

fn fmt_point(p: Point2) -> String {
    format!("[{:.2}, {:.2}]", p.x, p.y)
}

fn fmt_angles(a: JointAngles) -> String {
    format!("[{:.2}, {:.2}, {:.2}]", a.theta1, a.theta2, a.theta3)
}

/// Read one trimmed line, `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, ControllerError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run an interactive session until `q` or end of input.
pub fn run<K, R, W>(arm: K, step: f64, mut input: R, mut output: W) -> Result<(), ControllerError>
where
    K: Kinematics,
    R: BufRead,
    W: Write,
{
    writeln!(output, "=== 3-Link Arm Controller ===")?;

    let initial = loop {
        write!(output, "Enter initial angles for joints (comma-separated degrees, e.g., 30, 45, 60): ")?;
        output.flush()?;
        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };
        match parse_angles(&line) {
            Ok(angles) => break angles,
            Err(e) => writeln!(output, "{}", e)?,
        }
    };

    let mut controller = ArmController::new(arm, step, initial);
    let state = controller.state();
    writeln!(output, "\nInitial configuration:")?;
    writeln!(output, "Joint 1 position: {}", fmt_point(state.joint1))?;
    writeln!(output, "Joint 2 position: {}", fmt_point(state.joint2))?;
    writeln!(output, "End Effector position: {}", fmt_point(state.end_effector))?;

    loop {
        write!(output, "Enter direction (W/A/S/D to move, Q to quit): ")?;
        output.flush()?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Move(direction)) => {
                let report = controller.apply(direction);
                writeln!(output, "\nCommand: {}", direction.key())?;
                if report.blocked {
                    writeln!(output, "Move blocked near arm limit")?;
                }
                writeln!(output, "New angles: {}", fmt_angles(report.angles))?;
                writeln!(output, "New end effector position: {}", fmt_point(report.end_effector))?;
            }
            None => writeln!(output, "Invalid input. Use W/A/S/D or Q.")?,
        }
    }

    writeln!(output, "Exiting controller.")?;
    tracing::info!("Controller session ended at angles {:?}", controller.angles());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::ThreeLinkArm;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("w"), Some(Command::Move(Direction::Up)));
        assert_eq!(parse_command(" D \n"), Some(Command::Move(Direction::Right)));
        assert_eq!(parse_command("Q"), Some(Command::Quit));
        assert_eq!(parse_command("x"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn test_parse_angles() {
        assert_eq!(parse_angles("30, 45, 60").unwrap(), JointAngles::new(30.0, 45.0, 60.0));
        assert_eq!(parse_angles("-1.5,0,2").unwrap(), JointAngles::new(-1.5, 0.0, 2.0));
        assert!(matches!(parse_angles("30, 45"), Err(ControllerError::WrongAngleCount(2))));
        assert!(matches!(parse_angles("30, x, 60"), Err(ControllerError::InvalidAngle(s)) if s == "x"));
        assert!(matches!(parse_angles("nan, 0, 0"), Err(ControllerError::InvalidAngle(_))));
    }

    #[test]
    fn test_initial_position_from_forward_kinematics() {
        let controller = ArmController::new(ThreeLinkArm::default(), 10.0, JointAngles::ZERO);
        assert!(controller.position().distance_to(Point2::new(300.0, 0.0)) < 1e-9);
    }

    #[test]
    fn test_apply_moves_end_effector_by_step() {
        let mut controller =
            ArmController::new(ThreeLinkArm::default(), 10.0, JointAngles::new(30.0, 45.0, 60.0));
        let start = controller.position();
        let report = controller.apply(Direction::Up);
        assert!(!report.blocked);
        assert!(report.end_effector.distance_to(Point2::new(start.x, start.y + 10.0)) < 0.1);
        assert_eq!(controller.angles(), report.angles);
        assert_eq!(controller.position(), report.end_effector);
    }

    #[test]
    fn test_apply_at_full_reach_stays_on_boundary() {
        let mut controller = ArmController::new(ThreeLinkArm::default(), 10.0, JointAngles::ZERO);
        let report = controller.apply(Direction::Right);
        assert_eq!(report.angles, JointAngles::ZERO);
        assert!((report.end_effector.norm() - 300.0).abs() < 1e-6);
    }
}
