// Integration tests for the interactive controller session

use planar_arm::controller::run;
use planar_arm::ThreeLinkArm;
use std::io::Cursor;

fn session(input: &str) -> String {
    let mut output = Vec::new();
    run(ThreeLinkArm::default(), 10.0, Cursor::new(input.as_bytes()), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_initial_configuration_printed() {
    let out = session("0, 0, 0\nq\n");
    assert!(out.contains("Joint 1 position: [100.00, 0.00]"));
    assert!(out.contains("Joint 2 position: [200.00, 0.00]"));
    assert!(out.contains("End Effector position: [300.00, 0.00]"));
    assert!(out.ends_with("Exiting controller.\n"));
}

#[test]
fn test_bad_angles_reprompt() {
    let out = session("10, 20\n0, 0, 0\nq\n");
    assert!(out.contains("Expected 3 angles, got 2"));
    assert!(out.contains("End Effector position: [300.00, 0.00]"));
}

#[test]
fn test_invalid_key_reported() {
    let out = session("0, 0, 0\nx\nq\n");
    assert!(out.contains("Invalid input. Use W/A/S/D or Q."));
}

#[test]
fn test_move_left_from_full_extension() {
    let out = session("0, 0, 0\na\nq\n");
    assert!(out.contains("Command: A"));
    assert!(out.contains("New angles: [-18.19, 36.39, -18.19]"));
    assert!(out.contains("New end effector position: [290.00, "));
    assert!(!out.contains("Move blocked"));
}

#[test]
fn test_end_of_input_ends_session() {
    let out = session("0, 0, 0\nw\n");
    assert!(out.contains("Command: W"));
    assert!(out.ends_with("Exiting controller.\n"));
}

#[test]
fn test_empty_input_exits_quietly() {
    let out = session("");
    assert!(out.starts_with("=== 3-Link Arm Controller ==="));
    assert!(!out.contains("Initial configuration"));
}
