// src/kinematics/angles.rs - Degree helpers used by the solver

/// Round to two decimal places, the precision of every solver output.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // avoid handing out -0.0
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// True when `a` and `b` differ by at most `tolerance`.
pub fn approx_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Wrap an angle in degrees into (-180, 180].
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg % 360.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
