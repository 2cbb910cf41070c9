//! Angle wrap helpers. All values are degrees.

/// Floored modulo; the result carries the sign of `m`.
pub fn emod(x: f64, m: f64) -> f64 {
    ((x % m) + m) % m
}

/// Wraps into [0, 360).
///
/// A tiny negative input can round up to exactly 360.0; `rasi_from_deg`
/// treats that as the 0° boundary.
pub fn wrap360(x: f64) -> f64 {
    x - 360.0 * (x / 360.0).floor()
}

/// Wraps into [-180, 180).
pub fn wrap180(x: f64) -> f64 {
    emod(x + 180.0, 360.0) - 180.0
}

/// Absolute separation of two angles along the shorter arc.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    wrap180(a - b).abs()
}
