use nalgebra::{Rotation3, Vector3};
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Component-wise linear interpolation between two vectors
pub fn lerp_vector(start: &Vector3<f64>, end: &Vector3<f64>, factor: f64) -> Vector3<f64> {
    Vector3::new(
        lerp(start.x, end.x, factor),
        lerp(start.y, end.y, factor),
        lerp(start.z, end.z, factor),
    )
}

/// Rotate `vector` by `angle_deg` degrees about the world X axis, then by
/// `angle2_deg` degrees about the world Z axis.
///
/// Both rotations are about fixed world axes, so this is not an Euler
/// sequence and the order cannot be swapped.
pub fn rotate_x_then_z(vector: &Vector3<f64>, angle_deg: f64, angle2_deg: f64) -> Vector3<f64> {
    let about_x = Rotation3::from_axis_angle(&Vector3::x_axis(), deg_to_rad(angle_deg));
    let about_z = Rotation3::from_axis_angle(&Vector3::z_axis(), deg_to_rad(angle2_deg));
    about_z * (about_x * vector)
}

/// Replace NaN or infinite values with zero.
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
