//! Joint angle calculation using dot product
//!
//! Calculates the interior angle at a joint from the two vectors
//! joint→a and joint→c.

use nalgebra::Vector2;

/// Calculate the angle at `b` in degrees
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns angle in degrees:
/// - 0° = a and c on the same side (fully folded)
/// - 180° = a, b, c in a straight line
pub fn joint_angle(a: Vector2<f32>, b: Vector2<f32>, c: Vector2<f32>) -> f32 {
    let v1 = a - b;
    let v2 = c - b;

    let mag1 = v1.norm();
    let mag2 = v2.norm();

    // Coincident points have no angle
    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    // Rounding can push the cosine just past ±1
    let cos_angle = (v1.dot(&v2) / (mag1 * mag2)).clamp(-1.0, 1.0);

    cos_angle.acos().to_degrees()
}
