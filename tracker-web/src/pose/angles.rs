//! Joint angle calculation using dot product
//!
//! Calculates the included angle at a vertex landmark using the vectors
//! vertex→p1 and vertex→p3. Only x/y are used; depth is too noisy.

use super::landmark::Landmark;

/// Calculate the angle at `vertex` in degrees (0-180)
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns 0 when either vector has zero length (coincident points).
pub fn angle_between(p1: &Landmark, vertex: &Landmark, p3: &Landmark) -> f64 {
    let v1 = (p1.x - vertex.x, p1.y - vertex.y);
    let v2 = (p3.x - vertex.x, p3.y - vertex.y);

    let dot = v1.0 * v2.0 + v1.1 * v2.1;

    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();

    // Degenerate case
    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    // Clamp absorbs float drift that would make acos return NaN
    let cos_angle = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);

    cos_angle.acos().to_degrees()
}
