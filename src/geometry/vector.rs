use egui::{Pos2, Vec2};
use glam::DVec2;

/// Lengths below this are treated as zero when normalising.
pub const EPSILON: f32 = 1e-6;

/// Euclidean length of a vector
pub fn vector_length(vector: Vec2) -> f32 {
    vector.x.hypot(vector.y)
}

/// Widen a device-space vector for calibrated arithmetic
pub fn to_physical(vector: Vec2) -> DVec2 {
    DVec2::new(f64::from(vector.x), f64::from(vector.y))
}

/// Angle in radians between two calibrated vectors.
///
/// The cosine is clamped to `[-1, 1]` so that nearly parallel vectors do not
/// produce `NaN` through rounding. Returns `None` only for a zero vector;
/// short legs at a fine pixel spacing still have an angle.
pub fn vectors_angle(v1: DVec2, v2: DVec2) -> Option<f64> {
    if v1 == DVec2::ZERO || v2 == DVec2::ZERO {
        return None;
    }
    let cos = (v1.dot(v2) / (v1.length() * v2.length())).clamp(-1.0, 1.0);
    Some(cos.acos())
}

/// True if the points differ in any coordinate
pub fn vectors_differ(p1: Pos2, p2: Pos2) -> bool {
    p1.x != p2.x || p1.y != p2.y
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    180.0 / std::f64::consts::PI * radians
}

/// Unit vector with the direction of `vector`, or `None` for a zero vector.
pub fn normalize_vector(vector: Vec2) -> Option<Vec2> {
    let length = vector_length(vector);
    if length <= EPSILON {
        None
    } else {
        Some(vector / length)
    }
}

/// Vector pointing from `p2` to `p1`
pub fn points_to_vector(p1: Pos2, p2: Pos2) -> Vec2 {
    Vec2::new(p1.x - p2.x, p1.y - p2.y)
}

pub fn sum_vectors(v1: Vec2, v2: Vec2) -> Vec2 {
    Vec2::new(v1.x + v2.x, v1.y + v2.y)
}

/// Round to two decimal places, the precision measurements are reported in.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_vector_length() {
        assert_eq!(vector_length(vec2(3.0, 4.0)), 5.0);
        assert_eq!(vector_length(Vec2::ZERO), 0.0);
    }

    #[test]
    fn test_right_angle() {
        let angle = vectors_angle(DVec2::new(10.0, 0.0), DVec2::new(0.0, 10.0)).unwrap();
        assert!((radians_to_degrees(angle) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_of_parallel_vectors_is_not_nan() {
        let angle = vectors_angle(DVec2::new(1.0, 1.0), DVec2::new(3.0, 3.0)).unwrap();
        assert!(angle.abs() < 1e-6);

        let angle = vectors_angle(DVec2::new(1.0, 0.0), DVec2::new(-2.0, 0.0)).unwrap();
        assert!((radians_to_degrees(angle) - 180.0).abs() < 1e-6);
    }

    #[test]
    fn test_angle_with_zero_vector() {
        assert!(vectors_angle(DVec2::ZERO, DVec2::new(1.0, 0.0)).is_none());
    }

    #[test]
    fn test_angle_between_tiny_vectors() {
        let angle = vectors_angle(DVec2::new(1e-9, 0.0), DVec2::new(0.0, 1e-9)).unwrap();
        assert_eq!(round2(radians_to_degrees(angle)), 90.0);
    }

    #[test]
    fn test_to_physical() {
        assert_eq!(to_physical(vec2(0.5, -3.0)), DVec2::new(0.5, -3.0));
    }

    #[test]
    fn test_normalize() {
        let unit = normalize_vector(vec2(0.0, -5.0)).unwrap();
        assert_eq!(unit, vec2(0.0, -1.0));
        assert!(normalize_vector(Vec2::ZERO).is_none());
    }

    #[test]
    fn test_points_to_vector_and_sum() {
        let v = points_to_vector(pos2(5.0, 7.0), pos2(1.0, 2.0));
        assert_eq!(v, vec2(4.0, 5.0));
        assert_eq!(sum_vectors(v, vec2(-4.0, 1.0)), vec2(0.0, 6.0));
    }

    #[test]
    fn test_vectors_differ() {
        assert!(!vectors_differ(pos2(1.0, 2.0), pos2(1.0, 2.0)));
        assert!(vectors_differ(pos2(1.0, 2.0), pos2(1.0, 2.5)));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(157.079_63), 157.08);
        assert_eq!(round2(89.999_99), 90.0);
        // Hundredths survive at magnitudes past f32 precision
        assert_eq!(round2(382_701.27), 382_701.27);
    }
}
