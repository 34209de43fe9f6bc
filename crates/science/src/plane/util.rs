//! Small predicates shared by vector construction.

use nalgebra::Vector2;

/// `true` for `v >= 0` (zero counts as positive).
#[inline]
pub fn is_positive_or_zero(v: f64) -> bool {
    v >= 0.0
}

/// `true` for `v <= 0` (zero counts as negative).
#[inline]
pub fn is_negative_or_zero(v: f64) -> bool {
    v <= 0.0
}

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise, zero iff collinear.
#[inline]
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn zero_is_both_signs() {
        assert!(is_positive_or_zero(0.0));
        assert!(is_negative_or_zero(0.0));
        assert!(is_positive_or_zero(-0.0));
        assert!(is_negative_or_zero(-0.0));
        assert!(!is_positive_or_zero(-1e-300));
        assert!(!is_negative_or_zero(1e-300));
    }

    #[test]
    fn area_axis_aligned() {
        let a = vector![1.0, 0.0];
        let b = vector![0.0, 2.5];
        assert!((parallelogram_area(a, b) - 2.5).abs() < 1e-12);
        assert!((parallelogram_area(b, a) + 2.5).abs() < 1e-12);
    }

    #[test]
    fn area_matches_determinant_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let a = Vector2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let b = Vector2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let det = nalgebra::Matrix2::from_columns(&[a, b]).determinant();
            assert!((parallelogram_area(a, b) - det).abs() < 1e-12);
        }
    }
}
