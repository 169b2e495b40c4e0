// Fixed-point sine/cosine on the `TURN` scale.
// Results are scaled by TRIG_SCALE and rounded once here, so every projection
// (fan vertices and hand tips alike) sees the same value for the same angle.

use core::f64::consts::TAU;

use crate::angle::{Angle, TURN};

/// Fixed-point value of sin(90 degrees).
pub const TRIG_SCALE: i32 = 0xFFFF;

#[inline]
fn radians(angle: Angle) -> f64 {
    angle.raw() as f64 * TAU / TURN as f64
}

#[inline]
fn scaled(ratio: f64) -> i32 {
    libm::round(ratio * TRIG_SCALE as f64) as i32
}

/// `sin(angle) * TRIG_SCALE`, rounded to nearest.
pub fn sin_lookup(angle: Angle) -> i32 {
    scaled(libm::sin(radians(angle)))
}

/// `cos(angle) * TRIG_SCALE`, rounded to nearest.
pub fn cos_lookup(angle: Angle) -> i32 {
    scaled(libm::cos(radians(angle)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::HALF_TURN;

    #[test]
    fn cardinal_points_are_exact() {
        assert_eq!(sin_lookup(Angle::ZERO), 0);
        assert_eq!(cos_lookup(Angle::ZERO), TRIG_SCALE);

        let quarter = Angle::new(TURN / 4);
        assert_eq!(sin_lookup(quarter), TRIG_SCALE);
        assert_eq!(cos_lookup(quarter), 0);

        let half = Angle::new(HALF_TURN);
        assert_eq!(sin_lookup(half), 0);
        assert_eq!(cos_lookup(half), -TRIG_SCALE);

        let three_quarters = Angle::new(TURN / 4 * 3);
        assert_eq!(sin_lookup(three_quarters), -TRIG_SCALE);
        assert_eq!(cos_lookup(three_quarters), 0);
    }

    #[test]
    fn values_stay_within_scale() {
        for raw in (0..TURN).step_by(251) {
            let a = Angle::new(raw);
            assert!(sin_lookup(a).abs() <= TRIG_SCALE);
            assert!(cos_lookup(a).abs() <= TRIG_SCALE);
        }
    }

    #[test]
    fn sine_is_odd_around_zero() {
        for raw in (1..HALF_TURN).step_by(509) {
            let a = Angle::new(raw);
            let mirrored = Angle::new(TURN - raw);
            assert_eq!(sin_lookup(a), -sin_lookup(mirrored));
            assert_eq!(cos_lookup(a), cos_lookup(mirrored));
        }
    }
}
