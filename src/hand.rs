//! Classic clock-hand projection.

use embedded_graphics::prelude::Point;

use crate::angle::Angle;
use crate::trig::{cos_lookup, sin_lookup, TRIG_SCALE};

/// Tip of a hand of `length` pixels pointing at `angle`, clockwise from 12 o'clock.
///
/// Screen y grows downward, hence the negated cosine. The multiply-divide runs
/// in `i64` and truncates toward zero.
pub fn hand_tip(center: Point, angle: Angle, length: u16) -> Point {
    let len = length as i64;
    let scale = TRIG_SCALE as i64;
    let dx = sin_lookup(angle) as i64 * len / scale;
    let dy = -(cos_lookup(angle) as i64) * len / scale;
    Point::new(center.x + dx as i32, center.y + dy as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{HALF_TURN, TURN};

    const C: Point = Point::new(120, 120);

    #[test]
    fn zero_length_collapses_to_center() {
        for raw in (0..TURN).step_by(331) {
            assert_eq!(hand_tip(C, Angle::new(raw), 0), C);
        }
    }

    #[test]
    fn cardinal_directions() {
        assert_eq!(hand_tip(C, Angle::ZERO, 80), Point::new(120, 40));
        assert_eq!(hand_tip(C, Angle::new(TURN / 4), 80), Point::new(200, 120));
        assert_eq!(hand_tip(C, Angle::new(HALF_TURN), 80), Point::new(120, 200));
        assert_eq!(hand_tip(C, Angle::new(TURN / 4 * 3), 80), Point::new(40, 120));
    }

    #[test]
    fn tip_stays_within_length() {
        for raw in (0..TURN).step_by(127) {
            let tip = hand_tip(C, Angle::new(raw), 128);
            let d = tip - C;
            assert!(d.x.abs() <= 128 && d.y.abs() <= 128);
            assert!(d.x * d.x + d.y * d.y <= 128 * 128);
        }
    }

    #[test]
    fn max_length_does_not_overflow() {
        let tip = hand_tip(Point::zero(), Angle::new(TURN / 4), u16::MAX);
        assert_eq!(tip, Point::new(u16::MAX as i32, 0));
    }
}
