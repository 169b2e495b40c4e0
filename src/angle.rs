//! Fixed-point angles on a full-turn scale.
//!
//! One full rotation is `TURN` units; angles run clockwise from 12 o'clock.
//! `Angle` is always stored reduced modulo `TURN`. Differences between angles
//! are plain `i32` values, normalized by [`delta`].

/// Units in one full rotation (360 degrees).
pub const TURN: u32 = 0x1_0000;

/// Units in half a rotation. Also the fixed width of the hour and minute fans.
pub const HALF_TURN: u32 = TURN / 2;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Angle(u32);

impl Angle {
    pub const ZERO: Angle = Angle(0);

    /// Wraps `raw` onto the circle.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Angle(raw % TURN)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Rotates clockwise by `units` (counter-clockwise when negative).
    #[inline]
    pub fn offset(self, units: i32) -> Self {
        let turned = (self.0 as i64 + units as i64).rem_euclid(TURN as i64);
        Angle(turned as u32)
    }
}

/// Signed circular difference `a - b`, normalized to `(-HALF_TURN, HALF_TURN]`.
///
/// Two angles exactly half a turn apart give `+HALF_TURN` in either argument
/// order, so antisymmetry holds everywhere except that boundary.
pub fn delta(a: Angle, b: Angle) -> i32 {
    let turn = TURN as i32;
    let half = HALF_TURN as i32;

    let mut d = a.0 as i32 - b.0 as i32;
    while d > half {
        d -= turn;
    }
    while d <= -half {
        d += turn;
    }
    d
}
