//! Fan (filled circular sector) geometry.
//!
//! A fan is approximated by four samples along its arc, evenly spaced from the
//! start angle to the end angle, closed by the center point. Hour and minute
//! fans are always half a turn wide; the overlap fan covers exactly the
//! intersection of the two.

use embedded_graphics::prelude::Point;

use crate::angle::{delta, Angle, HALF_TURN};
use crate::hand::hand_tip;

/// Arc samples per fan.
pub const ARC_SAMPLES: usize = 4;

/// Points in a fan path: the arc samples followed by the center.
pub const FAN_POINTS: usize = ARC_SAMPLES + 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FanPath {
    points: [Point; FAN_POINTS],
}

impl FanPath {
    #[inline]
    pub fn points(&self) -> &[Point; FAN_POINTS] {
        &self.points
    }

    #[inline]
    pub fn arc(&self) -> &[Point] {
        &self.points[..ARC_SAMPLES]
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.points[ARC_SAMPLES]
    }

    /// Triangles covering the fan, each with the center as first vertex.
    pub fn triangles(&self) -> impl Iterator<Item = [Point; 3]> + '_ {
        let c = self.center();
        self.arc().windows(2).map(move |w| [c, w[0], w[1]])
    }
}

/// Builds the fan starting at `start` and sweeping `width` units clockwise.
///
/// The caller keeps `width` within `[0, TURN]`; no clamping happens here.
pub fn build_fan(center: Point, start: Angle, width: u32, radius: u16) -> FanPath {
    let step = (width / (ARC_SAMPLES as u32 - 1)) as i32;
    let mut points = [center; FAN_POINTS];
    for (k, p) in points.iter_mut().take(ARC_SAMPLES).enumerate() {
        *p = hand_tip(center, start.offset(step * k as i32), radius);
    }
    FanPath { points }
}

/// Start angle and width of the region covered by both hand fans.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OverlapSpan {
    pub start: Angle,
    pub width: u32,
}

/// Intersection of the half-turn fans starting at `short` and `long`.
///
/// When the short hand trails the long hand the shared region begins at the
/// long hand; otherwise it begins at the short hand. The width is always in
/// `[0, HALF_TURN]`.
pub fn overlap_span(short: Angle, long: Angle) -> OverlapSpan {
    let half = HALF_TURN as i32;
    let d = delta(short, long);

    let span = if -half < d && d < 0 {
        OverlapSpan { start: long, width: (d + half) as u32 }
    } else {
        OverlapSpan { start: short, width: (half - d) as u32 }
    };
    log::debug!("overlap fan: delta = {}, start = {}, width = {}", d, span.start.raw(), span.width);
    span
}
