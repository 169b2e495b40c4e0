//! Per-redraw orchestration of the fan watch face.
//!
//! This module provides:
//! - `DrawCommand`, one host-independent draw operation
//! - `plan_frame`, the pure function from time + config to an ordered `Frame`
//! - `render`, which plans a frame centred on a draw target and draws it
//!
//! Painting order is what resolves the overlapping fans: the short fan, then
//! the long fan, then the overlap fan on top of both, then the two hand lines,
//! then the centre dot. Every command is opaque.

use embedded_graphics::{
    prelude::{Dimensions, DrawTarget, PixelColor, Point, Primitive},
    primitives::{Circle, Line, PrimitiveStyle, Triangle},
    Drawable,
};

use crate::angle::HALF_TURN;
use crate::clock::{ClockState, WallTime};
use crate::config::FaceConfig;
use crate::fan::{build_fan, overlap_span, FanPath};
use crate::hand::hand_tip;

/// Commands in one frame: three fans, two hands, one dot.
pub const FRAME_LEN: usize = 6;

/// Radius of the centre dot.
pub const DOT_RADIUS: u32 = 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand<C> {
    /// Filled fan polygon.
    Fan { path: FanPath, color: C },
    /// Stroked hand line.
    Hand { from: Point, to: Point, color: C, width: u32 },
    /// Filled circle.
    Dot { center: Point, radius: u32, color: C },
}

impl<C: PixelColor> DrawCommand<C> {
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        match *self {
            DrawCommand::Fan { ref path, color } => {
                let style = PrimitiveStyle::with_fill(color);
                // Zero-area slivers would otherwise leave a one-pixel seam.
                for [a, b, c] in path.triangles().filter(|t| !is_degenerate(t)) {
                    Triangle::new(a, b, c).into_styled(style).draw(target)?;
                }
            }
            DrawCommand::Hand { from, to, color, width } => {
                Line::new(from, to)
                    .into_styled(PrimitiveStyle::with_stroke(color, width))
                    .draw(target)?;
            }
            DrawCommand::Dot { center, radius, color } => {
                Circle::with_center(center, radius * 2 + 1)
                    .into_styled(PrimitiveStyle::with_fill(color))
                    .draw(target)?;
            }
        }
        Ok(())
    }
}

fn is_degenerate([a, b, c]: &[Point; 3]) -> bool {
    let (u, v) = (*b - *a, *c - *a);
    u.x as i64 * v.y as i64 == u.y as i64 * v.x as i64
}

/// Ordered draw commands for one redraw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame<C> {
    commands: heapless::Vec<DrawCommand<C>, FRAME_LEN>,
}

impl<C: PixelColor> Frame<C> {
    pub fn commands(&self) -> &[DrawCommand<C>] {
        &self.commands
    }

    /// Draws every command in order.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        for cmd in self.commands.iter() {
            cmd.draw(target)?;
        }
        Ok(())
    }
}

/// Plans the face for `time` around `center`.
pub fn plan_frame<C: PixelColor>(time: WallTime, config: &FaceConfig<C>, center: Point) -> Frame<C> {
    let ClockState { hour_angle: short, minute_angle: long } = ClockState::at(time, config.hour_sweep);
    let overlap = overlap_span(short, long);
    let r = config.fan_radius;

    let mut commands: heapless::Vec<DrawCommand<C>, FRAME_LEN> = heapless::Vec::new();

    // Fans
    commands.push(DrawCommand::Fan {
        path: build_fan(center, short, HALF_TURN, r),
        color: config.short.fill_color,
    }).ok();
    commands.push(DrawCommand::Fan {
        path: build_fan(center, long, HALF_TURN, r),
        color: config.long.fill_color,
    }).ok();
    commands.push(DrawCommand::Fan {
        path: build_fan(center, overlap.start, overlap.width, r),
        color: config.overlap_color,
    }).ok();

    // Hands
    commands.push(DrawCommand::Hand {
        from: center,
        to: hand_tip(center, short, config.short.length),
        color: config.short.stroke_color,
        width: config.short.stroke_width,
    }).ok();
    commands.push(DrawCommand::Hand {
        from: center,
        to: hand_tip(center, long, config.long.length),
        color: config.long.stroke_color,
        width: config.long.stroke_width,
    }).ok();

    // Dot
    commands.push(DrawCommand::Dot {
        center,
        radius: DOT_RADIUS,
        color: config.dot_color,
    }).ok();

    Frame { commands }
}

/// Draws the face for `time` centred on `target`.
pub fn render<D>(target: &mut D, time: WallTime, config: &FaceConfig<D::Color>) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    let center = target.bounding_box().center();
    log::trace!("render {:02}:{:02} at ({}, {})", time.hour, time.minute, center.x, center.y);
    plan_frame(time, config, center).draw(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{Angle, TURN};
    use crate::clock::HourSweep;
    use crate::config::{HandSpec, CHROME_YELLOW, KELLY_GREEN, ORANGE};
    use embedded_graphics::{
        mock_display::MockDisplay,
        pixelcolor::Rgb565,
        prelude::{RgbColor, Size},
    };

    fn small_config() -> FaceConfig<Rgb565> {
        FaceConfig {
            long: HandSpec { length: 20, stroke_width: 3, stroke_color: Rgb565::BLACK, fill_color: KELLY_GREEN },
            short: HandSpec { length: 12, stroke_width: 5, stroke_color: Rgb565::BLUE, fill_color: ORANGE },
            overlap_color: CHROME_YELLOW,
            dot_color: Rgb565::WHITE,
            fan_radius: 30,
            hour_sweep: HourSweep::Stepped,
        }
    }

    fn mock() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    #[test]
    fn frame_order_is_fixed() {
        let cfg = small_config();
        let frame = plan_frame(WallTime::new(3, 0), &cfg, Point::new(32, 32));
        let cmds = frame.commands();
        assert_eq!(cmds.len(), FRAME_LEN);

        let colors: heapless::Vec<Rgb565, FRAME_LEN> = cmds
            .iter()
            .map(|c| match *c {
                DrawCommand::Fan { color, .. } | DrawCommand::Hand { color, .. } | DrawCommand::Dot { color, .. } => color,
            })
            .collect();
        assert_eq!(
            colors.as_slice(),
            &[ORANGE, KELLY_GREEN, CHROME_YELLOW, Rgb565::BLUE, Rgb565::BLACK, Rgb565::WHITE]
        );
        assert!(matches!(cmds[5], DrawCommand::Dot { radius: DOT_RADIUS, .. }));
    }

    #[test]
    fn fans_match_geometry_at_three() {
        let cfg = small_config();
        let c = Point::new(32, 32);
        let frame = plan_frame(WallTime::new(3, 0), &cfg, c);
        let cmds = frame.commands();

        assert_eq!(cmds[0], DrawCommand::Fan { path: build_fan(c, Angle::new(TURN / 4), HALF_TURN, 30), color: ORANGE });
        assert_eq!(cmds[1], DrawCommand::Fan { path: build_fan(c, Angle::ZERO, HALF_TURN, 30), color: KELLY_GREEN });
        assert_eq!(
            cmds[2],
            DrawCommand::Fan { path: build_fan(c, Angle::new(TURN / 4), TURN / 4, 30), color: CHROME_YELLOW }
        );
        assert_eq!(
            cmds[3],
            DrawCommand::Hand { from: c, to: Point::new(44, 32), color: Rgb565::BLUE, width: 5 }
        );
        assert_eq!(
            cmds[4],
            DrawCommand::Hand { from: c, to: Point::new(32, 12), color: Rgb565::BLACK, width: 3 }
        );
    }

    #[test]
    fn render_paints_layers_at_three() {
        let cfg = small_config();
        let mut display = mock();
        render(&mut display, WallTime::new(3, 0), &cfg).unwrap();
        let c = display.bounding_box().center();

        // 12-3: minute fan only. 3-6: both. 6-9: hour fan only. 9-12: neither.
        assert_eq!(display.get_pixel(c + Point::new(12, -12)), Some(KELLY_GREEN));
        assert_eq!(display.get_pixel(c + Point::new(12, 12)), Some(CHROME_YELLOW));
        assert_eq!(display.get_pixel(c + Point::new(-12, 12)), Some(ORANGE));
        assert_eq!(display.get_pixel(c + Point::new(-12, -12)), None);

        assert_eq!(display.get_pixel(c + Point::new(0, -10)), Some(Rgb565::BLACK));
        assert_eq!(display.get_pixel(c + Point::new(8, 0)), Some(Rgb565::BLUE));
        assert_eq!(display.get_pixel(c), Some(Rgb565::WHITE));
    }

    #[test]
    fn render_at_midnight_overlaps_fully() {
        let cfg = small_config();
        let mut display = mock();
        render(&mut display, WallTime::new(0, 0), &cfg).unwrap();
        let c = display.bounding_box().center();

        assert_eq!(display.get_pixel(c + Point::new(12, -12)), Some(CHROME_YELLOW));
        assert_eq!(display.get_pixel(c + Point::new(12, 12)), Some(CHROME_YELLOW));
        assert_eq!(display.get_pixel(c + Point::new(-12, 12)), None);
        assert_eq!(display.get_pixel(c + Point::new(-12, -12)), None);
        assert_eq!(display.get_pixel(c), Some(Rgb565::WHITE));
    }

    #[test]
    fn opposite_hands_leave_no_overlap_colour() {
        let cfg = small_config();
        let mut display = mock();
        // 6:00 stepped: hour at 6, minute at 12.
        render(&mut display, WallTime::new(6, 0), &cfg).unwrap();
        let c = display.bounding_box().center();

        assert_eq!(display.get_pixel(c + Point::new(12, -12)), Some(KELLY_GREEN));
        assert_eq!(display.get_pixel(c + Point::new(12, 12)), Some(KELLY_GREEN));
        assert_eq!(display.get_pixel(c + Point::new(-12, 12)), Some(ORANGE));
        assert_eq!(display.get_pixel(c + Point::new(-12, -12)), Some(ORANGE));
        assert_ne!(display.affected_area().size, Size::zero());
    }

    #[test]
    fn zero_width_fan_draws_nothing() {
        let mut display = mock();
        let path = build_fan(Point::new(32, 32), Angle::new(HALF_TURN), 0, 30);
        DrawCommand::Fan { path, color: CHROME_YELLOW }.draw(&mut display).unwrap();
        assert_eq!(display.affected_area().size, Size::zero());
    }
}
