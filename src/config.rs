//! Face configuration, built once at startup and passed by reference to every redraw.

use core::f64::consts::FRAC_PI_6;
use core::fmt;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::{PixelColor, RgbColor, Size},
};

use crate::clock::HourSweep;

// Face palette (KellyGreen, Orange, ChromeYellow), converted from RGB888.
pub const KELLY_GREEN: Rgb565 = Rgb565::new(0x55 >> 3, 0xAA >> 2, 0x00);
pub const ORANGE: Rgb565 = Rgb565::new(0xFF >> 3, 0x55 >> 2, 0x00);
pub const CHROME_YELLOW: Rgb565 = Rgb565::new(0xFF >> 3, 0xAA >> 2, 0x00);

/// Per-hand drawing parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HandSpec<C> {
    /// Hand line length in pixels.
    pub length: u16,
    /// Hand line stroke width in pixels.
    pub stroke_width: u32,
    pub stroke_color: C,
    /// Colour of this hand's fan.
    pub fill_color: C,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaceConfig<C> {
    /// Minute hand.
    pub long: HandSpec<C>,
    /// Hour hand.
    pub short: HandSpec<C>,
    pub overlap_color: C,
    pub dot_color: C,
    /// Radius shared by all three fans.
    pub fan_radius: u16,
    pub hour_sweep: HourSweep,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroFanRadius,
    /// A hand line would poke out past the edge of the fans.
    HandOutsideFan { length: u16, fan_radius: u16 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroFanRadius => write!(f, "fan radius must be non-zero"),
            ConfigError::HandOutsideFan { length, fan_radius } => {
                write!(f, "hand length {} exceeds fan radius {}", length, fan_radius)
            }
        }
    }
}

impl<C: PixelColor> FaceConfig<C> {
    /// Checks the hand lengths against the fan radius.
    ///
    /// Fans larger than the surface are fine; the draw target clips them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fan_radius == 0 {
            return Err(ConfigError::ZeroFanRadius);
        }
        for hand in [&self.short, &self.long] {
            if hand.length > self.fan_radius {
                return Err(ConfigError::HandOutsideFan {
                    length: hand.length,
                    fan_radius: self.fan_radius,
                });
            }
        }
        Ok(())
    }
}

// Pixels added on top of the exact radius: `hand_tip` truncates each vertex
// coordinate toward the centre, losing up to one pixel per axis.
const RIM_SLACK: f64 = 3.0;

/// Fan radius whose fans paint every pixel of a `size` surface, corners
/// included, when centred on it.
///
/// A half-turn fan's rim is a chord between arc samples 60 degrees apart, so
/// midway between two samples it only reaches `r * cos(30 deg)`.
pub fn covering_radius(size: Size) -> u16 {
    let (w, h) = (size.width as f64 / 2.0, size.height as f64 / 2.0);
    let reach = libm::sqrt(w * w + h * h) / libm::cos(FRAC_PI_6);
    (libm::ceil(reach) + RIM_SLACK).min(u16::MAX as f64) as u16
}

impl Default for FaceConfig<Rgb565> {
    // 80/48 px hands on 128 px fans.
    fn default() -> Self {
        Self {
            long: HandSpec {
                length: 80,
                stroke_width: 4,
                stroke_color: Rgb565::BLACK,
                fill_color: KELLY_GREEN,
            },
            short: HandSpec {
                length: 48,
                stroke_width: 8,
                stroke_color: Rgb565::BLACK,
                fill_color: ORANGE,
            },
            overlap_color: CHROME_YELLOW,
            dot_color: Rgb565::WHITE,
            fan_radius: 128,
            hour_sweep: HourSweep::Stepped,
        }
    }
}
