#![cfg_attr(not(test), no_std)]

pub mod angle;
pub mod clock;
pub mod config;
#[cfg(feature = "firmware")]
pub mod display;
pub mod face;
pub mod fan;
pub mod framebuffer;
pub mod hand;
pub mod trig;
#[cfg(feature = "firmware")]
pub mod wiring;

pub use angle::{delta, Angle, HALF_TURN, TURN};
pub use clock::{time_to_angles, ClockState, HourSweep, WallTime};
pub use config::{covering_radius, ConfigError, FaceConfig, HandSpec};
pub use face::{plan_frame, render, DrawCommand, Frame};
pub use fan::{build_fan, overlap_span, FanPath, OverlapSpan};
pub use framebuffer::{Framebuffer, FramebufferError};
pub use hand::hand_tip;
