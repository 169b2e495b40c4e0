//! Wall-clock time to hand angles.

use crate::angle::{Angle, TURN};

const SECS_PER_DAY: u32 = 86_400;

/// Local time of day, as read from the RTC.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WallTime {
    pub hour: u8,   // 0-23
    pub minute: u8, // 0-59
}

impl WallTime {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    // Time of day from a timestamp already shifted to local time.
    pub fn from_unix(ts: u32) -> Self {
        let secs = ts % SECS_PER_DAY;
        Self {
            hour: (secs / 3600) as u8,
            minute: (secs % 3600 / 60) as u8,
        }
    }

    // Minutes since midnight; two times with equal keys draw identically.
    pub fn minute_of_day(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

/// How the short hand moves between hours.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HourSweep {
    /// Jumps every 10 minutes (72 positions per half day).
    #[default]
    Stepped,
    /// Moves every minute (720 positions per half day).
    Continuous,
}

/// Hand angles for one redraw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClockState {
    pub hour_angle: Angle,
    pub minute_angle: Angle,
}

impl ClockState {
    pub fn at(time: WallTime, sweep: HourSweep) -> Self {
        debug_assert!(time.hour < 24 && time.minute < 60, "invalid wall time {:?}", time);

        let hour = (time.hour % 12) as u32;
        let minute = time.minute as u32;

        let hour_angle = match sweep {
            HourSweep::Stepped => TURN * (hour * 6 + minute / 10) / 72,
            HourSweep::Continuous => TURN * (hour * 60 + minute) / 720,
        };

        Self {
            hour_angle: Angle::new(hour_angle),
            minute_angle: Angle::new(TURN * minute / 60),
        }
    }
}

/// `(hour_angle, minute_angle)` with the stepped hour hand.
pub fn time_to_angles(hour: u8, minute: u8) -> (Angle, Angle) {
    let state = ClockState::at(WallTime::new(hour, minute), HourSweep::Stepped);
    (state.hour_angle, state.minute_angle)
}
