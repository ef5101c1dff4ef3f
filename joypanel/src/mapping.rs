//! Conversion of raw joystick samples into LED intensities and cursor positions.
use embedded_graphics::prelude::Point;

use crate::config::{CoordinateConfig, PwmConfig};

/// Maps one axis's raw sample to the duty value of its LED channel.
///
/// The duty is the distance of the sample from the calibrated center, so the
/// LED is dark with the stick at rest and brightens towards either end.
#[derive(Clone, Copy, Debug)]
pub struct IntensityMapper {
    wrap: u16,
}

impl IntensityMapper {
    pub fn new(config: &PwmConfig) -> Self {
        Self { wrap: config.wrap }
    }

    /// `|raw - offset|`, clamped to the PWM wrap value
    pub fn map(&self, raw: u16, offset: u16) -> u16 {
        raw.abs_diff(offset).min(self.wrap)
    }
}

/// Maps a pair of raw samples to the top-left pixel of the cursor.
///
/// The Y axis is inverted: pushing the stick forward raises the reading and
/// moves the cursor up.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper {
    config: CoordinateConfig,
}

impl CoordinateMapper {
    pub fn new(config: CoordinateConfig) -> Self {
        Self { config }
    }

    pub fn map(&self, raw_x: u16, raw_y: u16) -> Point {
        map_coordinates(&self.config, raw_x, raw_y)
    }
}

pub(crate) fn map_coordinates(config: &CoordinateConfig, raw_x: u16, raw_y: u16) -> Point {
    let raw_x = raw_x.min(config.adc_max);
    let raw_y = raw_y.min(config.adc_max);
    let x = raw_x / config.x_divisor + config.x_offset;
    let y = config.y_invert_base.saturating_sub(raw_y) / config.y_divisor + config.y_offset;
    Point::new(x as i32, y as i32)
}
