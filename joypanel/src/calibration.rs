//! Startup calibration of the joystick center
use crate::driver::{Axis, JoystickAdc};
use crate::error::PanelError;

/// Raw ADC readings with the stick at rest, captured once at boot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationOffsets {
    pub x_offset: u16,
    pub y_offset: u16,
}

/// Result of [`Calibrator::calibrate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    pub offsets: CalibrationOffsets,
    /// The settling reads taken before the offsets, as `(x, y)`.
    /// Used to place the cursor before the first frame.
    pub first_sample: (u16, u16),
}

pub struct Calibrator {
    adc_max: u16,
}

impl Calibrator {
    pub fn new(adc_max: u16) -> Self {
        Self { adc_max }
    }

    /// Read each axis twice in a row and keep the second read as its offset.
    ///
    /// The first conversion after switching the ADC mux is not trusted.
    pub async fn calibrate<A: JoystickAdc>(&self, adc: &mut A) -> Result<Calibration, PanelError> {
        let (first_x, x_offset) = self.read_twice(adc, Axis::X).await?;
        let (first_y, y_offset) = self.read_twice(adc, Axis::Y).await?;
        let calibration = Calibration {
            offsets: CalibrationOffsets { x_offset, y_offset },
            first_sample: (first_x, first_y),
        };
        info!("Joystick calibrated: {:?}", calibration.offsets);
        Ok(calibration)
    }

    async fn read_twice<A: JoystickAdc>(&self, adc: &mut A, axis: Axis) -> Result<(u16, u16), PanelError> {
        let settle = adc.read(axis).await?.min(self.adc_max);
        let offset = adc.read(axis).await?.min(self.adc_max);
        Ok((settle, offset))
    }
}
