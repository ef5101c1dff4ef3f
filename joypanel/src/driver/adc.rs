//! Joystick axis sampling
use crate::error::PanelError;

/// Joystick axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

/// The trait for the analog front-end of the joystick.
///
/// Selecting the axis and sampling it is one call; implementations backed by
/// a multiplexed ADC switch the channel before converting.
#[allow(async_fn_in_trait)]
pub trait JoystickAdc {
    /// Sample one axis. The result is in `0..=4095` for a 12-bit ADC.
    async fn read(&mut self, axis: Axis) -> Result<u16, PanelError>;
}

#[cfg(feature = "rp2040")]
pub use rp::RpJoystickAdc;

#[cfg(feature = "rp2040")]
mod rp {
    use embassy_rp::adc::{Adc, Async, Channel};

    use super::{Axis, JoystickAdc};
    use crate::error::PanelError;

    /// Joystick sampled by the RP2040's ADC, one channel per axis
    pub struct RpJoystickAdc<'d> {
        adc: Adc<'d, Async>,
        x: Channel<'d>,
        y: Channel<'d>,
    }

    impl<'d> RpJoystickAdc<'d> {
        pub fn new(adc: Adc<'d, Async>, x: Channel<'d>, y: Channel<'d>) -> Self {
            Self { adc, x, y }
        }
    }

    impl JoystickAdc for RpJoystickAdc<'_> {
        async fn read(&mut self, axis: Axis) -> Result<u16, PanelError> {
            let channel = match axis {
                Axis::X => &mut self.x,
                Axis::Y => &mut self.y,
            };
            self.adc.read(channel).await.map_err(|_e| {
                error!("ADC read on {:?} axis failed", axis);
                PanelError::Adc
            })
        }
    }
}
