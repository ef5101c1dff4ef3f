//! Peripheral seams of the panel.
//!
//! Each module defines the narrow trait the core consumes, plus the RP2040
//! implementation behind the `rp2040` feature.
pub mod adc;
pub(crate) mod gpio;
pub mod pwm;

pub use adc::{Axis, JoystickAdc};
pub use pwm::{LedChannel, LedPwm, SharedLedPwm};
