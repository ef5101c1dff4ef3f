//! PWM LED channels
//!
//! Both LED channels live on one PWM slice, so enabling or disabling the slice
//! switches them together.
use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;

use crate::RawMutex;

/// The LED channel driven by each joystick axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedChannel {
    /// Driven by the X axis
    Red,
    /// Driven by the Y axis
    Blue,
}

/// The trait for the PWM peripheral driving the LED channels
pub trait LedPwm {
    /// Set the compare value of one channel, in `0..=wrap`
    fn set_duty(&mut self, channel: LedChannel, duty: u16);

    /// Enable or disable the output of both channels at once
    fn set_enabled(&mut self, enabled: bool);
}

/// A [`LedPwm`] shared by the render loop and the input task.
///
/// Every access runs inside a critical section, so a concurrent enable never
/// observes one channel updated and the other not.
pub struct SharedLedPwm<P: LedPwm> {
    inner: Mutex<RawMutex, RefCell<P>>,
}

impl<P: LedPwm> SharedLedPwm<P> {
    pub fn new(pwm: P) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(pwm)),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        self.inner.lock(|pwm| f(&mut *pwm.borrow_mut()))
    }
}

impl<P: LedPwm> LedPwm for &SharedLedPwm<P> {
    fn set_duty(&mut self, channel: LedChannel, duty: u16) {
        self.with(|pwm| pwm.set_duty(channel, duty))
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.with(|pwm| pwm.set_enabled(enabled))
    }
}

#[cfg(feature = "rp2040")]
pub use rp::RpLedPwm;

#[cfg(feature = "rp2040")]
mod rp {
    use embassy_rp::pwm::{Config, Pwm};

    use super::{LedChannel, LedPwm};
    use crate::config::PwmConfig;

    /// Red and blue LEDs on the A/B outputs of a single RP2040 PWM slice
    pub struct RpLedPwm<'d> {
        pwm: Pwm<'d>,
        config: Config,
        /// Which output carries the red channel
        red_on_b: bool,
    }

    impl<'d> RpLedPwm<'d> {
        /// Take a slice created with `Pwm::new_output_ab` and apply the divider and wrap.
        ///
        /// `red_on_b` selects whether the red LED is wired to output B (blue on A)
        /// or the other way around.
        pub fn new(mut pwm: Pwm<'d>, pwm_config: &PwmConfig, red_on_b: bool, enabled: bool) -> Self {
            let mut config = Config::default();
            config.divider = pwm_config.clock_divider.into();
            config.top = pwm_config.wrap;
            config.compare_a = 0;
            config.compare_b = 0;
            config.enable = enabled;
            pwm.set_config(&config);
            Self { pwm, config, red_on_b }
        }
    }

    impl LedPwm for RpLedPwm<'_> {
        fn set_duty(&mut self, channel: LedChannel, duty: u16) {
            let on_b = match channel {
                LedChannel::Red => self.red_on_b,
                LedChannel::Blue => !self.red_on_b,
            };
            if on_b {
                self.config.compare_b = duty;
            } else {
                self.config.compare_a = duty;
            }
            self.pwm.set_config(&self.config);
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.config.enable = enabled;
            self.pwm.set_config(&self.config);
        }
    }
}
