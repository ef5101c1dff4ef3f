//! State shared between the input task and the render loop.
//!
//! The board allocates one [`PanelContext`] (usually in a `StaticCell`) and
//! hands the same reference to both tasks.
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicBool, Ordering};

use crate::RawMutex;
use crate::config::ToggleConfig;

/// The two toggled flags.
///
/// Each flag is only written by the toggle controller. Readers never infer the
/// state from the output pins.
pub struct ToggleFlags {
    pwm_enabled: AtomicBool,
    led_enabled: AtomicBool,
}

impl ToggleFlags {
    pub const fn new(pwm_enabled: bool, led_enabled: bool) -> Self {
        Self {
            pwm_enabled: AtomicBool::new(pwm_enabled),
            led_enabled: AtomicBool::new(led_enabled),
        }
    }

    pub fn pwm_enabled(&self) -> bool {
        self.pwm_enabled.load(Ordering::Acquire)
    }

    pub fn led_enabled(&self) -> bool {
        self.led_enabled.load(Ordering::Acquire)
    }

    /// Flip `pwm_enabled` and return the new value
    pub(crate) fn toggle_pwm(&self) -> bool {
        !self.pwm_enabled.fetch_xor(true, Ordering::AcqRel)
    }

    /// Flip `led_enabled` and return the new value
    pub(crate) fn toggle_led(&self) -> bool {
        !self.led_enabled.fetch_xor(true, Ordering::AcqRel)
    }
}

pub struct PanelContext {
    pub flags: ToggleFlags,
    /// Single-slot mailbox carrying the latest highlight state to the render
    /// loop, which owns the display. A newer state overwrites an undrawn one.
    pub(crate) highlight: Signal<RawMutex, bool>,
}

impl PanelContext {
    pub const fn new(config: &ToggleConfig) -> Self {
        Self {
            flags: ToggleFlags::new(config.pwm_enabled, config.led_enabled),
            highlight: Signal::new(),
        }
    }

    /// Take the pending highlight state, if the joystick button posted one
    pub(crate) fn take_highlight(&self) -> Option<bool> {
        self.highlight.try_take()
    }
}
