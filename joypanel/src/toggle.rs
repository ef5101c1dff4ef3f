//! Button handling: debounced falling edges from the three buttons, each
//! dispatched to its own handler.
use embassy_futures::select::{Either3, select3};
use embassy_time::Instant;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::digital::Wait;

use crate::boot;
use crate::config::PanelConfig;
use crate::context::PanelContext;
use crate::debounce::DebounceGate;
use crate::driver::LedPwm;
use crate::driver::gpio::OutputController;

/// The physical inputs which raise edge events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputId {
    /// Auxiliary button A, toggles both PWM LED channels
    ToggleA,
    /// Auxiliary button B, reboots into the USB bootloader
    ResetB,
    /// Push-button of the joystick, toggles the fixed LED and the highlight frame
    ToggleJoystick,
}

/// What an accepted edge did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    PwmEnabled(bool),
    LedEnabled(bool),
    /// The device must reset into the bootloader. Terminal.
    EnterBootloader,
}

type Handler<'a, P, L> = fn(&mut ToggleController<'a, P, L>) -> Transition;

/// Owns the debounce gate and the outputs driven directly by button presses.
pub struct ToggleController<'a, P: LedPwm, L: OutputPin> {
    context: &'a PanelContext,
    gate: DebounceGate,
    pwm: P,
    led: OutputController<L>,
}

impl<'a, P: LedPwm, L: OutputPin> ToggleController<'a, P, L> {
    /// Create the controller and drive the outputs to the current flag states
    pub fn new(context: &'a PanelContext, mut pwm: P, led: L, config: &PanelConfig) -> Self {
        pwm.set_enabled(context.flags.pwm_enabled());
        let led = OutputController::new(led, config.toggles.led_low_active, context.flags.led_enabled());
        Self {
            context,
            gate: DebounceGate::new(&config.debounce),
            pwm,
            led,
        }
    }

    /// Wait for falling edges on the three buttons forever.
    ///
    /// Edges are handled one at a time, so a handler is never re-entered. Returns
    /// only by resetting the device.
    pub async fn run<A: Wait, B: Wait, J: Wait>(&mut self, button_a: &mut A, button_b: &mut B, joystick: &mut J) -> ! {
        info!("Waiting for button edges");
        loop {
            let edge = match select3(
                button_a.wait_for_falling_edge(),
                button_b.wait_for_falling_edge(),
                joystick.wait_for_falling_edge(),
            )
            .await
            {
                Either3::First(r) => r.ok().map(|_| InputId::ToggleA),
                Either3::Second(r) => r.ok().map(|_| InputId::ResetB),
                Either3::Third(r) => r.ok().map(|_| InputId::ToggleJoystick),
            };
            let Some(input) = edge else {
                warn!("Failed to wait for a button edge");
                continue;
            };

            if let Some(Transition::EnterBootloader) = self.on_edge(input, Instant::now().as_micros()) {
                boot::jump_to_bootloader();
            }
        }
    }

    /// Handle a falling edge of `input` seen at `now_us`.
    ///
    /// Returns `None` if the edge fell inside the debounce window. For
    /// [`Transition::EnterBootloader`] the caller performs the reset.
    pub fn on_edge(&mut self, input: InputId, now_us: u64) -> Option<Transition> {
        if !self.gate.accept(now_us) {
            debug!("Edge on {:?} at {}us suppressed", input, now_us);
            return None;
        }
        let transition = Self::handler(input)(self);
        info!("{:?} -> {:?}", input, transition);
        Some(transition)
    }

    fn handler(input: InputId) -> Handler<'a, P, L> {
        match input {
            InputId::ToggleA => Self::toggle_pwm,
            InputId::ResetB => Self::enter_bootloader,
            InputId::ToggleJoystick => Self::toggle_led,
        }
    }

    fn toggle_pwm(&mut self) -> Transition {
        let enabled = self.context.flags.toggle_pwm();
        // Both channels share one slice: a single call switches them together
        self.pwm.set_enabled(enabled);
        Transition::PwmEnabled(enabled)
    }

    fn enter_bootloader(&mut self) -> Transition {
        Transition::EnterBootloader
    }

    fn toggle_led(&mut self) -> Transition {
        let enabled = self.context.flags.toggle_led();
        self.led.set(enabled);
        self.context.highlight.signal(enabled);
        Transition::LedEnabled(enabled)
    }

    /// The last state driven to the fixed LED
    pub fn led_active(&self) -> bool {
        self.led.is_active()
    }
}
