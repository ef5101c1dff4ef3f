//! Firmware core of a joystick control panel.
//!
//! An analog joystick drives two PWM LED channels and a cursor on a 128x64
//! OLED. Three buttons toggle the LED channels, toggle a fixed LED with a
//! highlight frame, and reboot into the bootloader.
//!
//! The crate is split into two tasks that share a [`context::PanelContext`]:
//! the [`toggle::ToggleController`] waits for button edges, the
//! [`render::RenderLoop`] samples the joystick and redraws the cursor.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![no_std]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod boot;
pub mod calibration;
pub mod config;
pub mod context;
pub mod debounce;
pub mod display;
pub mod driver;
pub mod error;
pub mod mapping;
pub mod render;
pub mod toggle;

use core::convert::Infallible;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

pub use calibration::{Calibration, CalibrationOffsets, Calibrator};
pub use config::PanelConfig;
pub use context::PanelContext;
pub use error::PanelError;
pub use render::RenderLoop;
pub use toggle::{InputId, ToggleController, Transition};

pub(crate) type RawMutex = CriticalSectionRawMutex;

/// Calibrate the joystick, prepare the display and run the render loop forever.
///
/// Must run alongside [`ToggleController::run`], which shares `context`. Only
/// returns if calibration fails.
pub async fn run_panel<A, P, D>(
    mut adc: A,
    pwm: P,
    display: D,
    context: &PanelContext,
    config: PanelConfig,
) -> Result<Infallible, PanelError>
where
    A: driver::JoystickAdc,
    P: driver::LedPwm,
    D: display::PanelDisplay,
{
    let calibration = Calibrator::new(config.coordinates.adc_max).calibrate(&mut adc).await?;

    let mut render = RenderLoop::new(adc, pwm, display, context, calibration, config);
    if let Err(e) = render.init_display() {
        error!("Display initialization failed: {:?}", e);
    }
    render.run().await
}
