//! The control loop: sample the joystick, drive the LED channels and move the
//! cursor on the display.
//!
//! The cursor is redrawn by erasing the previous 8x8 square and filling the
//! new one, then flushing. Only one square ever changes per frame, so there is
//! no need to clear and redraw the whole buffer.
use embassy_time::Timer;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};

use crate::calibration::{Calibration, CalibrationOffsets};
use crate::config::PanelConfig;
use crate::context::PanelContext;
use crate::display::{PanelDisplay, draw_rect};
use crate::driver::{Axis, JoystickAdc, LedChannel, LedPwm};
use crate::error::PanelError;
use crate::mapping::{CoordinateMapper, IntensityMapper};

/// Position of the cursor's top-left corner in the last and the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    pub prev: Point,
    pub cur: Point,
}

/// Duty values computed in one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelIntensity {
    pub red: u16,
    pub blue: u16,
}

/// Everything a single frame produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub raw: (u16, u16),
    pub intensity: ChannelIntensity,
    pub cursor: Point,
}

pub struct RenderLoop<'a, A: JoystickAdc, P: LedPwm, D: PanelDisplay> {
    adc: A,
    pwm: P,
    display: D,
    context: &'a PanelContext,
    offsets: CalibrationOffsets,
    cursor: CursorState,
    intensity: IntensityMapper,
    coordinates: CoordinateMapper,
    config: PanelConfig,
}

impl<'a, A: JoystickAdc, P: LedPwm, D: PanelDisplay> RenderLoop<'a, A, P, D> {
    /// Create the loop from a finished calibration.
    ///
    /// The cursor starts at the position of the calibration's settling reads,
    /// which keeps the first erase inside the drawable interior.
    pub fn new(adc: A, pwm: P, display: D, context: &'a PanelContext, calibration: Calibration, config: PanelConfig) -> Self {
        let coordinates = CoordinateMapper::new(config.coordinates);
        let (x, y) = calibration.first_sample;
        let start = coordinates.map(x, y);
        Self {
            adc,
            pwm,
            display,
            context,
            offsets: calibration.offsets,
            cursor: CursorState { prev: start, cur: start },
            intensity: IntensityMapper::new(&config.pwm),
            coordinates,
            config,
        }
    }

    /// Blank the panel and draw the static border.
    ///
    /// Flushes once after the clear and once after the border, so the border is
    /// on screen before the first frame.
    pub fn init_display(&mut self) -> Result<(), PanelError> {
        self.display.clear(BinaryColor::Off)?;
        self.display.flush_frame()?;
        draw_rect(&mut self.display, self.config.display.border, BinaryColor::On, false)?;
        self.display.flush_frame()?;
        Ok(())
    }

    /// Run frames forever, pacing them with the configured interval.
    ///
    /// A failing frame is logged and skipped.
    pub async fn run(&mut self) -> ! {
        info!("Render loop started");
        loop {
            if let Err(e) = self.step().await {
                warn!("Frame failed: {:?}", e);
            }
            Timer::after(self.config.frame_interval).await;
        }
    }

    /// Render a single frame
    pub async fn step(&mut self) -> Result<Frame, PanelError> {
        if let Some(highlighted) = self.context.take_highlight() {
            let color = if highlighted { BinaryColor::On } else { BinaryColor::Off };
            draw_rect(&mut self.display, self.config.display.highlight, color, false)?;
        }

        // Duty values are always written, the enable flag only gates the outputs
        let raw_x = self.adc.read(Axis::X).await?;
        let red = self.intensity.map(raw_x, self.offsets.x_offset);
        self.pwm.set_duty(LedChannel::Red, red);

        let raw_y = self.adc.read(Axis::Y).await?;
        let blue = self.intensity.map(raw_y, self.offsets.y_offset);
        self.pwm.set_duty(LedChannel::Blue, blue);

        let next = self.coordinates.map(raw_x, raw_y);
        self.cursor.cur = next;

        let erase = self.cursor_area(self.cursor.prev);
        let draw = self.cursor_area(next);
        draw_rect(&mut self.display, erase, BinaryColor::Off, true)?;
        draw_rect(&mut self.display, draw, BinaryColor::On, true)?;
        // `prev` tracks the buffer, a failed flush is retried by the next frame's flush
        self.cursor.prev = next;
        self.display.flush_frame()?;

        let frame = Frame {
            raw: (raw_x, raw_y),
            intensity: ChannelIntensity { red, blue },
            cursor: next,
        };
        trace!(
            "raw=({}, {}) red={} blue={} pwm_enabled={}",
            raw_x,
            raw_y,
            red,
            blue,
            self.context.flags.pwm_enabled()
        );
        Ok(frame)
    }

    fn cursor_area(&self, top_left: Point) -> Rectangle {
        let size = self.config.display.cursor_size;
        Rectangle::new(top_left, Size::new(size, size))
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    pub fn offsets(&self) -> CalibrationOffsets {
        self.offsets
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}
