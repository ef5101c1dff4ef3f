#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use core::future::poll_fn;
use core::task::Poll;

use display_interface::DisplayError;
use embedded_hal::digital::{ErrorKind, ErrorType};
use embedded_hal_async::digital::Wait;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use joypanel::display::PanelDisplay;
use joypanel::driver::{Axis, JoystickAdc, LedChannel, LedPwm};
use joypanel::PanelError;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;

/// Joystick fed from per-axis sample queues
#[derive(Default)]
pub struct FakeAdc {
    x: VecDeque<u16>,
    y: VecDeque<u16>,
    pub reads: Vec<Axis>,
}

impl FakeAdc {
    pub fn new(x: &[u16], y: &[u16]) -> Self {
        Self {
            x: x.iter().copied().collect(),
            y: y.iter().copied().collect(),
            reads: Vec::new(),
        }
    }

    pub fn push(&mut self, x: u16, y: u16) {
        self.x.push_back(x);
        self.y.push_back(y);
    }
}

impl JoystickAdc for FakeAdc {
    async fn read(&mut self, axis: Axis) -> Result<u16, PanelError> {
        self.reads.push(axis);
        let queue = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        queue.pop_front().ok_or(PanelError::Adc)
    }
}

#[derive(Debug, Default)]
pub struct PwmLog {
    pub red: Vec<u16>,
    pub blue: Vec<u16>,
    pub enabled: Option<bool>,
    pub enable_calls: usize,
}

/// PWM which records every call, cloned handles share one log
#[derive(Clone, Default)]
pub struct PwmProbe(pub Rc<RefCell<PwmLog>>);

impl PwmProbe {
    pub fn log(&self) -> std::cell::Ref<'_, PwmLog> {
        self.0.borrow()
    }
}

impl LedPwm for PwmProbe {
    fn set_duty(&mut self, channel: LedChannel, duty: u16) {
        let mut log = self.0.borrow_mut();
        match channel {
            LedChannel::Red => log.red.push(duty),
            LedChannel::Blue => log.blue.push(duty),
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        let mut log = self.0.borrow_mut();
        log.enabled = Some(enabled);
        log.enable_calls += 1;
    }
}

/// In-memory 128x64 monochrome panel
pub struct FrameBuffer {
    pixels: [[bool; WIDTH]; HEIGHT],
    /// Successful flushes
    pub flushes: usize,
    /// Fail the next flush with a bus error
    pub fail_next_flush: bool,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self {
            pixels: [[false; WIDTH]; HEIGHT],
            flushes: 0,
            fail_next_flush: false,
        }
    }
}

impl FrameBuffer {
    pub fn is_on(&self, x: i32, y: i32) -> bool {
        self.pixels[y as usize][x as usize]
    }

    /// All lit pixels inside `area`
    pub fn lit_in(&self, top_left: Point, size: Size) -> usize {
        let mut count = 0;
        for y in top_left.y..top_left.y + size.height as i32 {
            for x in top_left.x..top_left.x + size.width as i32 {
                if self.is_on(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Whether the 8x8 square at `top_left` is completely lit
    pub fn square_filled(&self, top_left: Point) -> bool {
        self.lit_in(top_left, Size::new(8, 8)) == 64
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if p.x >= 0 && p.y >= 0 && (p.x as usize) < WIDTH && (p.y as usize) < HEIGHT {
                self.pixels[p.y as usize][p.x as usize] = color.is_on();
            }
        }
        Ok(())
    }
}

impl PanelDisplay for FrameBuffer {
    fn flush_frame(&mut self) -> Result<(), DisplayError> {
        if self.fail_next_flush {
            self.fail_next_flush = false;
            return Err(DisplayError::BusWriteError);
        }
        self.flushes += 1;
        Ok(())
    }
}

/// Button whose falling edges come from a queue. Once the queue is empty the
/// pin waits forever, the same as an idle button.
#[derive(Clone, Default)]
pub struct EdgePin(pub Rc<RefCell<VecDeque<Result<(), ErrorKind>>>>);

impl EdgePin {
    pub fn press(&self) {
        self.0.borrow_mut().push_back(Ok(()));
    }

    pub fn fail(&self) {
        self.0.borrow_mut().push_back(Err(ErrorKind::Other));
    }

    pub fn pending(&self) -> usize {
        self.0.borrow().len()
    }
}

impl ErrorType for EdgePin {
    type Error = ErrorKind;
}

impl Wait for EdgePin {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        core::future::pending().await
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        core::future::pending().await
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        core::future::pending().await
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        poll_fn(|_| match self.0.borrow_mut().pop_front() {
            Some(edge) => Poll::Ready(edge),
            None => Poll::Pending,
        })
        .await
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        core::future::pending().await
    }
}
