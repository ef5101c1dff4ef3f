use embassy_time::Duration;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::{ContainsPoint, Rectangle};

/// The config struct for the control panel.
///
/// Every field has a default matching the stock board: a 128x64 OLED, 12-bit ADC
/// joystick and two PWM LED channels with wrap 4095.
#[derive(Clone, Debug)]
pub struct PanelConfig {
    pub debounce: DebounceConfig,
    pub pwm: PwmConfig,
    pub coordinates: CoordinateConfig,
    pub display: DisplayConfig,
    pub toggles: ToggleConfig,
    /// Delay between two render iterations
    pub frame_interval: Duration,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            debounce: DebounceConfig::default(),
            pwm: PwmConfig::default(),
            coordinates: CoordinateConfig::default(),
            display: DisplayConfig::default(),
            toggles: ToggleConfig::default(),
            frame_interval: Duration::from_millis(100),
        }
    }
}

/// Config for the shared button debounce window
#[derive(Clone, Copy, Debug)]
pub struct DebounceConfig {
    /// An edge is accepted only if strictly more than `window_us` microseconds
    /// passed since the last accepted edge, on any input.
    pub window_us: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self { window_us: 200_000 }
    }
}

/// Config for the PWM slice driving the red and blue LED channels
#[derive(Clone, Copy, Debug)]
pub struct PwmConfig {
    /// Integer clock divider of the PWM slice
    pub clock_divider: u8,
    /// Counter wrap value, also the largest duty value
    pub wrap: u16,
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self {
            clock_divider: 255,
            wrap: 4095,
        }
    }
}

/// Constants mapping raw ADC samples to the cursor's top-left pixel.
///
/// `x = raw_x / x_divisor + x_offset` and
/// `y = (y_invert_base - raw_y) / y_divisor + y_offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordinateConfig {
    /// Largest raw sample the ADC produces
    pub adc_max: u16,
    pub x_divisor: u16,
    pub x_offset: u16,
    pub y_invert_base: u16,
    pub y_divisor: u16,
    pub y_offset: u16,
    /// The cursor's top-left corner must stay in this rectangle
    pub bounds: Rectangle,
}

impl Default for CoordinateConfig {
    fn default() -> Self {
        Self {
            adc_max: 4095,
            x_divisor: 39,
            x_offset: 8,
            y_invert_base: 4096,
            y_divisor: 91,
            y_offset: 7,
            // x in [8, 113], y in [7, 52]
            bounds: Rectangle::new(Point::new(8, 7), Size::new(106, 46)),
        }
    }
}

impl CoordinateConfig {
    /// Check that both ends of the raw input range land inside `bounds`.
    ///
    /// The mapping is monotonic on each axis, so checking the extremes covers
    /// every sample in between. Use it when re-tuning the constants for another
    /// display size.
    pub fn is_bounded(&self) -> bool {
        if self.x_divisor == 0 || self.y_divisor == 0 || self.y_invert_base < self.adc_max {
            return false;
        }
        let corners = [
            crate::mapping::map_coordinates(self, 0, 0),
            crate::mapping::map_coordinates(self, self.adc_max, self.adc_max),
        ];
        corners.iter().all(|p| self.bounds.contains(*p))
    }
}

/// Display geometry
#[derive(Clone, Copy, Debug)]
pub struct DisplayConfig {
    /// Static frame drawn once at startup
    pub border: Rectangle,
    /// Outline toggled by the joystick button, mirroring the LED state
    pub highlight: Rectangle,
    /// Side length of the square cursor
    pub cursor_size: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            border: Rectangle::new(Point::new(3, 3), Size::new(122, 60)),
            highlight: Rectangle::new(Point::new(6, 6), Size::new(115, 55)),
            cursor_size: 8,
        }
    }
}

/// Initial state of the toggle flags after boot
#[derive(Clone, Copy, Debug)]
pub struct ToggleConfig {
    pub pwm_enabled: bool,
    pub led_enabled: bool,
    /// True if the fixed LED lights up when its pin is low
    pub led_low_active: bool,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            pwm_enabled: true,
            led_enabled: false,
            led_low_active: false,
        }
    }
}
