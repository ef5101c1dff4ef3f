use display_interface::DisplayError;
use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

/// A buffered monochrome display.
///
/// Drawing only touches the in-memory frame; [`PanelDisplay::flush_frame`]
/// pushes the whole buffer to the panel.
pub trait PanelDisplay: DrawTarget<Color = BinaryColor, Error = DisplayError> {
    fn flush_frame(&mut self) -> Result<(), DisplayError>;
}

/// Draw an axis-aligned rectangle, either filled or as a 1px outline.
pub fn draw_rect<D: PanelDisplay>(
    display: &mut D,
    area: Rectangle,
    color: BinaryColor,
    filled: bool,
) -> Result<(), DisplayError> {
    let style = if filled {
        PrimitiveStyle::with_fill(color)
    } else {
        PrimitiveStyle::with_stroke(color, 1)
    };
    area.into_styled(style).draw(display)
}

#[cfg(feature = "ssd1306")]
mod ssd1306_impl {
    use display_interface::{DisplayError, WriteOnlyDataCommand};
    use ssd1306::Ssd1306;
    use ssd1306::mode::BufferedGraphicsMode;
    use ssd1306::size::DisplaySize;

    use super::PanelDisplay;

    impl<DI, SIZE> PanelDisplay for Ssd1306<DI, SIZE, BufferedGraphicsMode<SIZE>>
    where
        DI: WriteOnlyDataCommand,
        SIZE: DisplaySize,
    {
        fn flush_frame(&mut self) -> Result<(), DisplayError> {
            self.flush()
        }
    }
}
