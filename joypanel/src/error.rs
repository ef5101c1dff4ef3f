use display_interface::DisplayError;

/// Errors of the control panel
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// Drawing to or flushing the display failed
    Display(DisplayError),
    /// ADC conversion failed
    Adc,
}

impl From<DisplayError> for PanelError {
    fn from(e: DisplayError) -> Self {
        PanelError::Display(e)
    }
}
