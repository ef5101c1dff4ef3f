use embedded_hal::digital::OutputPin;

/// The gpio driver is a wrapper for the embedded-hal digital output pin trait.
/// It wraps the low-active and high-active pins, and remembers the last state it drove,
/// so that callers never have to read the pin back.
pub(crate) struct OutputController<P: OutputPin> {
    pin: P,
    low_active: bool,
    active: bool,
}

impl<P: OutputPin> OutputController<P> {
    /// Create a new OutputController instance and drive the pin to `active`
    pub fn new(pin: P, low_active: bool, active: bool) -> Self {
        let mut controller = Self {
            pin,
            low_active,
            active,
        };
        controller.set(active);
        controller
    }

    /// Drive the pin to the given logical state
    pub fn set(&mut self, active: bool) {
        // Active: low-active pins go low, high-active pins go high
        let high = active != self.low_active;
        if high {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
        self.active = active;
    }

    /// The last driven logical state
    pub fn is_active(&self) -> bool {
        self.active
    }
}
