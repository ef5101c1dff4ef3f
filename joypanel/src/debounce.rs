use crate::config::DebounceConfig;

/// A single suppression window shared by every button.
///
/// An accepted edge on any input restarts the window for all of them, so two
/// presses on different buttons within the window count as one.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceGate {
    window_us: u64,
    /// Timestamp of the last accepted edge, in microseconds since boot
    last_accepted_us: u64,
}

impl DebounceGate {
    pub fn new(config: &DebounceConfig) -> Self {
        Self {
            window_us: config.window_us,
            last_accepted_us: 0,
        }
    }

    /// Returns true and records `event_time_us` if it is more than the window
    /// past the last accepted edge. Otherwise the state is left untouched.
    pub fn accept(&mut self, event_time_us: u64) -> bool {
        if event_time_us.saturating_sub(self.last_accepted_us) > self.window_us {
            self.last_accepted_us = event_time_us;
            true
        } else {
            false
        }
    }

    pub fn last_accepted_us(&self) -> u64 {
        self.last_accepted_us
    }
}
