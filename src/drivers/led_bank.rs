use crate::hal::gpio::{PortRegisters, PortWriter};
use crate::hal::timer::delay_ms;

/// A group of LEDs on one port, addressed as a bit mask. Port writes stay
/// inside the mask so co-resident pin functions survive.
pub struct LedBank<PORT> {
    port: PortWriter<PORT>,
    mask: u8,
}

impl<PORT: PortRegisters> LedBank<PORT> {
    pub fn new(mask: u8) -> Self {
        let mut port = PortWriter::new();
        port.set_outputs(mask);
        port.write_port_masked(mask, 0);
        Self { port, mask }
    }

    pub fn mask(&self) -> u8 {
        self.mask
    }

    pub fn set_pattern(&mut self, pattern: u8) {
        self.port.write_port_masked(self.mask, pattern);
    }

    pub fn set_all(&mut self, on: bool) {
        self.set_pattern(if on { self.mask } else { 0 });
    }

    pub fn toggle_all(&mut self) {
        self.port.toggle(self.mask);
    }

    /// Blocking attention flash, used as win feedback.
    pub fn flash(&mut self, times: u8, interval_ms: u16) {
        for _ in 0..times {
            self.set_all(true);
            delay_ms(interval_ms);
            self.set_all(false);
            delay_ms(interval_ms);
        }
    }
}
