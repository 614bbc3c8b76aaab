use avr_device::atmega328p::TC1;

use crate::config::CPU_FREQ_HZ;

const PRESCALE: u32 = 8;

/// Piezo speaker on OC1A (PB1), Timer1 in CTC mode with the pin toggling
/// on compare match. The caller sets the pin as an output.
pub struct Speaker {
    _private: (),
}

impl Speaker {
    pub fn new() -> Self {
        unsafe {
            let p = TC1::ptr();
            // CTC on OCR1A, OC1A toggles, clock stopped
            (*p).tccr1a.write(|w| w.bits(0x40));
            (*p).tccr1b.write(|w| w.bits(0x08));
        }
        Self { _private: () }
    }

    /// Play a tone; frequency clamped to 31..=20000 Hz.
    pub fn play(&mut self, freq_hz: u16) {
        let freq = freq_hz.clamp(31, 20_000) as u32;
        // the pin toggles per match, so one output period spans two
        // compare windows
        let top = (CPU_FREQ_HZ / (2 * PRESCALE * freq)).saturating_sub(1) as u16;
        unsafe {
            let p = TC1::ptr();
            (*p).ocr1a.write(|w| w.bits(top));
            (*p).tccr1b.write(|w| w.bits(0x08 | 0x02)); // clk/8
        }
    }

    pub fn stop(&mut self) {
        unsafe {
            let p = TC1::ptr();
            (*p).tccr1b.write(|w| w.bits(0x08));
            (*p).tcnt1.write(|w| w.bits(0));
        }
    }
}

impl Default for Speaker {
    fn default() -> Self {
        Self::new()
    }
}
