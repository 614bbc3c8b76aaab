use avr_device::atmega328p::EEPROM;

/// On-chip EEPROM, byte at a time. The only persistent state in this
/// repository is the PRNG boot counter.
pub struct Eeprom {
    _private: (),
}

impl Eeprom {
    pub fn new() -> Self {
        Self { _private: () }
    }

    pub fn read_byte(&mut self, addr: u16) -> u8 {
        unsafe {
            let p = EEPROM::ptr();
            // wait out any write in flight (EEPE)
            while (*p).eecr.read().bits() & 0x02 != 0 {}
            (*p).eear.write(|w| w.bits(addr));
            (*p).eecr.modify(|r, w| w.bits(r.bits() | 0x01)); // EERE
            (*p).eedr.read().bits()
        }
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) {
        unsafe {
            let p = EEPROM::ptr();
            while (*p).eecr.read().bits() & 0x02 != 0 {}
            (*p).eear.write(|w| w.bits(addr));
            (*p).eedr.write(|w| w.bits(value));
            // EEMPE then EEPE within four cycles; an interrupt in between
            // would miss the window
            avr_device::interrupt::free(|_| {
                (*p).eecr.write(|w| w.bits(0x04));
                (*p).eecr.write(|w| w.bits(0x04 | 0x02));
            });
        }
    }

    /// Skip the ~3.4ms write when the byte already matches.
    pub fn update_byte(&mut self, addr: u16, value: u8) {
        if self.read_byte(addr) != value {
            self.write_byte(addr, value);
        }
    }

    /// Read the boot counter and write it back incremented. The returned
    /// pre-increment value seeds the PRNG so consecutive boots differ.
    pub fn bump_boot_count(&mut self, addr: u16) -> u8 {
        let count = self.read_byte(addr);
        self.write_byte(addr, count.wrapping_add(1));
        count
    }
}

impl Default for Eeprom {
    fn default() -> Self {
        Self::new()
    }
}
