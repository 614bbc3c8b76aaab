use avr_device::atmega328p::CPU;

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum SleepMode {
    Idle = 0,
    AdcNoiseReduction = 1,
    PowerDown = 2,
    PowerSave = 3,
    Standby = 6,
    ExtendedStandby = 7,
}

pub struct Power {
    _private: (),
}

impl Power {
    pub fn new() -> Self {
        Self { _private: () }
    }

    #[inline]
    pub fn set_sleep_mode(&mut self, mode: SleepMode) {
        unsafe {
            let p = CPU::ptr();
            (*p).smcr.modify(|r, w| {
                w.bits((r.bits() & !0x0E) | ((mode as u8) << 1))
            });
        }
    }

    #[inline]
    pub fn enable_sleep(&mut self) {
        unsafe {
            let p = CPU::ptr();
            (*p).smcr.modify(|r, w| w.bits(r.bits() | 0x01));
        }
    }

    #[inline]
    pub fn disable_sleep(&mut self) {
        unsafe {
            let p = CPU::ptr();
            (*p).smcr.modify(|r, w| w.bits(r.bits() & !0x01));
        }
    }

    #[inline]
    pub fn sleep(&mut self) {
        unsafe { avr_device::asm::sleep() }
    }

    /// Doze until the next interrupt; timers keep running.
    pub fn enter_idle_mode(&mut self) {
        self.set_sleep_mode(SleepMode::Idle);
        self.enable_sleep();
        self.sleep();
        self.disable_sleep();
    }

    /// Deep sleep; only a reset or external event comes back from this.
    pub fn enter_power_down(&mut self) {
        self.set_sleep_mode(SleepMode::PowerDown);
        self.enable_sleep();
        self.sleep();
        self.disable_sleep();
    }
}

impl Default for Power {
    fn default() -> Self {
        Self::new()
    }
}
