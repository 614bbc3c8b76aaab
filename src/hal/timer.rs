use avr_device::atmega328p::{TC0, TC2};
use core::marker::PhantomData;

use crate::config::CPU_FREQ_HZ;

#[derive(Clone, Copy)]
pub enum Prescaler {
    Stop,
    Direct,
    Div8,
    Div64,
    Div256,
    Div1024,
}

/// The two 8-bit timers share a register layout but not their clock-select
/// encodings (Timer2 has the extra /32 and /128 taps), so each maps
/// `Prescaler` itself.
pub trait OverflowTimer {
    fn configure_normal(prescaler: Prescaler);
    fn stop();
    fn set_counter(value: u8);
    fn counter() -> u8;
    fn enable_overflow_interrupt();
    fn disable_overflow_interrupt();
}

impl OverflowTimer for TC0 {
    fn configure_normal(prescaler: Prescaler) {
        let cs = match prescaler {
            Prescaler::Stop => 0x00,
            Prescaler::Direct => 0x01,
            Prescaler::Div8 => 0x02,
            Prescaler::Div64 => 0x03,
            Prescaler::Div256 => 0x04,
            Prescaler::Div1024 => 0x05,
        };
        unsafe {
            let p = TC0::ptr();
            (*p).tccr0a.write(|w| w.bits(0)); // normal mode, OC0A/OC0B disconnected
            (*p).tcnt0.write(|w| w.bits(0));
            (*p).tccr0b.write(|w| w.bits(cs));
        }
    }

    fn stop() {
        unsafe {
            (*TC0::ptr()).tccr0b.modify(|r, w| w.bits(r.bits() & !0x07));
        }
    }

    fn set_counter(value: u8) {
        unsafe {
            (*TC0::ptr()).tcnt0.write(|w| w.bits(value));
        }
    }

    fn counter() -> u8 {
        unsafe { (*TC0::ptr()).tcnt0.read().bits() }
    }

    fn enable_overflow_interrupt() {
        unsafe {
            (*TC0::ptr()).timsk0.modify(|r, w| w.bits(r.bits() | 0x01));
        }
    }

    fn disable_overflow_interrupt() {
        unsafe {
            (*TC0::ptr()).timsk0.modify(|r, w| w.bits(r.bits() & !0x01));
        }
    }
}

impl OverflowTimer for TC2 {
    fn configure_normal(prescaler: Prescaler) {
        let cs = match prescaler {
            Prescaler::Stop => 0x00,
            Prescaler::Direct => 0x01,
            Prescaler::Div8 => 0x02,
            Prescaler::Div64 => 0x04,
            Prescaler::Div256 => 0x06,
            Prescaler::Div1024 => 0x07,
        };
        unsafe {
            let p = TC2::ptr();
            (*p).tccr2a.write(|w| w.bits(0));
            (*p).tcnt2.write(|w| w.bits(0));
            (*p).tccr2b.write(|w| w.bits(cs));
        }
    }

    fn stop() {
        unsafe {
            (*TC2::ptr()).tccr2b.modify(|r, w| w.bits(r.bits() & !0x07));
        }
    }

    fn set_counter(value: u8) {
        unsafe {
            (*TC2::ptr()).tcnt2.write(|w| w.bits(value));
        }
    }

    fn counter() -> u8 {
        unsafe { (*TC2::ptr()).tcnt2.read().bits() }
    }

    fn enable_overflow_interrupt() {
        unsafe {
            (*TC2::ptr()).timsk2.modify(|r, w| w.bits(r.bits() | 0x01));
        }
    }

    fn disable_overflow_interrupt() {
        unsafe {
            (*TC2::ptr()).timsk2.modify(|r, w| w.bits(r.bits() & !0x01));
        }
    }
}

pub struct Timer<T> {
    _timer: PhantomData<T>,
}

impl<T: OverflowTimer> Timer<T> {
    pub fn new() -> Self {
        T::configure_normal(Prescaler::Stop);
        Self { _timer: PhantomData }
    }

    pub fn start(&mut self, prescaler: Prescaler) {
        T::configure_normal(prescaler);
    }

    pub fn stop(&mut self) {
        T::stop();
    }

    pub fn set_counter(&mut self, value: u8) {
        T::set_counter(value);
    }

    pub fn counter(&self) -> u8 {
        T::counter()
    }

    pub fn enable_overflow_interrupt(&mut self) {
        T::enable_overflow_interrupt();
    }

    pub fn disable_overflow_interrupt(&mut self) {
        T::disable_overflow_interrupt();
    }
}

impl<T: OverflowTimer> Default for Timer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cycle-counted busy wait. The timers stay free for PWM duty, which is
/// where most of the images put them.
pub fn delay_ms(ms: u16) {
    for _ in 0..ms {
        delay_us(1000);
    }
}

pub fn delay_us(us: u16) {
    // roughly four cycles per iteration at opt-level "s"
    let iters = (CPU_FREQ_HZ / 1_000_000) * us as u32 / 4;
    for _ in 0..iters {
        avr_device::asm::nop();
    }
}
