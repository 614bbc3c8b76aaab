//! Hardware PWM on Timer0 (fast PWM, 0xFF top).
//!
//! The software PWM engine covers the multi-LED images; this is for the
//! single-channel ones where an output-compare pin does all the work.

use avr_device::atmega328p::TC0;
use core::marker::PhantomData;

use super::timer::Prescaler;

/// Compare output sense.
#[derive(Clone, Copy)]
pub enum OutputMode {
    /// OCR at 255 is full brightness
    NonInverting,
    /// OCR at 0 is full brightness (LED sourced from the pin)
    Inverting,
}

#[derive(Clone, Copy)]
pub enum PwmChannel {
    Oc0a,
    Oc0b,
}

pub struct Pwm<T> {
    _timer: PhantomData<T>,
    mode: OutputMode,
}

impl Pwm<TC0> {
    pub fn new(mode: OutputMode) -> Self {
        // Disable timer interrupts during initialization
        unsafe {
            (*TC0::ptr()).timsk0.write(|w| w.bits(0));
        }
        Self {
            _timer: PhantomData,
            mode,
        }
    }

    /// Connect a compare output and start the timer. The matching pin
    /// (OC0A = PD6, OC0B = PD5) must already be configured as an output.
    pub fn enable(&mut self, channel: PwmChannel, prescaler: Prescaler) {
        let com = match (channel, self.mode) {
            (PwmChannel::Oc0a, OutputMode::NonInverting) => 0x80,
            (PwmChannel::Oc0a, OutputMode::Inverting) => 0xC0,
            (PwmChannel::Oc0b, OutputMode::NonInverting) => 0x20,
            (PwmChannel::Oc0b, OutputMode::Inverting) => 0x30,
        };
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
            // fast PWM, TOP = 0xFF
            (*p).tccr0a.modify(|r, w| w.bits((r.bits() & 0x0C) | com | 0x03));
            (*p).tccr0b.write(|w| w.bits(cs));
        }
    }

    pub fn set_duty(&mut self, channel: PwmChannel, duty: u8) {
        unsafe {
            let p = TC0::ptr();
            match channel {
                PwmChannel::Oc0a => (*p).ocr0a.write(|w| w.bits(duty)),
                PwmChannel::Oc0b => (*p).ocr0b.write(|w| w.bits(duty)),
            }
        }
    }

    pub fn disable(&mut self) {
        unsafe {
            let p = TC0::ptr();
            (*p).tccr0a.write(|w| w.bits(0));
            (*p).tccr0b.write(|w| w.bits(0));
        }
    }
}
