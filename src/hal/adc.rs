use avr_device::atmega328p::ADC;
use core::convert::Infallible;

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum AdcChannel {
    Adc0 = 0,
    Adc1 = 1,
    Adc2 = 2,
    Adc3 = 3,
    Adc4 = 4,
    Adc5 = 5,
    Adc6 = 6,
    Adc7 = 7,
}

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum AdcReference {
    Aref = 0,          // External AREF
    Avcc = 1,          // AVCC with external cap at AREF
    Internal1_1V = 3,  // Internal 1.1V bandgap
}

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum AdcPrescaler {
    Div2 = 0,
    Div4 = 2,
    Div8 = 3,
    Div16 = 4,
    Div32 = 5,
    Div64 = 6,
    Div128 = 7,
}

pub struct Adc {
    _private: (),
}

impl Adc {
    pub fn new() -> Self {
        unsafe {
            let p = ADC::ptr();
            // Enable ADC, prescaler div64 (125kHz @ 8MHz)
            (*p).adcsra.write(|w| w.bits(0x86));
            // Reference voltage = AVCC, right adjusted
            (*p).admux.write(|w| w.bits(0x40));
        }
        Self { _private: () }
    }

    pub fn set_reference(&mut self, reference: AdcReference) {
        unsafe {
            let p = ADC::ptr();
            (*p).admux.modify(|r, w| {
                w.bits((r.bits() & 0x3F) | ((reference as u8) << 6))
            });
        }
    }

    pub fn set_prescaler(&mut self, prescaler: AdcPrescaler) {
        unsafe {
            let p = ADC::ptr();
            (*p).adcsra.modify(|r, w| {
                w.bits((r.bits() & 0xF8) | (prescaler as u8))
            });
        }
    }

    /// Select a channel and start a conversion without waiting for it.
    pub fn start(&mut self, channel: AdcChannel) {
        unsafe {
            let p = ADC::ptr();
            (*p).admux.modify(|r, w| {
                w.bits((r.bits() & 0xF0) | (channel as u8))
            });
            (*p).adcsra.modify(|r, w| w.bits(r.bits() | 0x40));
        }
    }

    /// Result of the conversion started by [`Adc::start`], once ADSC clears.
    pub fn poll(&mut self) -> nb::Result<u16, Infallible> {
        unsafe {
            let p = ADC::ptr();
            if (*p).adcsra.read().bits() & 0x40 != 0 {
                return Err(nb::Error::WouldBlock);
            }
            Ok((*p).adc.read().bits())
        }
    }

    /// Blocking 10-bit read.
    pub fn read_channel(&mut self, channel: AdcChannel) -> u16 {
        unsafe {
            // right adjust
            (*ADC::ptr()).admux.modify(|r, w| w.bits(r.bits() & !0x20));
        }
        self.start(channel);
        nb::block!(self.poll()).unwrap()
    }

    /// Blocking 8-bit read: left adjust the result and keep only ADCH.
    pub fn read_channel8(&mut self, channel: AdcChannel) -> u8 {
        unsafe {
            (*ADC::ptr()).admux.modify(|r, w| w.bits(r.bits() | 0x20));
        }
        self.start(channel);
        (nb::block!(self.poll()).unwrap() >> 8) as u8
    }
}

impl Default for Adc {
    fn default() -> Self {
        Self::new()
    }
}
