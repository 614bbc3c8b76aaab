use avr_device::atmega328p::{PORTB, PORTC, PORTD};
use core::convert::Infallible;
use core::marker::PhantomData;

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

/// Register-level access to one I/O port. The three AVR ports name their
/// registers differently (DDRB/PORTB/PINB, ...), so the accessors are
/// generated per port.
pub trait PortRegisters {
    fn write_ddr(bits: u8);
    fn modify_ddr(f: impl FnOnce(u8) -> u8);
    fn write_port(bits: u8);
    fn modify_port(f: impl FnOnce(u8) -> u8);
    fn read_pins() -> u8;
    /// Writing ones to PINx toggles the matching PORTx bits.
    fn toggle(mask: u8);
}

macro_rules! impl_port {
    ($PORT:ident, $ddr:ident, $port:ident, $pin:ident) => {
        impl PortRegisters for $PORT {
            #[inline]
            fn write_ddr(bits: u8) {
                unsafe { (*$PORT::ptr()).$ddr.write(|w| w.bits(bits)) }
            }

            #[inline]
            fn modify_ddr(f: impl FnOnce(u8) -> u8) {
                unsafe { (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(f(r.bits()))) }
            }

            #[inline]
            fn write_port(bits: u8) {
                unsafe { (*$PORT::ptr()).$port.write(|w| w.bits(bits)) }
            }

            #[inline]
            fn modify_port(f: impl FnOnce(u8) -> u8) {
                unsafe { (*$PORT::ptr()).$port.modify(|r, w| w.bits(f(r.bits()))) }
            }

            #[inline]
            fn read_pins() -> u8 {
                unsafe { (*$PORT::ptr()).$pin.read().bits() }
            }

            #[inline]
            fn toggle(mask: u8) {
                unsafe { (*$PORT::ptr()).$pin.write(|w| w.bits(mask)) }
            }
        }
    };
}

impl_port!(PORTB, ddrb, portb, pinb);
impl_port!(PORTC, ddrc, portc, pinc);
impl_port!(PORTD, ddrd, portd, pind);

/// A single pin with its direction tracked in the type.
#[derive(Debug)]
pub struct Pin<PORT, const P: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT, const P: u8, MODE> Default for Pin<PORT, P, MODE> {
    fn default() -> Self {
        Self {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

impl<PORT: PortRegisters, const P: u8, MODE: PinMode> Pin<PORT, P, MODE> {
    pub fn into_output(self) -> Pin<PORT, P, Output> {
        PORT::modify_ddr(|r| r | (1 << P));
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }

    pub fn into_input(self) -> Pin<PORT, P, Input> {
        PORT::modify_ddr(|r| r & !(1 << P));
        PORT::modify_port(|r| r & !(1 << P));
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }

    pub fn into_pull_up_input(self) -> Pin<PORT, P, Input> {
        PORT::modify_ddr(|r| r & !(1 << P));
        PORT::modify_port(|r| r | (1 << P));
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

impl<PORT: PortRegisters, const P: u8> Pin<PORT, P, Output> {
    #[inline]
    pub fn set_high(&mut self) {
        PORT::modify_port(|r| r | (1 << P));
    }

    #[inline]
    pub fn set_low(&mut self) {
        PORT::modify_port(|r| r & !(1 << P));
    }

    #[inline]
    pub fn toggle(&mut self) {
        PORT::toggle(1 << P);
    }
}

impl<PORT: PortRegisters, const P: u8> Pin<PORT, P, Input> {
    #[inline]
    pub fn is_high(&self) -> bool {
        PORT::read_pins() & (1 << P) != 0
    }

    #[inline]
    pub fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<PORT: PortRegisters, const P: u8> embedded_hal::digital::v2::OutputPin for Pin<PORT, P, Output> {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        Pin::set_low(self);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        Pin::set_high(self);
        Ok(())
    }
}

impl<PORT: PortRegisters, const P: u8> embedded_hal::digital::v2::ToggleableOutputPin
    for Pin<PORT, P, Output>
{
    type Error = Infallible;

    fn toggle(&mut self) -> Result<(), Infallible> {
        Pin::toggle(self);
        Ok(())
    }
}

impl<PORT: PortRegisters, const P: u8> embedded_hal::digital::v2::InputPin for Pin<PORT, P, Input> {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(Pin::is_high(self))
    }

    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(Pin::is_low(self))
    }
}

/// Byte-wide port access for code that owns several pins at once (the
/// software PWM handlers and the charlieplex scanner). Writes stay inside
/// the caller's mask so UART and other pin functions on the same port are
/// left alone.
pub struct PortWriter<PORT> {
    _port: PhantomData<PORT>,
}

impl<PORT: PortRegisters> PortWriter<PORT> {
    pub fn new() -> Self {
        Self { _port: PhantomData }
    }

    #[inline]
    pub fn set_outputs(&mut self, mask: u8) {
        PORT::modify_ddr(|r| r | mask);
    }

    #[inline]
    pub fn write_ddr_masked(&mut self, mask: u8, bits: u8) {
        PORT::modify_ddr(|r| (r & !mask) | (bits & mask));
    }

    #[inline]
    pub fn write_port_masked(&mut self, mask: u8, bits: u8) {
        PORT::modify_port(|r| (r & !mask) | (bits & mask));
    }

    #[inline]
    pub fn toggle(&mut self, mask: u8) {
        PORT::toggle(mask);
    }

    #[inline]
    pub fn read_pins(&self) -> u8 {
        PORT::read_pins()
    }
}

impl<PORT: PortRegisters> Default for PortWriter<PORT> {
    fn default() -> Self {
        Self::new()
    }
}
