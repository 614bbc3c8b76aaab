#![allow(clippy::missing_safety_doc)]

use avr_device::atmega328p::USART0;
use avr_device::interrupt::Mutex;
use core::cell::RefCell;

use crate::config::{CPU_FREQ_HZ, UART_BAUD};

// Buffer size must be power of 2 for efficient masking
const BUFFER_SIZE: usize = 32;
const BUFFER_MASK: usize = BUFFER_SIZE - 1;

const UBRR_VALUE: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

pub struct Buffer {
    data: [u8; BUFFER_SIZE],
    write_idx: usize,
    read_idx: usize,
}

impl Buffer {
    const fn new() -> Self {
        Self {
            data: [0; BUFFER_SIZE],
            write_idx: 0,
            read_idx: 0,
        }
    }

    fn write(&mut self, byte: u8) -> bool {
        let next_write = (self.write_idx + 1) & BUFFER_MASK;
        if next_write != self.read_idx {
            self.data[self.write_idx] = byte;
            self.write_idx = next_write;
            true
        } else {
            false
        }
    }

    fn read(&mut self) -> Option<u8> {
        if self.read_idx != self.write_idx {
            let byte = self.data[self.read_idx];
            self.read_idx = (self.read_idx + 1) & BUFFER_MASK;
            Some(byte)
        } else {
            None
        }
    }
}

// Global buffers for the interrupt handlers
static TX_BUFFER: Mutex<RefCell<Buffer>> = Mutex::new(RefCell::new(Buffer::new()));
static RX_BUFFER: Mutex<RefCell<Buffer>> = Mutex::new(RefCell::new(Buffer::new()));

/// Interrupt-driven USART0 at 9600 8N1. Callers must have global
/// interrupts enabled or the transmit buffer never drains.
pub struct Uart {
    _private: (),
}

impl Uart {
    pub fn new() -> Self {
        unsafe {
            let p = USART0::ptr();
            (*p).ubrr0.write(|w| w.bits(UBRR_VALUE));
            // 8 data bits, no parity, 1 stop bit
            (*p).ucsr0c.write(|w| w.bits(0x06));
            // Enable RX, TX and the RX-complete interrupt
            (*p).ucsr0b.write(|w| w.bits(0x98));
        }
        Self { _private: () }
    }

    pub fn write_byte(&mut self, byte: u8) {
        loop {
            let queued = avr_device::interrupt::free(|cs| {
                TX_BUFFER.borrow(cs).borrow_mut().write(byte)
            });
            // Arm the data-register-empty interrupt so the buffer drains
            unsafe {
                (*USART0::ptr()).ucsr0b.modify(|r, w| w.bits(r.bits() | 0x20));
            }
            if queued {
                break;
            }
            // buffer full: spin until the drain interrupt frees a slot
        }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        avr_device::interrupt::free(|cs| RX_BUFFER.borrow(cs).borrow_mut().read())
    }
}

impl Default for Uart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "avr")]
#[avr_device::interrupt(atmega328p)]
fn USART_RX() {
    let byte = unsafe { (*USART0::ptr()).udr0.read().bits() };
    avr_device::interrupt::free(|cs| {
        // a full buffer drops the byte; nothing here retries
        let _ = RX_BUFFER.borrow(cs).borrow_mut().write(byte);
    });
}

#[cfg(target_arch = "avr")]
#[avr_device::interrupt(atmega328p)]
fn USART_UDRE() {
    avr_device::interrupt::free(|cs| {
        if let Some(byte) = TX_BUFFER.borrow(cs).borrow_mut().read() {
            unsafe {
                (*USART0::ptr()).udr0.write(|w| w.bits(byte));
            }
        } else {
            // buffer empty: disarm until the next write
            unsafe {
                (*USART0::ptr()).ucsr0b.modify(|r, w| w.bits(r.bits() & !0x20));
            }
        }
    });
}
