//! Pot-selected color lamp. A common-anode RGB LED on PB0..PB2 follows a
//! single pot on ADC2 around the color wheel; Timer0 overflow runs the
//! software PWM with active-low outputs.
#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

use core::cell::RefCell;

use avr_device::atmega328p::{Peripherals, PORTB, TC0};
use avr_device::interrupt::{self, Mutex};
use panic_halt as _;

use ledkit_firmware::colorwheel::rgb_for_input;
use ledkit_firmware::hal::adc::{Adc, AdcChannel};
use ledkit_firmware::hal::gpio::PortWriter;
use ledkit_firmware::hal::timer::{delay_ms, Prescaler, Timer};
use ledkit_firmware::soft_pwm::{Polarity, SoftPwm};

// red on PB2, green on PB1, blue on PB0; common anode
const RGB_PINS: [u8; 3] = [2, 1, 0];

const POT: AdcChannel = AdcChannel::Adc2;
const POLL_MS: u16 = 150;

static PWM: Mutex<RefCell<SoftPwm<3>>> =
    Mutex::new(RefCell::new(SoftPwm::new(RGB_PINS, Polarity::ActiveLow)));

#[avr_device::entry]
fn main() -> ! {
    let _dp = Peripherals::take().unwrap();

    let mut port = PortWriter::<PORTB>::new();
    let pin_mask = interrupt::free(|cs| PWM.borrow(cs).borrow().pin_mask());
    port.set_outputs(pin_mask);
    // park the outputs high so the LED starts dark
    port.write_port_masked(pin_mask, pin_mask);

    let mut adc = Adc::new();

    let mut timer = Timer::<TC0>::new();
    timer.start(Prescaler::Direct);
    timer.enable_overflow_interrupt();
    unsafe { avr_device::interrupt::enable() };

    // lamp test: the three primaries in turn
    for _ in 0..3 {
        for levels in [[255, 0, 0], [0, 255, 0], [0, 0, 255]] {
            interrupt::free(|cs| PWM.borrow(cs).borrow_mut().set_levels(levels));
            delay_ms(250);
        }
    }

    loop {
        let value = adc.read_channel8(POT);
        let rgb = rgb_for_input(value);
        interrupt::free(|cs| PWM.borrow(cs).borrow_mut().set_levels(rgb));
        delay_ms(POLL_MS);
    }
}

#[avr_device::interrupt(atmega328p)]
fn TIMER0_OVF() {
    interrupt::free(|cs| {
        let mut pwm = PWM.borrow(cs).borrow_mut();
        let out = pwm.tick();
        let mask = pwm.pin_mask();
        PortWriter::<PORTB>::new().write_port_masked(mask, out);
    });
}
