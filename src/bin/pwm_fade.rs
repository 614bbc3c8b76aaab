//! Hardware PWM exerciser: one LED on OC0A (PD6), sourced from the pin, so
//! the compare register reads as an inverted brightness. Steps through
//! three fixed levels at power-on, then ramps forever.
#![no_std]
#![no_main]

use avr_device::atmega328p::{Peripherals, PORTD};
use panic_halt as _;

use ledkit_firmware::hal::gpio::{Output, Pin};
use ledkit_firmware::hal::pwm::{OutputMode, Pwm, PwmChannel};
use ledkit_firmware::hal::timer::{delay_ms, Prescaler};

const RAMP_STEP_MS: u16 = 10;

#[avr_device::entry]
fn main() -> ! {
    let _dp = Peripherals::take().unwrap();

    let _led = Pin::<PORTD, 6, Output>::default().into_output();

    let mut pwm = Pwm::new(OutputMode::Inverting);
    pwm.enable(PwmChannel::Oc0a, Prescaler::Div8);

    // fixed levels as a power-on check: full, half, dark
    for _ in 0..5 {
        pwm.set_duty(PwmChannel::Oc0a, 0);
        delay_ms(250);
        pwm.set_duty(PwmChannel::Oc0a, 127);
        delay_ms(250);
        pwm.set_duty(PwmChannel::Oc0a, 255);
        delay_ms(250);
    }

    loop {
        for duty in 1..255u8 {
            pwm.set_duty(PwmChannel::Oc0a, duty);
            delay_ms(RAMP_STEP_MS);
        }
        for duty in (1..255u8).rev() {
            pwm.set_duty(PwmChannel::Oc0a, duty);
            delay_ms(RAMP_STEP_MS);
        }
    }
}
