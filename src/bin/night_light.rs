//! LDR night light: an LED on PB1 blinks slower in the dark and faster in
//! the light. The photoresistor divider hangs off PB0 so it only draws
//! current while powered, and its tap feeds ADC3.
#![no_std]
#![no_main]

use avr_device::atmega328p::{Peripherals, PORTB, PORTC};
use panic_halt as _;
use ufmt::uwriteln;

use ledkit_firmware::config::NIGHT_LIGHT_STEP_MS;
use ledkit_firmware::drivers::{SerialConsole, StatusLed};
use ledkit_firmware::hal::adc::{Adc, AdcChannel, AdcPrescaler};
use ledkit_firmware::hal::gpio::{Input, Output, Pin};
use ledkit_firmware::hal::timer::delay_ms;

const LDR: AdcChannel = AdcChannel::Adc3;

#[avr_device::entry]
fn main() -> ! {
    let _dp = Peripherals::take().unwrap();

    // power the LDR voltage divider
    let mut supply = Pin::<PORTB, 0, Output>::default().into_output();
    supply.set_high();
    let _ldr_tap = Pin::<PORTC, 3, Input>::default().into_input();

    let mut adc = Adc::new();
    adc.set_prescaler(AdcPrescaler::Div128);

    let mut console = SerialConsole::new();
    unsafe { avr_device::interrupt::enable() };

    let mut led = StatusLed::new(Pin::<PORTB, 1, Output>::default().into_output());

    // five flashes to signal power-on
    led.flash(5, || delay_ms(250)).ok();

    // first conversion settles the mux; discard it
    let _ = adc.read_channel8(LDR);

    loop {
        let reading = adc.read_channel8(LDR);
        uwriteln!(console, "ldr: {}", reading).ok();

        led.on().ok();
        pause(reading);
        led.off().ok();
        pause(reading);
    }
}

fn pause(reading: u8) {
    for _ in 0..reading {
        delay_ms(NIGHT_LIGHT_STEP_MS);
    }
}
