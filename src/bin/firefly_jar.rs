//! Jar of fireflies: five LEDs pulse up and down on their own randomized
//! schedules. Timer0 overflow drives the software PWM; the main loop steps
//! the faders once per PWM frame and dozes in between.
#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

use core::cell::RefCell;

use avr_device::atmega328p::{Peripherals, PORTB, TC0};
use avr_device::interrupt::{self, Mutex};
use panic_halt as _;

use ledkit_firmware::config::{BOOT_COUNT_ADDR, FADE_LEVEL_MAX};
use ledkit_firmware::fader::{FadePhase, Fader};
use ledkit_firmware::hal::gpio::PortWriter;
use ledkit_firmware::hal::timer::{Prescaler, Timer};
use ledkit_firmware::hal::{Eeprom, Power};
use ledkit_firmware::rng::XorShift32;
use ledkit_firmware::soft_pwm::{Polarity, SoftPwm};

// LEDs sit on PB0..PB4
const N_LEDS: usize = 5;
const LED_PINS: [u8; N_LEDS] = [0, 1, 2, 3, 4];

static PWM: Mutex<RefCell<SoftPwm<N_LEDS>>> =
    Mutex::new(RefCell::new(SoftPwm::new(LED_PINS, Polarity::ActiveHigh)));

#[avr_device::entry]
fn main() -> ! {
    let _dp = Peripherals::take().unwrap();

    let mut eeprom = Eeprom::new();
    let mut rng = XorShift32::from_boot_count(eeprom.bump_boot_count(BOOT_COUNT_ADDR));

    let mut port = PortWriter::<PORTB>::new();
    let pin_mask = interrupt::free(|cs| PWM.borrow(cs).borrow().pin_mask());
    port.set_outputs(pin_mask);

    // staggered starting points so the jar doesn't pulse in lockstep
    let mut faders = [
        Fader::new(FADE_LEVEL_MAX, 0, 180, FadePhase::Off),
        Fader::new(FADE_LEVEL_MAX, FADE_LEVEL_MAX, 10, FadePhase::On),
        Fader::new(FADE_LEVEL_MAX, 10, 200, FadePhase::PulseUp),
        Fader::new(FADE_LEVEL_MAX, 10, 220, FadePhase::PulseDown),
        Fader::new(FADE_LEVEL_MAX, FADE_LEVEL_MAX, 50, FadePhase::On),
    ];

    let mut timer = Timer::<TC0>::new();
    timer.start(Prescaler::Direct);
    timer.enable_overflow_interrupt();

    let mut power = Power::new();
    unsafe { avr_device::interrupt::enable() };

    let mut last_frame = 0u8;
    loop {
        let frame = interrupt::free(|cs| PWM.borrow(cs).borrow().frames());
        if frame != last_frame {
            last_frame = frame;
            let mut levels = [0u8; N_LEDS];
            for (level, fader) in levels.iter_mut().zip(faders.iter_mut()) {
                *level = fader.step(&mut rng);
            }
            interrupt::free(|cs| PWM.borrow(cs).borrow_mut().set_levels(levels));
        }
        // next overflow wakes us
        power.enter_idle_mode();
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
