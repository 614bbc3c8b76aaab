//! Color matching game. Two RGB LED clusters on PD2..PD7 show a hidden
//! target color and the player's pot mix; Timer2 overflow runs the software
//! PWM for all six channels. A speaker pitches up as the mix closes in, and
//! a button cycles the difficulty.
#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

use core::cell::RefCell;

use avr_device::atmega328p::{Peripherals, PORTB, PORTD, TC2};
use avr_device::interrupt::{self, Mutex};
use panic_halt as _;
use ufmt::uwriteln;

use ledkit_firmware::config::{BOOT_COUNT_ADDR, MATCHER_POLL_MS};
use ledkit_firmware::drivers::{ButtonEvent, ButtonHandler, LedBank, SerialConsole, Speaker};
use ledkit_firmware::hal::adc::{Adc, AdcChannel};
use ledkit_firmware::hal::gpio::{Input, Output, Pin, PortWriter};
use ledkit_firmware::hal::timer::{delay_ms, Prescaler, Timer};
use ledkit_firmware::hal::Eeprom;
use ledkit_firmware::matcher::{tone_for_distance, MatchGame};
use ledkit_firmware::rng::XorShift32;
use ledkit_firmware::soft_pwm::{Polarity, SoftPwm};

// Target cluster on PD7/PD6/PD5, player cluster on PD4/PD3/PD2,
// channel order R, G, B within each.
const PWM_PINS: [u8; 6] = [7, 6, 5, 4, 3, 2];
const TARGET_BASE: usize = 0;
const USER_BASE: usize = 3;

const POTS: [AdcChannel; 3] = [AdcChannel::Adc0, AdcChannel::Adc1, AdcChannel::Adc2];

static PWM: Mutex<RefCell<SoftPwm<6>>> =
    Mutex::new(RefCell::new(SoftPwm::new(PWM_PINS, Polarity::ActiveHigh)));

#[avr_device::entry]
fn main() -> ! {
    let _dp = Peripherals::take().unwrap();

    let mut console = SerialConsole::new();
    let mut eeprom = Eeprom::new();
    let mut rng = XorShift32::from_boot_count(eeprom.bump_boot_count(BOOT_COUNT_ADDR));
    let mut game = MatchGame::new(&mut rng);

    let mut port = PortWriter::<PORTD>::new();
    let led_mask = interrupt::free(|cs| PWM.borrow(cs).borrow().pin_mask());
    port.set_outputs(led_mask);

    let mut adc = Adc::new();
    let mut button = ButtonHandler::new(Pin::<PORTB, 0, Input>::default().into_pull_up_input());
    let _speaker_pin = Pin::<PORTB, 1, Output>::default().into_output();
    let mut speaker = Speaker::new();

    show_target(&game);

    let mut timer = Timer::<TC2>::new();
    timer.start(Prescaler::Direct);
    timer.enable_overflow_interrupt();
    unsafe { avr_device::interrupt::enable() };

    console.write_line("color matcher ready");

    let mut user = [0u8; 3];
    loop {
        for (level, &pot) in user.iter_mut().zip(POTS.iter()) {
            *level = adc.read_channel8(pot);
        }
        interrupt::free(|cs| {
            let mut pwm = PWM.borrow(cs).borrow_mut();
            for (i, &level) in user.iter().enumerate() {
                pwm.set_level(USER_BASE + i, level);
            }
        });

        if let Some(ButtonEvent::Pressed) = button.poll() {
            let difficulty = game.cycle_difficulty();
            uwriteln!(console, "threshold: {}", difficulty.threshold()).ok();
        }

        let dist_sq = game.distance_squared(&user);
        speaker.play(tone_for_distance(dist_sq));

        if game.is_win(&user) {
            speaker.stop();
            uwriteln!(console, "match! d2={}", dist_sq).ok();
            win_flash(&mut timer, led_mask);
            game.randomize(&mut rng);
            show_target(&game);
        }

        delay_ms(MATCHER_POLL_MS);
    }
}

fn show_target(game: &MatchGame) {
    let target = game.target();
    interrupt::free(|cs| {
        let mut pwm = PWM.borrow(cs).borrow_mut();
        for (i, &level) in target.iter().enumerate() {
            pwm.set_level(TARGET_BASE + i, level);
        }
    });
}

/// The PWM handler owns the port; park it for the duration of the flash.
fn win_flash(timer: &mut Timer<TC2>, led_mask: u8) {
    timer.disable_overflow_interrupt();
    let mut bank = LedBank::<PORTD>::new(led_mask);
    bank.flash(6, 100);
    timer.enable_overflow_interrupt();
}

#[avr_device::interrupt(atmega328p)]
fn TIMER2_OVF() {
    interrupt::free(|cs| {
        let mut pwm = PWM.borrow(cs).borrow_mut();
        let out = pwm.tick();
        let mask = pwm.pin_mask();
        PortWriter::<PORTD>::new().write_port_masked(mask, out);
    });
}
