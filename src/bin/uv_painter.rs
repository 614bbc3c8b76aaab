//! Charlieplexed six-LED scanner on PB0..PB2. Walks the banner and sweep
//! sequences, lighting at most one LED at a time; persistence of vision
//! fills in the columns.
#![no_std]
#![no_main]

use avr_device::atmega328p::{Peripherals, PORTB};
use panic_halt as _;

use ledkit_firmware::charlieplex::{
    is_lit, PinDrive, ALL_OFF, BANNER_FRAMES, CHARLIE_PINS, LED_DRIVE, N_LEDS, SCAN_FRAMES,
};
use ledkit_firmware::config::SCAN_PASSES;
use ledkit_firmware::hal::gpio::PortWriter;
use ledkit_firmware::hal::timer::delay_ms;

#[avr_device::entry]
fn main() -> ! {
    let _dp = Peripherals::take().unwrap();

    let mut port = PortWriter::<PORTB>::new();
    apply(&mut port, ALL_OFF);

    // the threshold creeps up one notch per rotation; with full-scale
    // tables that blanks the display for a beat every 256 rotations
    let mut level = 0u8;
    loop {
        play(&mut port, &BANNER_FRAMES, level);
        play(&mut port, &SCAN_FRAMES, level);
        level = level.wrapping_add(1);
    }
}

fn play(port: &mut PortWriter<PORTB>, frames: &[[u8; N_LEDS]], level: u8) {
    for frame in frames {
        for _ in 0..SCAN_PASSES {
            show_frame(port, frame, level);
        }
    }
}

/// One scan pass: every LED gets an equal 1ms slot, lit or not, so column
/// brightness doesn't depend on how many LEDs are showing.
fn show_frame(port: &mut PortWriter<PORTB>, frame: &[u8; N_LEDS], level: u8) {
    for led in 0..N_LEDS {
        // break before make, or two paths conduct for an instant
        apply(port, ALL_OFF);
        if is_lit(frame, led, level) {
            apply(port, LED_DRIVE[led]);
        }
        delay_ms(1);
    }
}

fn apply(port: &mut PortWriter<PORTB>, drive: PinDrive) {
    port.write_ddr_masked(CHARLIE_PINS, drive.ddr);
    port.write_port_masked(CHARLIE_PINS, drive.port);
}
