//! On-target test image: re-runs the library's property checks on real
//! hardware and reports over the serial console at 9600 baud.
#![no_std]
#![no_main]

use avr_device::atmega328p::Peripherals;
use panic_halt as _;

use ledkit_firmware::charlieplex::{ALL_OFF, CHARLIE_PINS, LED_DRIVE};
use ledkit_firmware::colorwheel::rgb_for_input;
use ledkit_firmware::expect;
use ledkit_firmware::fader::{FadePhase, Fader};
use ledkit_firmware::hal::timer::delay_ms;
use ledkit_firmware::hal::Power;
use ledkit_firmware::matcher::distance_squared;
use ledkit_firmware::rng::XorShift32;
use ledkit_firmware::soft_pwm::{Polarity, SoftPwm};
use ledkit_firmware::testing::{TestCase, TestResult, TestRunner};

struct SoftPwmDuty;
impl TestCase for SoftPwmDuty {
    fn name(&self) -> &'static str {
        "soft pwm duty"
    }

    fn run(&self) -> TestResult {
        for level in [0u8, 37, 200, 255] {
            let mut pwm = SoftPwm::new([0], Polarity::ActiveHigh);
            pwm.set_level(0, level);
            let mut asserted = 0u16;
            for _ in 0..256u16 {
                if pwm.tick() & 1 != 0 {
                    asserted += 1;
                }
            }
            expect!(asserted == level as u16, "duty != level");
        }
        TestResult::Pass
    }
}

struct FaderBounds;
impl TestCase for FaderBounds {
    fn name(&self) -> &'static str {
        "fader bounds"
    }

    fn run(&self) -> TestResult {
        let mut rng = XorShift32::new(0xDEAD_BEEF);
        let mut fader = Fader::new(200, 10, 220, FadePhase::PulseDown);
        for _ in 0..2_000u16 {
            expect!(fader.step(&mut rng) <= 200, "level out of range");
        }
        TestResult::Pass
    }
}

struct MatchDistance;
impl TestCase for MatchDistance {
    fn name(&self) -> &'static str {
        "match distance"
    }

    fn run(&self) -> TestResult {
        expect!(
            distance_squared(&[150, 0, 30], &[150, 0, 30]) == 0,
            "exact match must measure zero"
        );
        expect!(
            distance_squared(&[0, 0, 0], &[255, 255, 255]) == 195_075,
            "full-range distance wrong"
        );
        TestResult::Pass
    }
}

struct CharlieTable;
impl TestCase for CharlieTable {
    fn name(&self) -> &'static str {
        "charlieplex table"
    }

    fn run(&self) -> TestResult {
        for drive in LED_DRIVE.iter() {
            expect!(drive.ddr & !CHARLIE_PINS == 0, "entry leaves the bus");
            expect!(drive.ddr.count_ones() == 2, "entry must drive two pins");
            expect!(
                (drive.port & drive.ddr).count_ones() == 1,
                "entry must source from one pin"
            );
            expect!(drive.port & !drive.ddr == 0, "floating pin pulled up");
        }
        expect!(ALL_OFF.ddr == 0 && ALL_OFF.port == 0, "idle entry drives");
        TestResult::Pass
    }
}

struct WheelCorners;
impl TestCase for WheelCorners {
    fn name(&self) -> &'static str {
        "color wheel corners"
    }

    fn run(&self) -> TestResult {
        expect!(rgb_for_input(0) == [255, 0, 0], "red corner");
        expect!(rgb_for_input(85) == [0, 255, 0], "green corner");
        expect!(rgb_for_input(159) == [0, 0, 255], "blue corner");
        expect!(rgb_for_input(255) == [255, 0, 0], "wheel must close");
        TestResult::Pass
    }
}

#[avr_device::entry]
fn main() -> ! {
    let _dp = Peripherals::take().unwrap();
    unsafe { avr_device::interrupt::enable() };

    let mut runner = TestRunner::new();
    runner.run_suite(
        "ledkit",
        &[
            &SoftPwmDuty,
            &FaderBounds,
            &MatchDistance,
            &CharlieTable,
            &WheelCorners,
        ],
    );
    runner.summary();

    // let the console drain before going quiet
    delay_ms(100);
    let mut power = Power::new();
    loop {
        power.enter_power_down();
    }
}
