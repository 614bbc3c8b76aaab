//! Charlieplexed six-LED display on three port pins.
//!
//! Each LED lights by driving exactly two pins (one sourcing high, one
//! sinking low) while the third stays a floating input so no unintended
//! path conducts. Only one LED is ever on at a time; the scanner walks the
//! table fast enough that a whole column reads as lit.

pub const N_LEDS: usize = 6;

/// Port bits used by the display (PB0..PB2).
pub const CHARLIE_PINS: u8 = 0b0000_0111;

/// DDR/PORT values, low three bits, that light exactly one LED.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PinDrive {
    pub ddr: u8,
    pub port: u8,
}

/// One entry per LED.
pub const LED_DRIVE: [PinDrive; N_LEDS] = [
    PinDrive { ddr: 0b011, port: 0b001 }, // LED0: PB0 sources, PB1 sinks
    PinDrive { ddr: 0b011, port: 0b010 }, // LED1: PB1 sources, PB0 sinks
    PinDrive { ddr: 0b110, port: 0b010 }, // LED2: PB1 sources, PB2 sinks
    PinDrive { ddr: 0b110, port: 0b100 }, // LED3: PB2 sources, PB1 sinks
    PinDrive { ddr: 0b101, port: 0b001 }, // LED4: PB0 sources, PB2 sinks
    PinDrive { ddr: 0b101, port: 0b100 }, // LED5: PB2 sources, PB0 sinks
];

/// All three pins floating, nothing lit.
pub const ALL_OFF: PinDrive = PinDrive { ddr: 0, port: 0 };

/// Bouncing single-LED sweep.
pub const SCAN_FRAMES: [[u8; N_LEDS]; 10] = [
    [255, 0, 0, 0, 0, 0],
    [0, 255, 0, 0, 0, 0],
    [0, 0, 255, 0, 0, 0],
    [0, 0, 0, 255, 0, 0],
    [0, 0, 0, 0, 255, 0],
    [0, 0, 0, 0, 0, 255],
    [0, 0, 0, 0, 255, 0],
    [0, 0, 0, 255, 0, 0],
    [0, 0, 255, 0, 0, 0],
    [0, 255, 0, 0, 0, 0],
];

/// Banner animation, one column per entry.
pub const BANNER_FRAMES: [[u8; N_LEDS]; 28] = [
    [255, 255, 255, 255, 255, 255],
    [0, 0, 0, 255, 0, 255],
    [0, 0, 0, 255, 0, 255],
    [0, 0, 0, 255, 255, 255],
    [0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0],
    [255, 255, 255, 255, 0, 0],
    [0, 0, 255, 0, 255, 0],
    [0, 0, 255, 0, 0, 255],
    [0, 0, 255, 0, 255, 0],
    [255, 255, 255, 255, 0, 0],
    [0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0],
    [0, 255, 255, 255, 255, 255],
    [255, 255, 0, 0, 0, 0],
    [255, 0, 0, 0, 0, 0],
    [255, 255, 0, 0, 0, 0],
    [0, 255, 255, 255, 255, 255],
    [0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0],
    [255, 255, 255, 255, 255, 255],
    [255, 0, 0, 0, 0, 0],
    [255, 0, 0, 0, 0, 0],
    [255, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0],
];

/// Whether `led` shows in `frame` at the given brightness threshold.
pub fn is_lit(frame: &[u8; N_LEDS], led: usize, level: u8) -> bool {
    frame[led] > level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_drives_one_source_sink_pair() {
        for (i, drive) in LED_DRIVE.iter().enumerate() {
            assert_eq!(drive.ddr & !CHARLIE_PINS, 0, "LED{} leaves the bus", i);
            assert_eq!(drive.port & !CHARLIE_PINS, 0, "LED{} leaves the bus", i);
            assert_eq!(drive.ddr.count_ones(), 2, "LED{} must drive two pins", i);
            assert_eq!(
                (drive.port & drive.ddr).count_ones(),
                1,
                "LED{} must source from exactly one pin",
                i
            );
            // the floating pin keeps its pull-up off, or a phantom path
            // would conduct through neighbouring LEDs
            assert_eq!(drive.port & !drive.ddr, 0, "LED{} floats with pull-up", i);
        }
    }

    #[test]
    fn entries_are_pairwise_distinct() {
        for i in 0..N_LEDS {
            for j in i + 1..N_LEDS {
                assert_ne!(LED_DRIVE[i], LED_DRIVE[j]);
            }
        }
    }

    #[test]
    fn idle_entry_floats_everything() {
        assert_eq!(ALL_OFF.ddr, 0);
        assert_eq!(ALL_OFF.port, 0);
    }

    #[test]
    fn scan_sweep_bounces() {
        // exactly one LED per frame, out and back without repeating the ends
        for frame in SCAN_FRAMES.iter() {
            assert_eq!(frame.iter().filter(|&&level| level > 0).count(), 1);
        }
        for (forward, backward) in SCAN_FRAMES[1..5].iter().zip(SCAN_FRAMES[6..].iter().rev()) {
            assert_eq!(forward, backward);
        }
    }

    #[test]
    fn threshold_picks_lit_leds() {
        let frame = [255, 0, 0, 0, 255, 0];
        assert!(is_lit(&frame, 0, 0));
        assert!(is_lit(&frame, 4, 254));
        assert!(!is_lit(&frame, 1, 0));
        // at the counter's top even a full-on LED blanks for that pass
        assert!(!is_lit(&frame, 0, 255));
    }
}
