//! Configuration constants for the LED firmware images

/// CPU frequency in Hz (8 MHz internal RC oscillator)
pub const CPU_FREQ_HZ: u32 = 8_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Level a pulsing LED tops out at
pub const FADE_LEVEL_MAX: u8 = 200;

/// Default win threshold, as Euclidean distance between pot and target vectors
pub const MATCH_THRESHOLD: u16 = 50;

/// EEPROM address of the boot counter byte used to seed the PRNG
pub const BOOT_COUNT_ADDR: u16 = 0x0000;

/// Matcher main-loop pacing in milliseconds
pub const MATCHER_POLL_MS: u16 = 10;

/// Charlieplex scan passes per animation column (about 25 ms per column)
pub const SCAN_PASSES: u8 = 4;

/// Night light on/off time per ADC count, in milliseconds
pub const NIGHT_LIGHT_STEP_MS: u16 = 10;
