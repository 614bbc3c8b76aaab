pub mod adc;
pub mod eeprom;
pub mod gpio;
pub mod power;
pub mod pwm;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use adc::{Adc, AdcChannel};
pub use eeprom::Eeprom;
pub use gpio::{Input, Output, Pin, PortWriter};
pub use power::{Power, SleepMode};
pub use pwm::{OutputMode, Pwm, PwmChannel};
pub use timer::{delay_ms, Prescaler, Timer};
pub use uart::Uart;
