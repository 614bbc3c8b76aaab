pub mod button_handler;
pub mod led_bank;
pub mod serial_console;
pub mod speaker;
pub mod status_led;

pub use button_handler::{ButtonEvent, ButtonHandler};
pub use led_bank::LedBank;
pub use serial_console::SerialConsole;
pub use speaker::Speaker;
pub use status_led::StatusLed;
