use core::convert::Infallible;

use crate::hal::Uart;

/// Line-oriented status output over the UART. Formatted values go through
/// `ufmt` (`uwrite!`/`uwriteln!` with this as the writer).
pub struct SerialConsole {
    uart: Uart,
}

impl SerialConsole {
    pub fn new() -> Self {
        Self { uart: Uart::new() }
    }

    pub fn write_line(&mut self, s: &str) {
        self.uart.write_bytes(s.as_bytes());
        self.uart.write_bytes(b"\r\n");
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.uart.write_byte(byte);
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        self.uart.read_byte()
    }
}

impl ufmt::uWrite for SerialConsole {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.uart.write_bytes(s.as_bytes());
        Ok(())
    }
}

impl Default for SerialConsole {
    fn default() -> Self {
        Self::new()
    }
}
