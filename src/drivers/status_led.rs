use embedded_hal::digital::v2::OutputPin;

/// Minimal indicator LED over any `OutputPin`. Pacing comes from the
/// caller so this stays free of timer assumptions (and testable off
/// hardware).
pub struct StatusLed<P> {
    pin: P,
}

impl<P: OutputPin> StatusLed<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn on(&mut self) -> Result<(), P::Error> {
        self.pin.set_high()
    }

    pub fn off(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()
    }

    /// Flash `times`, calling `pause` after every edge.
    pub fn flash<D: FnMut()>(&mut self, times: u8, mut pause: D) -> Result<(), P::Error> {
        for _ in 0..times {
            self.pin.set_high()?;
            pause();
            self.pin.set_low()?;
            pause();
        }
        Ok(())
    }

    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::pin::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    #[test]
    fn flash_produces_paired_edges() {
        let expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ];
        let mut led = StatusLed::new(PinMock::new(&expectations));

        let mut pauses = 0;
        led.flash(2, || pauses += 1).unwrap();
        assert_eq!(pauses, 4);

        led.release().done();
    }

    #[test]
    fn on_then_off() {
        let expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ];
        let mut led = StatusLed::new(PinMock::new(&expectations));
        led.on().unwrap();
        led.off().unwrap();
        led.release().done();
    }
}
