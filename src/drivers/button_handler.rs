use crate::hal::gpio::{Input, Pin, PortRegisters};

const DEBOUNCE_TICKS: u8 = 5;

#[derive(Copy, Clone, Debug)]
pub enum ButtonEvent {
    Pressed,
    Released,
}

/// Debounced active-low push button. `poll` is called once per main-loop
/// pass, so the debounce window scales with the loop period.
pub struct ButtonHandler<PORT, const P: u8> {
    pin: Pin<PORT, P, Input>,
    pressed: bool,
    debounce: u8,
}

impl<PORT: PortRegisters, const P: u8> ButtonHandler<PORT, P> {
    pub fn new(pin: Pin<PORT, P, Input>) -> Self {
        Self {
            pin,
            pressed: false,
            debounce: 0,
        }
    }

    pub fn poll(&mut self) -> Option<ButtonEvent> {
        let raw = self.pin.is_low();
        if raw != self.pressed {
            self.debounce = self.debounce.saturating_add(1);
            if self.debounce >= DEBOUNCE_TICKS {
                self.pressed = raw;
                self.debounce = 0;
                return Some(if raw {
                    ButtonEvent::Pressed
                } else {
                    ButtonEvent::Released
                });
            }
        } else {
            self.debounce = 0;
        }
        None
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}
