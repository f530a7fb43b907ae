//! Heartbeat LED
//!
//! Binds the application's heartbeat to one GPIO output.

use stratum_core::Heartbeat;
use stratum_hal::{GpioBackend, Pin};

use crate::gpio::GpioDriver;

/// Heartbeat that toggles an LED pin
pub struct HeartbeatLed<'a, B> {
    gpio: &'a mut GpioDriver<B>,
    pin: Pin,
}

impl<'a, B: GpioBackend> HeartbeatLed<'a, B> {
    pub fn new(gpio: &'a mut GpioDriver<B>, pin: Pin) -> Self {
        Self { gpio, pin }
    }

    /// Get the LED pin
    pub fn pin(&self) -> Pin {
        self.pin
    }
}

impl<B: GpioBackend> Heartbeat for HeartbeatLed<'_, B> {
    fn toggle(&mut self) {
        // GPIO toggles cannot fail once the driver is up
        let _ = self.gpio.toggle(self.pin);
    }
}
