//! GPIO backend for STM32F4
//!
//! Pins must be registered before use; operations on unregistered pins
//! are ignored, matching the `GpioBackend` contract.

use embassy_stm32::gpio::{Flex, Pull as FlexPull, Speed as FlexSpeed};
use heapless::Vec;
use stratum_core::ErrorCode;
use stratum_hal::{GpioBackend, OutputType, Pin, PinConfig, PinMode, Pull, Speed};

/// Number of pins one backend can manage
pub const MAX_PINS: usize = 16;

/// GPIO backend over embassy `Flex` pins
pub struct Stm32Gpio {
    pins: Vec<(Pin, Flex<'static>), MAX_PINS>,
}

impl Default for Stm32Gpio {
    fn default() -> Self {
        Self::new()
    }
}

fn speed(speed: Speed) -> FlexSpeed {
    match speed {
        Speed::Low => FlexSpeed::Low,
        Speed::Medium => FlexSpeed::Medium,
        Speed::High => FlexSpeed::High,
        Speed::VeryHigh => FlexSpeed::VeryHigh,
    }
}

fn pull(pull: Pull) -> FlexPull {
    match pull {
        Pull::None => FlexPull::None,
        Pull::Up => FlexPull::Up,
        Pull::Down => FlexPull::Down,
    }
}

impl Stm32Gpio {
    pub const fn new() -> Self {
        Self { pins: Vec::new() }
    }

    /// Hand a pin to the backend under its board name
    ///
    /// `pin` must name the same physical pin `flex` was created from.
    pub fn register(&mut self, pin: Pin, flex: Flex<'static>) -> Result<(), ErrorCode> {
        if self.pins.iter().any(|(p, _)| *p == pin) {
            return Err(ErrorCode::InvalidParameter);
        }
        self.pins
            .push((pin, flex))
            .map_err(|_| ErrorCode::OutOfMemory)
    }

    /// Number of registered pins
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    fn find(&mut self, pin: Pin) -> Option<&mut Flex<'static>> {
        self.pins
            .iter_mut()
            .find(|(p, _)| *p == pin)
            .map(|(_, flex)| flex)
    }
}

impl GpioBackend for Stm32Gpio {
    fn configure(&mut self, pin: Pin, config: PinConfig) {
        let Some(flex) = self.find(pin) else {
            return;
        };
        match (config.mode, config.output_type) {
            (PinMode::Input, _) => flex.set_as_input(pull(config.pull)),
            (PinMode::Output, OutputType::PushPull) => flex.set_as_output(speed(config.speed)),
            (PinMode::Output, OutputType::OpenDrain) => {
                flex.set_as_input_output(speed(config.speed))
            }
            (PinMode::Analog, _) => flex.set_as_analog(),
            // Alternate functions belong to the peripheral driver that owns the pin
            (PinMode::Alternate, _) => {}
        }
    }

    fn write(&mut self, pin: Pin, high: bool) {
        if let Some(flex) = self.find(pin) {
            if high {
                flex.set_high();
            } else {
                flex.set_low();
            }
        }
    }

    fn read(&mut self, pin: Pin) -> bool {
        self.find(pin).map(|flex| flex.is_high()).unwrap_or(false)
    }

    fn toggle(&mut self, pin: Pin) {
        if let Some(flex) = self.find(pin) {
            flex.toggle();
        }
    }
}
