//! GPIO driver

use stratum_core::{ErrorCode, ErrorManager, Subsystem};
use stratum_hal::{GpioBackend, GpioHal, Pin, PinConfig, PinMode};

/// Application-facing GPIO driver
pub struct GpioDriver<B> {
    hal: GpioHal<B>,
}

impl<B: GpioBackend> GpioDriver<B> {
    /// Create a driver over `backend`
    ///
    /// The backend stays inactive until [`Subsystem::init`] runs.
    pub fn new(backend: B) -> Self {
        Self {
            hal: GpioHal::new(backend),
        }
    }

    /// Release the backend
    pub fn deinit(&mut self) -> Result<(), ErrorCode> {
        self.hal.unbind();
        Ok(())
    }

    /// Configure a pin as push-pull, no pull, high speed in `mode`
    pub fn configure(&mut self, pin: Pin, mode: PinMode) -> Result<(), ErrorCode> {
        self.hal.configure(pin, PinConfig::driver_default(mode));
        Ok(())
    }

    /// Drive a pin high
    pub fn set(&mut self, pin: Pin) -> Result<(), ErrorCode> {
        self.hal.write(pin, true);
        Ok(())
    }

    /// Drive a pin low
    pub fn clear(&mut self, pin: Pin) -> Result<(), ErrorCode> {
        self.hal.write(pin, false);
        Ok(())
    }

    /// Toggle a pin
    pub fn toggle(&mut self, pin: Pin) -> Result<(), ErrorCode> {
        self.hal.toggle(pin);
        Ok(())
    }

    /// Read a pin level
    pub fn read(&mut self, pin: Pin) -> Result<bool, ErrorCode> {
        Ok(self.hal.read(pin))
    }

    /// Check if init has bound the backend
    pub fn is_initialized(&self) -> bool {
        self.hal.is_bound()
    }

    /// Access the backend
    pub fn backend(&self) -> &B {
        self.hal.backend()
    }
}

impl<B: GpioBackend> Subsystem for GpioDriver<B> {
    fn name(&self) -> &'static str {
        "gpio"
    }

    fn init(&mut self, _errors: &mut ErrorManager) -> Result<(), ErrorCode> {
        self.hal.bind();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;
    use stratum_hal::{OutputType, Port, Speed};

    /// Mock GPIO backend for testing
    #[derive(Default)]
    struct MockGpio {
        high: u16,
        configs: Vec<(Pin, PinConfig), 8>,
        toggles: u32,
    }

    impl GpioBackend for MockGpio {
        fn configure(&mut self, pin: Pin, config: PinConfig) {
            let _ = self.configs.push((pin, config));
        }

        fn write(&mut self, pin: Pin, high: bool) {
            if high {
                self.high |= 1 << pin.number();
            } else {
                self.high &= !(1 << pin.number());
            }
        }

        fn read(&mut self, pin: Pin) -> bool {
            self.high & (1 << pin.number()) != 0
        }

        fn toggle(&mut self, pin: Pin) {
            self.toggles += 1;
            self.high ^= 1 << pin.number();
        }
    }

    const PIN: Pin = Pin::new(Port::C, 4);

    fn initialized() -> GpioDriver<MockGpio> {
        let mut errors = ErrorManager::new();
        let mut gpio = GpioDriver::new(MockGpio::default());
        gpio.init(&mut errors).unwrap();
        gpio
    }

    #[test]
    fn test_uninitialized_is_silent() {
        let mut gpio = GpioDriver::new(MockGpio::default());
        assert!(!gpio.is_initialized());

        assert_eq!(gpio.set(PIN), Ok(()));
        assert_eq!(gpio.toggle(PIN), Ok(()));
        assert_eq!(gpio.read(PIN), Ok(false));
        assert_eq!(gpio.backend().high, 0);
        assert_eq!(gpio.backend().toggles, 0);
    }

    #[test]
    fn test_configure_uses_driver_defaults() {
        let mut gpio = initialized();
        gpio.configure(PIN, PinMode::Output).unwrap();

        let (pin, config) = gpio.backend().configs[0];
        assert_eq!(pin, PIN);
        assert_eq!(config.mode, PinMode::Output);
        assert_eq!(config.output_type, OutputType::PushPull);
        assert_eq!(config.speed, Speed::High);
    }

    #[test]
    fn test_set_clear_toggle_read() {
        let mut gpio = initialized();

        gpio.set(PIN).unwrap();
        assert_eq!(gpio.read(PIN), Ok(true));

        gpio.clear(PIN).unwrap();
        assert_eq!(gpio.read(PIN), Ok(false));

        gpio.toggle(PIN).unwrap();
        assert_eq!(gpio.read(PIN), Ok(true));
    }

    #[test]
    fn test_deinit_releases_backend() {
        let mut gpio = initialized();
        assert!(gpio.is_initialized());
        gpio.deinit().unwrap();
        assert!(!gpio.is_initialized());

        gpio.set(PIN).unwrap();
        assert_eq!(gpio.backend().high, 0);
    }
}
