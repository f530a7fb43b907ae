//! GPIO abstractions
//!
//! Pin addressing, pin configuration, the backend trait implemented per
//! chip, and the dispatch wrapper used by the GPIO driver.

use stratum_core::ErrorCode;

/// Highest pin number within a port
pub const MAX_PIN_NUMBER: u8 = 15;

/// GPIO port
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Port {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl Port {
    /// Create a port from its index (A = 0)
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Port::A),
            1 => Some(Port::B),
            2 => Some(Port::C),
            3 => Some(Port::D),
            4 => Some(Port::E),
            5 => Some(Port::F),
            6 => Some(Port::G),
            7 => Some(Port::H),
            _ => None,
        }
    }

    /// Get the port index (A = 0)
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// A GPIO pin: port plus pin number 0-15
///
/// The raw encoding used by the board ABI is `port << 8 | number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin {
    port: Port,
    number: u8,
}

impl Pin {
    /// Create a pin for board constants
    ///
    /// Panics if `number` is above [`MAX_PIN_NUMBER`]; in a `const`
    /// context this is a compile error. Use [`Pin::try_new`] for values
    /// known only at runtime.
    pub const fn new(port: Port, number: u8) -> Self {
        assert!(number <= MAX_PIN_NUMBER, "pin number out of range");
        Self { port, number }
    }

    /// Create a pin, rejecting out-of-range numbers
    pub fn try_new(port: Port, number: u8) -> Result<Self, ErrorCode> {
        if number > MAX_PIN_NUMBER {
            return Err(ErrorCode::InvalidParameter);
        }
        Ok(Self { port, number })
    }

    /// Decode a raw `port << 8 | number` value
    pub fn from_raw(raw: u32) -> Result<Self, ErrorCode> {
        let port = u8::try_from(raw >> 8)
            .ok()
            .and_then(Port::from_index)
            .ok_or(ErrorCode::InvalidParameter)?;
        Self::try_new(port, (raw & 0xFF) as u8)
    }

    /// Encode as `port << 8 | number`
    pub const fn raw(self) -> u32 {
        ((self.port as u32) << 8) | self.number as u32
    }

    /// Get the port
    pub const fn port(self) -> Port {
        self.port
    }

    /// Get the pin number within the port
    pub const fn number(self) -> u8 {
        self.number
    }
}

/// Pin mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    #[default]
    Input,
    Output,
    Alternate,
    Analog,
}

/// Output driver type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputType {
    #[default]
    PushPull,
    OpenDrain,
}

/// Internal pull resistor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    #[default]
    None,
    Up,
    Down,
}

/// Output slew rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    #[default]
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Full pin configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    pub mode: PinMode,
    pub output_type: OutputType,
    pub pull: Pull,
    pub speed: Speed,
}

impl PinConfig {
    /// Configuration used by the driver: push-pull, no pull, high speed
    pub const fn driver_default(mode: PinMode) -> Self {
        Self {
            mode,
            output_type: OutputType::PushPull,
            pull: Pull::None,
            speed: Speed::High,
        }
    }
}

/// GPIO backend
///
/// One implementation per hardware target. Calls never fail at this
/// level; pins the backend does not manage are ignored.
pub trait GpioBackend {
    /// Apply a configuration to a pin
    fn configure(&mut self, pin: Pin, config: PinConfig);

    /// Drive an output pin
    fn write(&mut self, pin: Pin, high: bool);

    /// Read the level of a pin
    ///
    /// Takes `&mut self` because some backends latch the input first.
    fn read(&mut self, pin: Pin) -> bool;

    /// Toggle an output pin
    fn toggle(&mut self, pin: Pin);
}

/// GPIO dispatch wrapper
///
/// Holds the backend selected at construction. Until [`GpioHal::bind`]
/// is called every operation is a no-op and reads return `false`.
pub struct GpioHal<B> {
    backend: B,
    bound: bool,
}

impl<B: GpioBackend> GpioHal<B> {
    /// Wrap a backend; it stays inactive until bound
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            bound: false,
        }
    }

    /// Activate the backend
    pub fn bind(&mut self) {
        self.bound = true;
    }

    /// Deactivate the backend
    pub fn unbind(&mut self) {
        self.bound = false;
    }

    /// Check if the backend is active
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Configure a pin
    pub fn configure(&mut self, pin: Pin, config: PinConfig) {
        if self.bound {
            self.backend.configure(pin, config);
        }
    }

    /// Drive a pin
    pub fn write(&mut self, pin: Pin, high: bool) {
        if self.bound {
            self.backend.write(pin, high);
        }
    }

    /// Read a pin; `false` while unbound
    pub fn read(&mut self, pin: Pin) -> bool {
        if self.bound {
            self.backend.read(pin)
        } else {
            false
        }
    }

    /// Toggle a pin
    pub fn toggle(&mut self, pin: Pin) {
        if self.bound {
            self.backend.toggle(pin);
        }
    }

    /// Access the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Access the backend mutably
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that tracks one output level per port pin
    #[derive(Default)]
    struct MockGpio {
        levels: u16,
        configured: u16,
    }

    impl GpioBackend for MockGpio {
        fn configure(&mut self, pin: Pin, _config: PinConfig) {
            self.configured |= 1 << pin.number();
        }

        fn write(&mut self, pin: Pin, high: bool) {
            if high {
                self.levels |= 1 << pin.number();
            } else {
                self.levels &= !(1 << pin.number());
            }
        }

        fn read(&mut self, pin: Pin) -> bool {
            self.levels & (1 << pin.number()) != 0
        }

        fn toggle(&mut self, pin: Pin) {
            self.levels ^= 1 << pin.number();
        }
    }

    const LED: Pin = Pin::new(Port::B, 0);

    #[test]
    fn test_pin_encoding() {
        let pin = Pin::new(Port::A, 10);
        assert_eq!(pin.raw(), 0x000A);
        assert_eq!(Pin::new(Port::B, 0).raw(), 0x0100);
        assert_eq!(Pin::from_raw(0x0203), Ok(Pin::new(Port::C, 3)));
    }

    #[test]
    fn test_pin_validation() {
        assert_eq!(Pin::try_new(Port::A, 16), Err(ErrorCode::InvalidParameter));
        assert_eq!(Pin::from_raw(0x0010), Err(ErrorCode::InvalidParameter));
        assert_eq!(Pin::from_raw(0x0800), Err(ErrorCode::InvalidParameter));
        assert_eq!(Pin::from_raw(0x1_0000), Err(ErrorCode::InvalidParameter));
        assert!(Pin::try_new(Port::H, 15).is_ok());
    }

    #[test]
    fn test_unbound_is_noop() {
        let mut hal = GpioHal::new(MockGpio::default());
        assert!(!hal.is_bound());

        hal.configure(LED, PinConfig::driver_default(PinMode::Output));
        hal.write(LED, true);
        hal.toggle(LED);

        assert_eq!(hal.backend().levels, 0);
        assert_eq!(hal.backend().configured, 0);
        hal.backend_mut().levels = 1;
        assert!(!hal.read(LED));
    }

    #[test]
    fn test_bound_dispatches() {
        let mut hal = GpioHal::new(MockGpio::default());
        hal.bind();

        hal.configure(LED, PinConfig::driver_default(PinMode::Output));
        assert_eq!(hal.backend().configured, 1);

        hal.write(LED, true);
        assert!(hal.read(LED));
        hal.toggle(LED);
        assert!(!hal.read(LED));

        hal.unbind();
        hal.toggle(LED);
        assert_eq!(hal.backend().levels, 0);
    }

    #[test]
    fn test_driver_default_config() {
        let config = PinConfig::driver_default(PinMode::Output);
        assert_eq!(config.output_type, OutputType::PushPull);
        assert_eq!(config.pull, Pull::None);
        assert_eq!(config.speed, Speed::High);
    }
}
