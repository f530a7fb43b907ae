//! Driver implementations
//!
//! Thin validating wrappers over the HAL dispatch layer. Drivers depend
//! only on the HAL traits, never on a specific chip, and translate every
//! failure into the shared [`ErrorCode`] taxonomy.
//!
//! - GPIO driver (also the heartbeat LED)
//! - UART driver
//!
//! Both drivers are steps of the application init sequence: their
//! [`Subsystem::init`] binds the HAL backend.
//!
//! [`ErrorCode`]: stratum_core::ErrorCode
//! [`Subsystem::init`]: stratum_core::Subsystem::init

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod heartbeat;
pub mod uart;

pub use gpio::GpioDriver;
pub use heartbeat::HeartbeatLed;
pub use uart::UartDriver;
