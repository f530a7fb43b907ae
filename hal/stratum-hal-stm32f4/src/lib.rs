//! STM32F4 backends for the Stratum HAL
//!
//! Implements `stratum-hal`'s backend traits on top of embassy-stm32:
//!
//! - [`Stm32Gpio`] drives registered `Flex` pins
//! - [`Stm32Uart`] drives one blocking USART
//!
//! # Features
//!
//! - `stm32f412ze` - Enable support for the STM32F412ZE
//! - `defmt` - Enable debug formatting support
//!
//! Peripherals are claimed from `embassy_stm32::init` by the firmware and
//! handed to the backends, which only translate the HAL's plain types.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod uart;

pub use gpio::{Stm32Gpio, MAX_PINS};
pub use uart::{usart_error, Stm32Uart};
