//! Stratum Hardware Abstraction Layer
//!
//! This crate defines one backend trait per peripheral class and a small
//! dispatch wrapper around each. A backend (stub, chip-specific, or a
//! test mock) is chosen once when the wrapper is constructed and becomes
//! active when the owning driver binds it during init.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers (stratum-drivers)              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  GpioHal / UartHal (this crate)         │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  stub backend │       │ stratum-hal-  │
//! │  (this crate) │       │   stm32f4     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Unbound policy
//!
//! Before `bind()` the wrappers behave as if no backend were present:
//! GPIO calls are silent no-ops and reads return `false`; fallible UART
//! calls return [`ErrorCode::NotInitialized`] and status queries return
//! `false`.
//!
//! [`ErrorCode::NotInitialized`]: stratum_core::ErrorCode::NotInitialized

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod stub;
pub mod uart;

// Re-export key types at crate root for convenience
pub use gpio::{GpioBackend, GpioHal, OutputType, Pin, PinConfig, PinMode, Port, Pull, Speed};
pub use stub::{StubGpio, StubUart};
pub use uart::{BaudRate, DataBits, Parity, StopBits, UartBackend, UartConfig, UartHal, UartId};
