//! Board configuration for the STM32F412ZET6 target
//!
//! Only constants live here: no peripheral access.

use stratum_hal::{Pin, Port, UartId};

/// Board name reported at boot
pub const BOARD_NAME: &str = "STM32F412ZET6";

// Clock tree
pub const SYSTEM_CLOCK_HZ: u32 = 100_000_000; // 100 MHz
pub const AHB_CLOCK_HZ: u32 = 100_000_000;
pub const APB1_CLOCK_HZ: u32 = 50_000_000; // APB1 = AHB/2
pub const APB2_CLOCK_HZ: u32 = 100_000_000; // APB2 = AHB

/// Heartbeat LED
pub const LED_PIN: Pin = Pin::new(Port::B, 0);

/// Console UART
pub const CONSOLE_UART: UartId = UartId::Uart1;

pub const UART1_TX_PIN: Pin = Pin::new(Port::A, 9);
pub const UART1_RX_PIN: Pin = Pin::new(Port::A, 10);

pub const UART2_TX_PIN: Pin = Pin::new(Port::A, 2);
pub const UART2_RX_PIN: Pin = Pin::new(Port::A, 3);

// Memory
pub const FLASH_SIZE: usize = 0x40000; // 256 KB
pub const RAM_SIZE: usize = 0x30000; // 192 KB
