//! Clock configuration

use stratum_core::ErrorCode;

use crate::board::{AHB_CLOCK_HZ, APB1_CLOCK_HZ, APB2_CLOCK_HZ, SYSTEM_CLOCK_HZ};

/// Bus clock frequencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    pub system_clock_hz: u32,
    pub ahb_clock_hz: u32,
    pub apb1_clock_hz: u32,
    pub apb2_clock_hz: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::board_default()
    }
}

impl ClockConfig {
    /// Clock tree from the board constants
    pub const fn board_default() -> Self {
        Self {
            system_clock_hz: SYSTEM_CLOCK_HZ,
            ahb_clock_hz: AHB_CLOCK_HZ,
            apb1_clock_hz: APB1_CLOCK_HZ,
            apb2_clock_hz: APB2_CLOCK_HZ,
        }
    }

    pub const fn system_clock(&self) -> u32 {
        self.system_clock_hz
    }

    pub const fn ahb_clock(&self) -> u32 {
        self.ahb_clock_hz
    }

    pub const fn apb1_clock(&self) -> u32 {
        self.apb1_clock_hz
    }

    pub const fn apb2_clock(&self) -> u32 {
        self.apb2_clock_hz
    }

    /// Check the bus clocks against the limits of the STM32F412
    ///
    /// AHB and APB2 may run at the system clock; APB1 is limited to 50 MHz.
    pub fn validate(&self) -> Result<(), ErrorCode> {
        const MAX_SYSCLK_HZ: u32 = 100_000_000;
        const MAX_APB1_HZ: u32 = 50_000_000;

        if self.system_clock_hz == 0 || self.system_clock_hz > MAX_SYSCLK_HZ {
            return Err(ErrorCode::InvalidParameter);
        }
        if self.ahb_clock_hz > self.system_clock_hz
            || self.apb2_clock_hz > self.ahb_clock_hz
            || self.apb1_clock_hz > self.ahb_clock_hz.min(MAX_APB1_HZ)
        {
            return Err(ErrorCode::InvalidParameter);
        }
        Ok(())
    }
}

/// Applies a clock tree to the hardware
///
/// Implemented by the chip layer (oscillator, PLL, prescalers, switch
/// to PLL). Runs once during BSP init.
pub trait ClockControl {
    fn configure(&mut self, config: &ClockConfig) -> Result<(), ErrorCode>;
}

/// Clock control for boards whose clock tree is set up before the BSP
/// runs (by the chip HAL at startup)
///
/// Only validates the requested tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardClocks;

impl ClockControl for BoardClocks {
    fn configure(&mut self, config: &ClockConfig) -> Result<(), ErrorCode> {
        config.validate()
    }
}
