//! Clock tree for the STM32F412ZET6
//!
//! embassy-stm32 programs the RCC once, in `embassy_stm32::init`, before
//! any peripheral exists. [`rcc_config`] builds that configuration from
//! the board clock tree and [`Stm32Clocks`] lets the BSP confirm during
//! init that the tree it expects is the one running.

use embassy_stm32::rcc::{
    AHBPrescaler, APBPrescaler, Pll, PllMul, PllPDiv, PllPreDiv, PllSource, Sysclk,
};
use stratum_bsp::{ClockConfig, ClockControl};
use stratum_core::ErrorCode;

/// Clock tree programmed at startup
pub const PROGRAMMED: ClockConfig = ClockConfig::board_default();

/// RCC configuration for [`PROGRAMMED`]
///
/// HSI 16 MHz / 8 * 100 / 2 = 100 MHz system clock, APB1 at half speed.
pub fn rcc_config() -> embassy_stm32::Config {
    let mut config = embassy_stm32::Config::default();
    config.rcc.hsi = true;
    config.rcc.pll_src = PllSource::HSI;
    config.rcc.pll = Some(Pll {
        prediv: PllPreDiv::DIV8,
        mul: PllMul::MUL100,
        divp: Some(PllPDiv::DIV2),
        divq: None,
        divr: None,
    });
    config.rcc.ahb_pre = AHBPrescaler::DIV1;
    config.rcc.apb1_pre = APBPrescaler::DIV2;
    config.rcc.apb2_pre = APBPrescaler::DIV1;
    config.rcc.sys = Sysclk::PLL1_P;
    config
}

/// Clock control backed by the startup RCC configuration
///
/// The tree cannot be changed after startup, so `configure` succeeds
/// only for the programmed tree.
pub struct Stm32Clocks {
    running: ClockConfig,
}

impl Stm32Clocks {
    pub const fn new() -> Self {
        Self {
            running: PROGRAMMED,
        }
    }
}

impl ClockControl for Stm32Clocks {
    fn configure(&mut self, config: &ClockConfig) -> Result<(), ErrorCode> {
        config.validate()?;
        if *config != self.running {
            return Err(ErrorCode::HardwareFailure);
        }
        Ok(())
    }
}
