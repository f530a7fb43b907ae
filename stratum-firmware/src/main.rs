//! Stratum - Layered Firmware Skeleton
//!
//! Firmware binary for the STM32F412ZET6 board. Brings up the clock
//! tree, GPIO and the console UART through the layered stack, then runs
//! the cooperative main loop until a fatal error stops the application.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::Flex;
use embassy_stm32::usart::{Config as UsartConfig, Uart};
use embassy_stm32::Peripherals;
use embassy_time::{Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use stratum_bsp::board::{BOARD_NAME, CONSOLE_UART, LED_PIN};
use stratum_bsp::Bsp;
use stratum_core::{AppConfig, BootError, Severity, Subsystem, System};
use stratum_drivers::{GpioDriver, HeartbeatLed, UartDriver};
use stratum_hal::PinMode;
use stratum_hal_stm32f4::{Stm32Gpio, Stm32Uart};

use crate::clocks::Stm32Clocks;

mod clocks;

/// Constants generated from board.toml by build.rs
mod board_config {
    include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
}

/// Error log context for post-boot console setup
const CONSOLE_CONTEXT: u32 = 2;

/// Milliseconds since boot, for error timestamps
fn uptime_ms() -> u32 {
    Instant::now().as_millis() as u32
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(clocks::rcc_config());
    info!("Stratum firmware starting on {}", BOARD_NAME);

    run(p).await;

    // Fail-stop: idle until an external reset
    loop {
        Timer::after_secs(60).await;
        trace!("Halted");
    }
}

/// Boot the stack and cycle until the application leaves RUNNING
async fn run(p: Peripherals) {
    let config = AppConfig {
        heartbeat_period: board_config::HEARTBEAT_PERIOD,
        cycle_delay_ms: board_config::CYCLE_DELAY_MS,
    };
    let mut system = System::with_time_source(config, uptime_ms);

    let mut gpio_backend = Stm32Gpio::new();
    if let Err(e) = gpio_backend.register(LED_PIN, Flex::new(p.PB0)) {
        error!("Failed to register LED pin: {}", e);
        return;
    }

    let usart = match Uart::new_blocking(p.USART1, p.PA10, p.PA9, UsartConfig::default()) {
        Ok(usart) => usart,
        Err(e) => {
            error!("Failed to create console USART: {:?}", Debug2Format(&e));
            return;
        }
    };

    let mut bsp = Bsp::with_clocks(Stm32Clocks::new());
    let mut gpio = GpioDriver::new(gpio_backend);
    let mut uart = UartDriver::new(Stm32Uart::new(CONSOLE_UART, usart));

    {
        let mut subsystems: [&mut dyn Subsystem; 3] = [&mut bsp, &mut gpio, &mut uart];
        match system.boot(&mut subsystems) {
            Ok(()) => info!("Boot complete"),
            Err(BootError::Init(code)) => {
                error!("Init failed: {}", code);
                return;
            }
            Err(e) => {
                error!("Boot failed: {}", e);
                return;
            }
        }
    }

    if let Err(code) = gpio.configure(LED_PIN, PinMode::Output) {
        warn!("LED setup failed: {}", code);
    }

    let console = uart
        .open(CONSOLE_UART, board_config::CONSOLE_BAUD_RATE)
        .and_then(|()| uart.write_str(CONSOLE_UART, "stratum: running\r\n"));
    if let Err(code) = system
        .errors_mut()
        .record(console, Severity::Warn, CONSOLE_CONTEXT)
    {
        warn!("Console unavailable: {}", code);
    }

    info!(
        "Running: heartbeat every {} cycles, {} ms per cycle",
        board_config::HEARTBEAT_PERIOD,
        system.cycle_delay_ms()
    );

    let mut led = HeartbeatLed::new(&mut gpio, LED_PIN);
    while system.step(&mut led) {
        Timer::after_millis(u64::from(system.cycle_delay_ms())).await;
    }

    error!("Application stopped in state {}", system.state());
    if let Some(record) = system.errors().last_record() {
        error!(
            "Last error: {} ({}) context {} at {} ms",
            record.code, record.severity, record.context, record.timestamp
        );
    }
    system.shutdown();
}
