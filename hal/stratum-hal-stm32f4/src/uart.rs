//! UART backend for STM32F4
//!
//! Wraps one blocking embassy USART. Every transfer completes before the
//! call returns, so background transfers use the trait's blocking
//! fallbacks.

use embassy_stm32::mode::Blocking;
use embassy_stm32::usart::{
    Config, DataBits as UsartDataBits, Error as UsartError, Parity as UsartParity,
    StopBits as UsartStopBits, Uart,
};
use stratum_core::ErrorCode;
use stratum_hal::{DataBits, Parity, StopBits, UartBackend, UartConfig, UartId};

/// Map a USART error onto the firmware taxonomy
pub fn usart_error(e: UsartError) -> ErrorCode {
    match e {
        UsartError::Framing | UsartError::Noise | UsartError::Parity => {
            ErrorCode::HardwareFailure
        }
        UsartError::Overrun => ErrorCode::Busy,
        UsartError::BufferTooLong => ErrorCode::InvalidParameter,
        #[allow(unreachable_patterns)]
        _ => ErrorCode::Unknown,
    }
}

fn usart_config(config: &UartConfig) -> Config {
    let mut out = Config::default();
    out.baudrate = config.baud_rate.bps();
    out.data_bits = match config.data_bits {
        DataBits::Eight => UsartDataBits::DataBits8,
        DataBits::Nine => UsartDataBits::DataBits9,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => UsartStopBits::STOP1,
        StopBits::Two => UsartStopBits::STOP2,
    };
    out.parity = match config.parity {
        Parity::None => UsartParity::ParityNone,
        Parity::Even => UsartParity::ParityEven,
        Parity::Odd => UsartParity::ParityOdd,
    };
    out
}

/// UART backend serving a single peripheral
///
/// Requests for any other [`UartId`] fail with `InvalidParameter`. The
/// peripheral must be configured before transfers; after `deinit` it
/// rejects transfers with `NotInitialized` until configured again.
pub struct Stm32Uart {
    id: UartId,
    uart: Uart<'static, Blocking>,
    enabled: bool,
}

impl Stm32Uart {
    pub fn new(id: UartId, uart: Uart<'static, Blocking>) -> Self {
        Self {
            id,
            uart,
            enabled: false,
        }
    }

    /// Peripheral this backend serves
    pub fn id(&self) -> UartId {
        self.id
    }

    fn check(&self, id: UartId) -> Result<(), ErrorCode> {
        if id != self.id {
            return Err(ErrorCode::InvalidParameter);
        }
        Ok(())
    }

    fn enabled(&mut self, id: UartId) -> Result<&mut Uart<'static, Blocking>, ErrorCode> {
        self.check(id)?;
        if !self.enabled {
            return Err(ErrorCode::NotInitialized);
        }
        Ok(&mut self.uart)
    }
}

impl UartBackend for Stm32Uart {
    fn configure(&mut self, id: UartId, config: &UartConfig) -> Result<(), ErrorCode> {
        self.check(id)?;
        self.uart
            .set_config(&usart_config(config))
            .map_err(|_| ErrorCode::InvalidParameter)?;
        self.enabled = true;
        Ok(())
    }

    fn deinit(&mut self, id: UartId) -> Result<(), ErrorCode> {
        self.check(id)?;
        self.enabled = false;
        Ok(())
    }

    fn transmit(&mut self, id: UartId, data: &[u8]) -> Result<(), ErrorCode> {
        let uart = self.enabled(id)?;
        uart.blocking_write(data).map_err(usart_error)?;
        uart.blocking_flush().map_err(usart_error)
    }

    fn receive(&mut self, id: UartId, buf: &mut [u8]) -> Result<(), ErrorCode> {
        self.enabled(id)?.blocking_read(buf).map_err(usart_error)
    }

    fn is_tx_complete(&mut self, id: UartId) -> bool {
        // Transmissions are flushed before `transmit` returns
        self.enabled(id).is_ok()
    }

    fn is_rx_available(&mut self, _id: UartId) -> bool {
        // No receive buffer in blocking mode
        false
    }
}
