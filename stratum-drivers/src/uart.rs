//! UART driver
//!
//! Validates buffers and baud rates before handing them to the HAL.
//! Transfers are limited to `u16::MAX` bytes, the length range of the
//! underlying peripheral transfer counters.

use stratum_core::{ErrorCode, ErrorManager, Subsystem};
use stratum_hal::{BaudRate, UartBackend, UartConfig, UartHal, UartId};

/// Largest single transfer in bytes
pub const MAX_TRANSFER_LEN: usize = u16::MAX as usize;

/// Application-facing UART driver
pub struct UartDriver<B> {
    hal: UartHal<B>,
}

fn check_len(len: usize) -> Result<(), ErrorCode> {
    if len == 0 || len > MAX_TRANSFER_LEN {
        return Err(ErrorCode::InvalidParameter);
    }
    Ok(())
}

impl<B: UartBackend> UartDriver<B> {
    /// Create a driver over `backend`
    ///
    /// Until [`Subsystem::init`] runs every transfer fails with
    /// `NotInitialized`.
    pub fn new(backend: B) -> Self {
        Self {
            hal: UartHal::new(backend),
        }
    }

    /// Release the backend
    pub fn deinit(&mut self) -> Result<(), ErrorCode> {
        self.hal.unbind();
        Ok(())
    }

    /// Open a peripheral at `baud_rate` bits per second, 8N1
    ///
    /// Only 9600, 19200, 38400 and 115200 are supported.
    pub fn open(&mut self, id: UartId, baud_rate: u32) -> Result<(), ErrorCode> {
        let baud_rate = BaudRate::from_bps(baud_rate).ok_or(ErrorCode::InvalidParameter)?;
        self.hal.configure(id, &UartConfig::eight_n_one(baud_rate))
    }

    /// Close a peripheral
    pub fn close(&mut self, id: UartId) -> Result<(), ErrorCode> {
        self.hal.deinit(id)
    }

    /// Blocking write
    pub fn write(&mut self, id: UartId, data: &[u8]) -> Result<(), ErrorCode> {
        check_len(data.len())?;
        self.hal.transmit(id, data)
    }

    /// Blocking read filling `buf`
    pub fn read(&mut self, id: UartId, buf: &mut [u8]) -> Result<(), ErrorCode> {
        check_len(buf.len())?;
        self.hal.receive(id, buf)
    }

    /// Blocking write of a string
    ///
    /// An empty string is sent as a zero-length transfer.
    pub fn write_str(&mut self, id: UartId, s: &str) -> Result<(), ErrorCode> {
        if s.len() > MAX_TRANSFER_LEN {
            return Err(ErrorCode::InvalidParameter);
        }
        self.hal.transmit(id, s.as_bytes())
    }

    /// Check if the last transmission finished
    pub fn is_tx_complete(&mut self, id: UartId) -> bool {
        self.hal.is_tx_complete(id)
    }

    /// Check if received data is waiting
    pub fn is_rx_available(&mut self, id: UartId) -> bool {
        self.hal.is_rx_available(id)
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

impl<B: UartBackend> Subsystem for UartDriver<B> {
    fn name(&self) -> &'static str {
        "uart"
    }

    fn init(&mut self, _errors: &mut ErrorManager) -> Result<(), ErrorCode> {
        self.hal.bind();
        Ok(())
    }
}
