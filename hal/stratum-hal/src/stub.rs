//! Stub backends
//!
//! Accept every call and touch no hardware. Used on boards whose
//! peripheral code is not written yet and as a stand-in on the host.

use stratum_core::ErrorCode;

use crate::gpio::{GpioBackend, Pin, PinConfig};
use crate::uart::{UartBackend, UartConfig, UartId};

/// GPIO backend that ignores writes and reads every pin low
#[derive(Debug, Clone, Copy, Default)]
pub struct StubGpio;

impl GpioBackend for StubGpio {
    fn configure(&mut self, _pin: Pin, _config: PinConfig) {}

    fn write(&mut self, _pin: Pin, _high: bool) {}

    fn read(&mut self, _pin: Pin) -> bool {
        false
    }

    fn toggle(&mut self, _pin: Pin) {}
}

/// UART backend that succeeds without moving any data
///
/// Transmissions are always complete and nothing is ever received.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubUart;

impl UartBackend for StubUart {
    fn configure(&mut self, _id: UartId, _config: &UartConfig) -> Result<(), ErrorCode> {
        Ok(())
    }

    fn deinit(&mut self, _id: UartId) -> Result<(), ErrorCode> {
        Ok(())
    }

    fn transmit(&mut self, _id: UartId, _data: &[u8]) -> Result<(), ErrorCode> {
        Ok(())
    }

    fn receive(&mut self, _id: UartId, _buf: &mut [u8]) -> Result<(), ErrorCode> {
        Ok(())
    }

    fn is_tx_complete(&mut self, _id: UartId) -> bool {
        true
    }

    fn is_rx_available(&mut self, _id: UartId) -> bool {
        false
    }
}
