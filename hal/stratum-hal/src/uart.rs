//! UART serial communication abstractions
//!
//! Peripheral identifiers, frame configuration, the backend trait
//! implemented per chip, and the dispatch wrapper used by the UART
//! driver.

use stratum_core::ErrorCode;

/// UART peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartId {
    Uart1,
    Uart2,
    Uart3,
    Uart4,
    Uart5,
    Uart6,
}

impl UartId {
    /// All peripherals, in index order
    pub const ALL: [UartId; 6] = [
        UartId::Uart1,
        UartId::Uart2,
        UartId::Uart3,
        UartId::Uart4,
        UartId::Uart5,
        UartId::Uart6,
    ];

    /// Zero-based index (UART1 = 0)
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Supported baud rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BaudRate {
    B9600,
    B19200,
    B38400,
    #[default]
    B115200,
}

impl BaudRate {
    /// Look up a supported rate in bits per second
    pub const fn from_bps(bps: u32) -> Option<Self> {
        match bps {
            9600 => Some(BaudRate::B9600),
            19200 => Some(BaudRate::B19200),
            38400 => Some(BaudRate::B38400),
            115200 => Some(BaudRate::B115200),
            _ => None,
        }
    }

    /// Rate in bits per second
    pub const fn bps(self) -> u32 {
        match self {
            BaudRate::B9600 => 9600,
            BaudRate::B19200 => 19200,
            BaudRate::B38400 => 38400,
            BaudRate::B115200 => 115200,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    #[default]
    Eight,
    Nine,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    #[default]
    One,
    Two,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    #[default]
    None,
    Even,
    Odd,
}

/// UART configuration
///
/// Defaults to 115200 8N1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    pub baud_rate: BaudRate,
    pub data_bits: DataBits,
    pub stop_bits: StopBits,
    pub parity: Parity,
}

impl UartConfig {
    /// 8 data bits, 1 stop bit, no parity at the given rate
    pub const fn eight_n_one(baud_rate: BaudRate) -> Self {
        Self {
            baud_rate,
            data_bits: DataBits::Eight,
            stop_bits: StopBits::One,
            parity: Parity::None,
        }
    }
}

/// UART backend
///
/// One implementation per hardware target.
pub trait UartBackend {
    /// Configure and enable a peripheral
    fn configure(&mut self, id: UartId, config: &UartConfig) -> Result<(), ErrorCode>;

    /// Disable a peripheral
    fn deinit(&mut self, id: UartId) -> Result<(), ErrorCode>;

    /// Transmit, blocking until all bytes are sent
    fn transmit(&mut self, id: UartId, data: &[u8]) -> Result<(), ErrorCode>;

    /// Receive, blocking until `buf` is filled
    fn receive(&mut self, id: UartId, buf: &mut [u8]) -> Result<(), ErrorCode>;

    /// Begin a background transmission
    ///
    /// Backends without background transfers complete it immediately.
    fn start_transmit(&mut self, id: UartId, data: &[u8]) -> Result<(), ErrorCode> {
        self.transmit(id, data)
    }

    /// Begin a background reception
    ///
    /// Backends without background transfers complete it immediately.
    fn start_receive(&mut self, id: UartId, buf: &mut [u8]) -> Result<(), ErrorCode> {
        self.receive(id, buf)
    }

    /// Check if the last transmission has finished
    fn is_tx_complete(&mut self, id: UartId) -> bool;

    /// Check if received data is waiting
    fn is_rx_available(&mut self, id: UartId) -> bool;
}

/// UART dispatch wrapper
///
/// Holds the backend selected at construction. Until [`UartHal::bind`]
/// is called fallible operations return [`ErrorCode::NotInitialized`]
/// and status queries return `false`.
pub struct UartHal<B> {
    backend: B,
    bound: bool,
}

impl<B: UartBackend> UartHal<B> {
    /// Wrap a backend; it stays inactive until bound
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            bound: false,
        }
    }

    /// Activate the backend
    pub fn bind(&mut self) {
        self.bound = true;
    }

    /// Deactivate the backend
    pub fn unbind(&mut self) {
        self.bound = false;
    }

    /// Check if the backend is active
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    fn active(&mut self) -> Result<&mut B, ErrorCode> {
        if self.bound {
            Ok(&mut self.backend)
        } else {
            Err(ErrorCode::NotInitialized)
        }
    }

    /// Configure a peripheral
    pub fn configure(&mut self, id: UartId, config: &UartConfig) -> Result<(), ErrorCode> {
        self.active()?.configure(id, config)
    }

    /// Disable a peripheral
    pub fn deinit(&mut self, id: UartId) -> Result<(), ErrorCode> {
        self.active()?.deinit(id)
    }

    /// Blocking transmit
    pub fn transmit(&mut self, id: UartId, data: &[u8]) -> Result<(), ErrorCode> {
        self.active()?.transmit(id, data)
    }

    /// Blocking receive
    pub fn receive(&mut self, id: UartId, buf: &mut [u8]) -> Result<(), ErrorCode> {
        self.active()?.receive(id, buf)
    }

    /// Background transmit
    pub fn start_transmit(&mut self, id: UartId, data: &[u8]) -> Result<(), ErrorCode> {
        self.active()?.start_transmit(id, data)
    }

    /// Background receive
    pub fn start_receive(&mut self, id: UartId, buf: &mut [u8]) -> Result<(), ErrorCode> {
        self.active()?.start_receive(id, buf)
    }

    /// Check if the last transmission finished; `false` while unbound
    pub fn is_tx_complete(&mut self, id: UartId) -> bool {
        self.active().map(|b| b.is_tx_complete(id)).unwrap_or(false)
    }

    /// Check if data is waiting; `false` while unbound
    pub fn is_rx_available(&mut self, id: UartId) -> bool {
        self.active().map(|b| b.is_rx_available(id)).unwrap_or(false)
    }

    /// Access the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Access the backend mutably
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that counts calls and fails on demand
    #[derive(Default)]
    struct MockUart {
        calls: u32,
        fail_with: Option<ErrorCode>,
    }

    impl MockUart {
        fn call(&mut self) -> Result<(), ErrorCode> {
            self.calls += 1;
            match self.fail_with {
                Some(code) => Err(code),
                None => Ok(()),
            }
        }
    }

    impl UartBackend for MockUart {
        fn configure(&mut self, _id: UartId, _config: &UartConfig) -> Result<(), ErrorCode> {
            self.call()
        }

        fn deinit(&mut self, _id: UartId) -> Result<(), ErrorCode> {
            self.call()
        }

        fn transmit(&mut self, _id: UartId, _data: &[u8]) -> Result<(), ErrorCode> {
            self.call()
        }

        fn receive(&mut self, _id: UartId, _buf: &mut [u8]) -> Result<(), ErrorCode> {
            self.call()
        }

        fn is_tx_complete(&mut self, _id: UartId) -> bool {
            true
        }

        fn is_rx_available(&mut self, _id: UartId) -> bool {
            true
        }
    }

    #[test]
    fn test_unbound_reports_not_initialized() {
        let mut hal = UartHal::new(MockUart::default());
        let config = UartConfig::default();
        let mut buf = [0u8; 4];

        assert_eq!(hal.configure(UartId::Uart1, &config), Err(ErrorCode::NotInitialized));
        assert_eq!(hal.deinit(UartId::Uart1), Err(ErrorCode::NotInitialized));
        assert_eq!(hal.transmit(UartId::Uart1, b"hi"), Err(ErrorCode::NotInitialized));
        assert_eq!(hal.receive(UartId::Uart1, &mut buf), Err(ErrorCode::NotInitialized));
        assert_eq!(hal.start_transmit(UartId::Uart1, b"hi"), Err(ErrorCode::NotInitialized));
        assert_eq!(hal.start_receive(UartId::Uart1, &mut buf), Err(ErrorCode::NotInitialized));
        assert!(!hal.is_tx_complete(UartId::Uart1));
        assert!(!hal.is_rx_available(UartId::Uart1));
        assert_eq!(hal.backend().calls, 0);
    }

    #[test]
    fn test_bound_dispatches() {
        let mut hal = UartHal::new(MockUart::default());
        hal.bind();

        assert_eq!(hal.configure(UartId::Uart2, &UartConfig::default()), Ok(()));
        assert_eq!(hal.transmit(UartId::Uart2, b"ok"), Ok(()));
        // Default background transfer falls through to the blocking call
        assert_eq!(hal.start_transmit(UartId::Uart2, b"ok"), Ok(()));
        assert_eq!(hal.backend().calls, 3);
        assert!(hal.is_tx_complete(UartId::Uart2));
        assert!(hal.is_rx_available(UartId::Uart2));
    }

    #[test]
    fn test_backend_errors_pass_through() {
        let mut hal = UartHal::new(MockUart {
            fail_with: Some(ErrorCode::Timeout),
            ..Default::default()
        });
        hal.bind();
        let mut buf = [0u8; 1];
        assert_eq!(hal.receive(UartId::Uart3, &mut buf), Err(ErrorCode::Timeout));
    }

    #[test]
    fn test_baud_rates() {
        assert_eq!(BaudRate::from_bps(9600), Some(BaudRate::B9600));
        assert_eq!(BaudRate::from_bps(57600), None);
        assert_eq!(BaudRate::B38400.bps(), 38400);
        assert_eq!(UartConfig::default(), UartConfig::eight_n_one(BaudRate::B115200));
    }

    #[test]
    fn test_uart_index() {
        assert_eq!(UartId::Uart1.index(), 0);
        assert_eq!(UartId::Uart6.index(), 5);
        assert_eq!(UartId::ALL.len(), 6);
    }
}
