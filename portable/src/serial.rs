//! Serial peripheral transport.

use crate::config::SerialConfig;
use crate::io::Transport;

/// Blocking access to a serial peripheral, implemented per board.
pub trait SerialPort {
    type Error: core::fmt::Debug;

    /// Starts the peripheral at `baud` bits per second.
    fn begin(&mut self, baud: u32) -> Result<(), Self::Error>;

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Blocks until one byte has been received.
    fn read_byte(&mut self) -> Result<u8, Self::Error>;
}

/// [`Transport`] over a [`SerialPort`].
///
/// The port is begun exactly once, before the first byte goes in either
/// direction. [`Transport::init`] begins it explicitly; I/O ahead of `init`
/// begins it on demand.
pub struct Serial<P> {
    port: P,
    config: SerialConfig,
    begun: bool,
}

impl<P: SerialPort> Serial<P> {
    pub fn new(port: P) -> Self {
        Self::with_config(port, SerialConfig::default())
    }

    pub fn with_config(port: P, config: SerialConfig) -> Self {
        Serial {
            port,
            config,
            begun: false,
        }
    }

    pub fn is_begun(&self) -> bool {
        self.begun
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn into_inner(self) -> P {
        self.port
    }

    fn ensure_begun(&mut self) -> Result<(), P::Error> {
        if !self.begun {
            self.port.begin(self.config.baud)?;
            self.begun = true;
            info!("serial transport started at {} baud", self.config.baud);
        }
        Ok(())
    }
}

impl<P: SerialPort> Transport for Serial<P> {
    type Error = P::Error;

    fn init(&mut self) -> Result<(), P::Error> {
        self.ensure_begun()
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), P::Error> {
        self.ensure_begun()?;
        self.port.write(bytes)
    }

    // a serial line never ends, so this never reports end of input
    fn read_byte(&mut self) -> Result<Option<u8>, P::Error> {
        self.ensure_begun()?;
        self.port.read_byte().map(Some)
    }
}


#[cfg(test)]
mod tests {
    use super::mock::{MockPort, PortCall, RxEmpty};
    use super::*;
    use crate::config::SERIAL_BAUD;
    use crate::error::IoError;

    #[test]
    fn init_begins_at_configured_baud() {
        let mut serial = Serial::new(MockPort::default());
        serial.init().unwrap();
        serial.init().unwrap();
        assert!(serial.is_begun());
        assert_eq!(serial.port().calls, [PortCall::Begin(SERIAL_BAUD)]);
    }

    #[test]
    fn begin_precedes_output() {
        let mut serial = Serial::with_config(MockPort::default(), SerialConfig { baud: 115_200 });
        serial.init().unwrap();
        serial.write_formatted(format_args!("Entered => {}\n", "hi")).unwrap();
        assert_eq!(
            serial.into_inner().calls,
            [
                PortCall::Begin(115_200),
                PortCall::Write(b"Entered => hi\n".to_vec())
            ]
        );
    }

    #[test]
    fn output_before_init_begins_first() {
        let mut serial = Serial::new(MockPort::default());
        serial.write_all(b"x").unwrap();
        serial.init().unwrap();
        assert_eq!(
            serial.port().calls,
            [PortCall::Begin(SERIAL_BAUD), PortCall::Write(b"x".to_vec())]
        );
    }

    #[test]
    fn reads_a_line_from_the_port() {
        let mut port = MockPort::default();
        port.rx.extend(b"hello\r\n");
        let mut serial = Serial::new(port);
        serial.init().unwrap();

        let mut word: heapless::String<16> = heapless::String::new();
        assert_eq!(serial.read_line_formatted("{}", &mut [&mut word]), Ok(1));
        assert_eq!(word.as_str(), "hello");
    }

    #[test]
    fn port_errors_surface_as_transport_errors() {
        let mut serial = Serial::new(MockPort::default());
        let mut line: heapless::String<8> = heapless::String::new();
        assert_eq!(serial.read_line(&mut line), Err(IoError::Transport(RxEmpty)));
    }
}
