//! Serial port of the board, as seen by the portable stdio layer.

use embassy_stm32::mode::Blocking;
use embassy_stm32::usart::{Config, ConfigError, Error, Uart};

use portable::serial::{Serial, SerialPort};

/// The portable serial transport on the developer console.
pub type SerialConsole = Serial<NucleoUart>;

/// Creates the blocking USART3 on the ST-LINK virtual COM port.
#[macro_export]
macro_rules! setup_usart_developer_console {
    ($p:ident) => {
        ::embassy_stm32::usart::Uart::new_blocking(
            $p.USART3,
            $p.PD9, // rx
            $p.PD8, // tx
            ::embassy_stm32::usart::Config::default(),
        )
        .expect("USART generation failed")
    };
}

#[derive(Debug, defmt::Format)]
pub enum UartError {
    Config(ConfigError),
    Usart(Error),
}

impl From<ConfigError> for UartError {
    fn from(err: ConfigError) -> Self {
        UartError::Config(err)
    }
}

impl From<Error> for UartError {
    fn from(err: Error) -> Self {
        UartError::Usart(err)
    }
}

pub struct NucleoUart {
    uart: Uart<'static, Blocking>,
}

impl NucleoUart {
    pub fn new(uart: Uart<'static, Blocking>) -> Self {
        NucleoUart { uart }
    }
}

impl SerialPort for NucleoUart {
    type Error = UartError;

    fn begin(&mut self, baud: u32) -> Result<(), UartError> {
        let mut config = Config::default();
        config.baudrate = baud;
        self.uart.set_config(&config)?;
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), UartError> {
        self.uart.blocking_write(bytes)?;
        self.uart.blocking_flush()?;
        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8, UartError> {
        let mut buf = [0u8; 1];
        self.uart.blocking_read(&mut buf)?;
        Ok(buf[0])
    }
}
