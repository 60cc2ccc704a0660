//! Hello World over the serial line, then blink the blue user LED forever.
//!
//! Talks to the pins and the USART directly, without the portable layer.
//! This runs on a NUCLEO-F767ZI

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_time::Duration;
use {defmt_rtt as _, panic_probe as _};

use nucleo_f767zi::led::Blinker;
use nucleo_f767zi::setup_usart_developer_console;
use nucleo_f767zi::uart::NucleoUart;
use portable::config::SERIAL_BAUD;
use portable::serial::SerialPort;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());

    // initialize serial communication at 9600 bits per second
    let mut usart = NucleoUart::new(setup_usart_developer_console!(p));
    usart.begin(SERIAL_BAUD).expect("USART configuration failed");
    usart.write(b"Hello World\r\n").expect("USART write failed");
    defmt::info!("greeting sent at {} baud", SERIAL_BAUD);

    let mut led = Blinker::new(Output::new(p.PB7, Level::Low, Speed::Low));
    loop {
        led.blink(Duration::from_secs(1)).await;
    }
}
