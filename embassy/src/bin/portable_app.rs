//! The portable echo application on the board.
//!
//! Same application code as the host build; here the embassy executor drives
//! the hooks and the text goes over the ST-LINK virtual COM port.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use nucleo_f767zi::entry::ExecutorScheduler;
use nucleo_f767zi::setup_usart_developer_console;
use nucleo_f767zi::uart::{NucleoUart, SerialConsole};
use portable::app::EchoApp;
use portable::serial::Serial;

static APP: StaticCell<EchoApp<SerialConsole>> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());

    let usart = NucleoUart::new(setup_usart_developer_console!(p));
    let app = APP.init(EchoApp::new(Serial::new(usart)));

    let mut scheduler = ExecutorScheduler::new(spawner);
    portable::entry::register(&mut scheduler, app).unwrap();
}
