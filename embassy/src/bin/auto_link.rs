//! Calls into a local library and reads the first EEPROM byte.
//!
//! Nothing to do after setup, the body stays empty.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_stm32::flash::{Blocking, Flash};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use nucleo_f767zi::entry::ExecutorScheduler;
use nucleo_f767zi::local::local_lib_function;
use nucleo_f767zi::storage::Eeprom;
use portable::App;

struct AutoLink {
    eeprom: Eeprom<'static, Blocking>,
}

impl App for AutoLink {
    fn setup(&mut self) {
        let board = local_lib_function();

        match self.eeprom.read(0) {
            Ok(value) => {
                defmt::info!("EEPROM[0] = {=u8:#04x} on {}", value, board);
            }
            Err(err) => defmt::error!("EEPROM read failed: {}", err),
        }
    }

    fn body(&mut self) {}
}

static APP: StaticCell<AutoLink> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());

    let app = APP.init(AutoLink {
        eeprom: Eeprom::new(Flash::new_blocking(p.FLASH)),
    });

    let mut scheduler = ExecutorScheduler::new(spawner);
    portable::entry::register(&mut scheduler, app).unwrap();
}
