//! Byte-wise reads from the flash sector the firmware sets aside as EEPROM.
//!
//! The STM32F767 has no EEPROM, the last 256K sector of the 2M flash
//! stands in for it.

use embassy_stm32::flash::{self, Flash};

/// Flash offset of the EEPROM sector (sector 11, single bank mode).
pub const EEPROM_OFFSET: u32 = 0x1C_0000;
pub const EEPROM_SIZE: u32 = 0x4_0000;

#[derive(Debug, defmt::Format)]
pub enum StorageError {
    OutOfRange(u32),
    Flash(flash::Error),
}

pub struct Eeprom<'d, M> {
    flash: Flash<'d, M>,
}

impl<'d, M> Eeprom<'d, M> {
    pub fn new(flash: Flash<'d, M>) -> Self {
        Eeprom { flash }
    }

    pub fn read(&mut self, address: u32) -> Result<u8, StorageError> {
        if address >= EEPROM_SIZE {
            return Err(StorageError::OutOfRange(address));
        }
        let mut byte = [0u8; 1];
        self.flash
            .blocking_read(EEPROM_OFFSET + address, &mut byte)
            .map_err(StorageError::Flash)?;
        Ok(byte[0])
    }
}
