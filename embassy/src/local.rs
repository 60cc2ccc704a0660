//! A library local to this project, linked into the binaries that call it.

/// Board this firmware is built for.
pub const BOARD: &str = "NUCLEO-F767ZI";

pub fn local_lib_function() -> &'static str {
    defmt::info!("local library function called on {}", BOARD);
    BOARD
}
