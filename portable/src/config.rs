//! Compile-time configuration shared by every build of the portable application.

/// Bit rate the serial transport is started with.
pub const SERIAL_BAUD: u32 = 9600;

/// Capacity of the intermediate buffer formatted output is rendered into.
/// Longer output is cut at this many bytes.
pub const OUTPUT_CAPACITY: usize = 128;

/// Longest input line accepted by [`crate::io::Transport::read_line_formatted`],
/// excluding the terminating newline.
pub const LINE_CAPACITY: usize = 128;

/// Settings applied when a serial transport is started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    pub baud: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        SerialConfig { baud: SERIAL_BAUD }
    }
}
