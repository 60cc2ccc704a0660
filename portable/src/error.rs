//! Errors reported by the I/O shim.

use thiserror::Error;

/// Failure to turn one line of input into the caller's slots.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanError {
    /// the field does not fit the slot; the slot is left unchanged
    #[error("field {index} needs {needed} bytes but the slot holds {capacity}")]
    Overflow {
        index: usize,
        capacity: usize,
        needed: usize,
    },

    /// the field could not be parsed as the slot's type
    #[error("field {index} is not a valid value")]
    Invalid { index: usize },

    /// a literal of the format was not found in the input
    #[error("input does not match the format at byte {position}")]
    Mismatch { position: usize },

    /// the format names more fields than slots were given
    #[error("no slot supplied for field {index}")]
    MissingSlot { index: usize },
}

/// Failure of a formatted read or write.
#[derive(Error, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError<E> {
    #[error("transport failure: {0:?}")]
    Transport(E),

    /// the input stream ended before a line was read
    #[error("end of input")]
    Eof,

    /// the line was longer than the line buffer; it has been discarded up to its newline
    #[error("input line exceeds {capacity} bytes")]
    LineTooLong { capacity: usize },

    #[error("input line is not valid utf-8")]
    Utf8,

    #[error(transparent)]
    Scan(#[from] ScanError),
}
