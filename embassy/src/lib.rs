//! Board support for running the portable applications on a NUCLEO-F767ZI.
//!
//! The serial transport goes through USART3, which the on-board ST-LINK exposes
//! as a virtual COM port. The managed entry point is the embassy executor.

#![no_std]

pub mod entry;
pub mod led;
pub mod local;
pub mod storage;
pub mod uart;
