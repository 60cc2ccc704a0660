//! Platform independent application entry points and standard input/output.
//!
//! An application implements [`entry::App`] (the `setup`/`body` pair) and talks to
//! the outside world only through an [`io::Transport`]. Which transport is used is
//! decided when the binary is built: the firmware wires in [`serial::Serial`], the
//! host build wires in [`host::HostStreams`].

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod log;

pub mod app;
pub mod config;
pub mod entry;
pub mod error;
pub mod io;
pub mod render;
pub mod scan;
pub mod serial;

#[cfg(feature = "std")]
pub mod host;

pub use entry::{hooks, run, run_app, App, Driver, Scheduler};
pub use error::{IoError, ScanError};
pub use io::Transport;
pub use scan::Slot;

/// Formatted output over a transport, `format_args!` syntax.
///
/// Evaluates to the number of bytes transmitted.
#[macro_export]
macro_rules! app_printf {
    ($io:expr, $($arg:tt)*) => {{
        #[allow(unused_imports)]
        use $crate::io::Transport as _;
        ($io).write_formatted(::core::format_args!($($arg)*))
    }};
}

/// Reads one line from a transport and parses it into the given slots.
///
/// Evaluates to the number of slots filled.
#[macro_export]
macro_rules! app_scanf {
    ($io:expr, $fmt:expr $(, $slot:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::io::Transport as _;
        let slots: &mut [&mut dyn $crate::scan::Slot] = &mut [$($slot),*];
        ($io).read_line_formatted($fmt, slots)
    }};
}
