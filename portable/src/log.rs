// Logging macros. Forward to defmt on the target, to tracing on the host,
// and expand to nothing when neither backend is enabled.

#![allow(unused_macros)]

macro_rules! debug {
    ($($arg:tt)*) => { __log!(debug, $($arg)*) };
}

macro_rules! info {
    ($($arg:tt)*) => { __log!(info, $($arg)*) };
}

macro_rules! warn {
    ($($arg:tt)*) => { __log!(warn, $($arg)*) };
}

macro_rules! error {
    ($($arg:tt)*) => { __log!(error, $($arg)*) };
}

#[cfg(feature = "defmt")]
macro_rules! __log {
    ($level:ident, $($arg:tt)*) => {
        ::defmt::$level!($($arg)*)
    };
}

#[cfg(all(feature = "std", not(feature = "defmt")))]
macro_rules! __log {
    ($level:ident, $($arg:tt)*) => {
        ::tracing::$level!($($arg)*)
    };
}

#[cfg(not(any(feature = "std", feature = "defmt")))]
macro_rules! __log {
    ($level:ident, $($arg:tt)*) => {};
}
