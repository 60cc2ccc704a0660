//! Platform independent standard input/output.
//!
//! A [`Transport`] only has to move bytes; formatting into the bounded output
//! buffer, line assembly and field parsing are provided on top of it so every
//! transport behaves the same way.

use core::fmt;

use heapless::{String, Vec};

use crate::config::{LINE_CAPACITY, OUTPUT_CAPACITY};
use crate::error::IoError;
use crate::render::RenderBuffer;
use crate::scan::{scan, Slot};

/// Byte channel the application's input and output go through.
pub trait Transport {
    type Error: fmt::Debug;

    /// Acquires the underlying channel. Called once from the application's
    /// setup hook, there is no matching release.
    fn init(&mut self) -> Result<(), Self::Error>;

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Blocks until a byte is available. `None` means the input has ended.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Renders `args` into a buffer of [`OUTPUT_CAPACITY`] bytes and transmits it.
    ///
    /// Output that does not fit is dropped without an error, the returned count
    /// is the number of bytes actually sent.
    fn write_formatted(&mut self, args: fmt::Arguments<'_>) -> Result<usize, IoError<Self::Error>> {
        let buf = RenderBuffer::<OUTPUT_CAPACITY>::render(args);
        if buf.truncated() {
            debug!("formatted output cut at {} bytes", OUTPUT_CAPACITY);
        }
        self.write_all(buf.as_bytes()).map_err(IoError::Transport)?;
        Ok(buf.len())
    }

    /// Reads up to and including the next `'\n'` into `line`.
    ///
    /// The newline and a `'\r'` right before it are not stored. A line longer than
    /// `N` bytes is consumed completely and reported as [`IoError::LineTooLong`].
    fn read_line<const N: usize>(&mut self, line: &mut String<N>) -> Result<(), IoError<Self::Error>> {
        let mut bytes: Vec<u8, N> = Vec::new();
        let mut overflow = false;
        let mut carriage_return = false;
        let mut started = false;

        loop {
            let byte = match self.read_byte().map_err(IoError::Transport)? {
                Some(b'\n') => break,
                Some(byte) => byte,
                None if started => {
                    // only a '\r' right before '\n' is a line ending
                    if carriage_return {
                        overflow |= bytes.push(b'\r').is_err();
                    }
                    break;
                }
                None => return Err(IoError::Eof),
            };
            started = true;

            if carriage_return {
                overflow |= bytes.push(b'\r').is_err();
            }
            carriage_return = byte == b'\r';
            if !carriage_return {
                overflow |= bytes.push(byte).is_err();
            }
        }

        if overflow {
            warn!("discarded input line longer than {} bytes", N);
            return Err(IoError::LineTooLong { capacity: N });
        }

        let text = core::str::from_utf8(&bytes).map_err(|_| IoError::Utf8)?;
        line.clear();
        // text is at most N bytes
        let _ = line.push_str(text);
        Ok(())
    }

    /// Reads one line of at most [`LINE_CAPACITY`] bytes and parses it into `slots`.
    ///
    /// Returns the number of slots filled. See [`crate::scan`] for the format.
    fn read_line_formatted(
        &mut self,
        format: &str,
        slots: &mut [&mut dyn Slot],
    ) -> Result<usize, IoError<Self::Error>> {
        let mut line: String<LINE_CAPACITY> = String::new();
        self.read_line(&mut line)?;
        Ok(scan(&line, format, slots)?)
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        (**self).init()
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_all(bytes)
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        (**self).read_byte()
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;
    use crate::error::ScanError;

    #[test]
    fn formatted_output_round_trip() {
        let mut io = MockTransport::default();
        let sent = io.write_formatted(format_args!("Entered => {}\n", "hi")).unwrap();
        assert_eq!(io.output(), "Entered => hi\n");
        assert_eq!(sent, 14);
    }

    #[test]
    fn oversized_output_is_truncated_to_capacity() {
        let mut io = MockTransport::default();
        let long = "abcdefgh".repeat(40);
        let sent = io.write_formatted(format_args!("Entered => {}\n", long)).unwrap();
        assert_eq!(sent, OUTPUT_CAPACITY);
        assert_eq!(io.output.len(), OUTPUT_CAPACITY);
        assert!(io.output().starts_with("Entered => abcdefgh"));
    }

    #[test]
    fn formatted_input_strips_newline() {
        let mut io = MockTransport::with_input("hello\n");
        let mut word: String<LINE_CAPACITY> = String::new();
        let n = io.read_line_formatted("{}", &mut [&mut word]).unwrap();
        assert_eq!(n, 1);
        assert_eq!(word.as_str(), "hello");
    }

    #[test]
    fn crlf_line_endings() {
        let mut io = MockTransport::with_input("abc\r\ndef\n");
        let mut line: String<8> = String::new();
        io.read_line(&mut line).unwrap();
        assert_eq!(line.as_str(), "abc");
        io.read_line(&mut line).unwrap();
        assert_eq!(line.as_str(), "def");
    }

    #[test]
    fn carriage_return_inside_line_is_kept() {
        let mut io = MockTransport::with_input("a\rb\n");
        let mut line: String<8> = String::new();
        io.read_line(&mut line).unwrap();
        assert_eq!(line.as_str(), "a\rb");
    }

    #[test]
    fn full_line_followed_by_crlf_fits() {
        let mut io = MockTransport::with_input("abcd\r\n");
        let mut line: String<4> = String::new();
        io.read_line(&mut line).unwrap();
        assert_eq!(line.as_str(), "abcd");
    }

    #[test]
    fn long_line_is_drained_and_reported() {
        let mut io = MockTransport::with_input("0123456789\nok\n");
        let mut line: String<4> = String::new();
        assert_eq!(io.read_line(&mut line), Err(IoError::LineTooLong { capacity: 4 }));
        io.read_line(&mut line).unwrap();
        assert_eq!(line.as_str(), "ok");
    }

    #[test]
    fn last_line_without_newline() {
        let mut io = MockTransport::with_input("tail");
        let mut line: String<8> = String::new();
        io.read_line(&mut line).unwrap();
        assert_eq!(line.as_str(), "tail");
        assert_eq!(io.read_line(&mut line), Err(IoError::Eof));
    }

    #[test]
    fn trailing_carriage_return_at_end_of_input_is_kept() {
        let mut io = MockTransport::with_input("ab\r");
        let mut line: String<8> = String::new();
        io.read_line(&mut line).unwrap();
        assert_eq!(line.as_str(), "ab\r");
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let mut io = MockTransport::default();
        io.input.extend([0xff, 0xfe, b'\n']);
        let mut line: String<8> = String::new();
        assert_eq!(io.read_line(&mut line), Err(IoError::Utf8));
    }

    #[test]
    fn scan_errors_are_forwarded() {
        let mut io = MockTransport::with_input("muchtoolong\n");
        let mut word: String<4> = String::new();
        let err = io.read_line_formatted("{}", &mut [&mut word]).unwrap_err();
        assert_eq!(
            err,
            IoError::Scan(ScanError::Overflow {
                index: 0,
                capacity: 4,
                needed: 11
            })
        );
    }

    #[test]
    fn macros_forward_to_transport() {
        let mut io = MockTransport::with_input("7 seven\n");
        let mut n = 0u32;
        let mut word: String<8> = String::new();
        let filled = crate::app_scanf!(io, "{} {}", &mut n, &mut word).unwrap();
        assert_eq!(filled, 2);
        crate::app_printf!(io, "{}={}", word, n).unwrap();
        assert_eq!(io.output(), "seven=7");
    }
}
