//! Fixed capacity buffer formatted output is rendered into before it is transmitted.

use core::fmt;

use heapless::Vec;

/// Collects rendered text up to `N` bytes and silently drops the rest.
///
/// A cut can fall inside a multi-byte character, the bytes are transmitted as is.
pub struct RenderBuffer<const N: usize> {
    bytes: Vec<u8, N>,
    truncated: bool,
}

impl<const N: usize> RenderBuffer<N> {
    pub const fn new() -> Self {
        RenderBuffer {
            bytes: Vec::new(),
            truncated: false,
        }
    }

    /// Renders `args` into a fresh buffer.
    pub fn render(args: fmt::Arguments<'_>) -> Self {
        let mut buf = Self::new();
        // write_str never fails, so neither does write_fmt unless a Display impl does
        let _ = fmt::write(&mut buf, args);
        buf
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// true if some output did not fit
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

impl<const N: usize> Default for RenderBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for RenderBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = N - self.bytes.len();
        let take = s.len().min(room);
        if take < s.len() {
            self.truncated = true;
        }
        // take never exceeds the remaining capacity
        let _ = self.bytes.extend_from_slice(&s.as_bytes()[..take]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_within_capacity() {
        let buf = RenderBuffer::<32>::render(format_args!("Entered => {}\n", "hi"));
        assert_eq!(buf.as_bytes(), b"Entered => hi\n");
        assert!(!buf.truncated());
    }

    #[test]
    fn cuts_at_capacity() {
        let long = "x".repeat(40);
        let buf = RenderBuffer::<16>::render(format_args!("<{}>", long));
        assert_eq!(buf.len(), 16);
        assert!(buf.truncated());
        assert_eq!(&buf.as_bytes()[..1], b"<");
        assert!(buf.as_bytes()[1..].iter().all(|b| *b == b'x'));
    }

    #[test]
    fn exact_fit_is_not_truncated() {
        let buf = RenderBuffer::<4>::render(format_args!("{}", "abcd"));
        assert_eq!(buf.as_bytes(), b"abcd");
        assert!(!buf.truncated());
    }
}
