//! Host transport over the process's standard streams (Linux, macOS, Windows).

use std::io::{self, BufRead, Stdin, Stdout, Write};

use crate::io::Transport;

/// [`Transport`] over a buffered reader and a writer, normally stdin/stdout.
///
/// The streams are ready as soon as the process starts, `init` does nothing.
pub struct HostStreams<R, W> {
    input: R,
    output: W,
}

impl HostStreams<io::StdinLock<'static>, Stdout> {
    /// The process's standard input and output.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        HostStreams::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HostStreams<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HostStreams { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Transport for HostStreams<R, W> {
    type Error = io::ErrorKind;

    fn init(&mut self) -> Result<(), io::ErrorKind> {
        Ok(())
    }

    // flushed right away so prompts without a newline show up before input is read
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), io::ErrorKind> {
        self.output.write_all(bytes).map_err(|e| e.kind())?;
        self.output.flush().map_err(|e| e.kind())
    }

    fn read_byte(&mut self) -> Result<Option<u8>, io::ErrorKind> {
        loop {
            let available = match self.input.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.kind()),
            };
            let Some(&byte) = available.first() else {
                return Ok(None);
            };
            self.input.consume(1);
            return Ok(Some(byte));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::IoError;

    fn streams(input: &str) -> HostStreams<Cursor<Vec<u8>>, Vec<u8>> {
        HostStreams::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn writes_rendered_text() {
        let mut host = streams("");
        host.init().unwrap();
        host.write_formatted(format_args!("Entered => {}\n", "hi")).unwrap();
        assert_eq!(host.output(), b"Entered => hi\n");
    }

    #[test]
    fn init_touches_neither_stream() {
        let mut host = streams("hello\n");
        host.init().unwrap();
        assert!(host.output().is_empty());

        let (input, _) = host.into_parts();
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn reads_lines_until_end_of_input() {
        let mut host = streams("hello\nworld");
        let mut line: heapless::String<16> = heapless::String::new();
        host.read_line(&mut line).unwrap();
        assert_eq!(line.as_str(), "hello");
        host.read_line(&mut line).unwrap();
        assert_eq!(line.as_str(), "world");
        assert_eq!(host.read_line(&mut line), Err(IoError::Eof));
    }
}
