//! The portable echo application: reads some text and prints it back.
//!
//! It only knows the [`Transport`] trait, so the same code runs over a serial
//! line on the board and over stdin/stdout on a host.

use heapless::String;

use crate::config::LINE_CAPACITY;
use crate::entry::App;
use crate::error::IoError;
use crate::io::Transport;
use crate::{app_printf, app_scanf};

pub struct EchoApp<T> {
    io: T,
    text: String<LINE_CAPACITY>,
    closed: bool,
}

impl<T: Transport> EchoApp<T> {
    pub fn new(io: T) -> Self {
        EchoApp {
            io,
            text: String::new(),
            closed: false,
        }
    }

    /// true once the input stream has ended
    pub fn input_closed(&self) -> bool {
        self.closed
    }

    pub fn transport(&self) -> &T {
        &self.io
    }

    pub fn into_transport(self) -> T {
        self.io
    }

    fn echo(&mut self) -> Result<(), IoError<T::Error>> {
        app_printf!(self.io, "Enter text: ")?;
        match app_scanf!(self.io, "{}", &mut self.text)? {
            0 => app_printf!(self.io, "Entered nothing\n")?,
            _ => app_printf!(self.io, "Entered => {}\n", self.text)?,
        };
        Ok(())
    }
}

impl<T: Transport> App for EchoApp<T> {
    fn setup(&mut self) {
        // a transport that cannot start leaves nothing to talk to
        if let Err(e) = self.io.init() {
            panic!("transport init failed: {:?}", e);
        }
    }

    fn body(&mut self) {
        if self.closed {
            return;
        }
        match self.echo() {
            Ok(()) => {}
            Err(IoError::Eof) => {
                info!("input closed");
                self.closed = true;
            }
            Err(IoError::Transport(e)) => panic!("transport failure: {:?}", e),
            Err(reason) => {
                warn!("input line rejected");
                let _ = app_printf!(self.io, "\nInput rejected: {}\n", reason);
            }
        }
    }
}
