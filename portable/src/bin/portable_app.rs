//! Host build of the portable echo application.
//!
//! Nothing on a host calls `setup`/`body` for us, so the self-driving entry
//! supplies the loop; input and output go through stdin/stdout.

use portable::app::EchoApp;
use portable::host::HostStreams;
use portable::{run_app, App, Transport};
use tracing_subscriber::EnvFilter;

struct HostApp<T> {
    echo: EchoApp<T>,
}

impl<T: Transport> App for HostApp<T> {
    fn setup(&mut self) {
        self.echo.setup();
    }

    fn body(&mut self) {
        self.echo.body();
        // stdin can end on a host, a serial line cannot
        if self.echo.input_closed() {
            std::process::exit(0);
        }
    }
}

fn main() {
    // stdout carries the application's output, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    run_app(HostApp {
        echo: EchoApp::new(HostStreams::stdio()),
    })
}
