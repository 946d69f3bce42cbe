//! Quanta command-line front end
//!
//! Reads one JSON request per line on stdin and writes one JSON response per
//! line on stdout. Logs go to stderr, filtered by `RUST_LOG` (default `info`).
//!
//! Methods:
//! - parse: read quantity text of any kind
//! - convert: read quantity text and express it in another unit of its kind
//! - units: list unit symbols, optionally for one kind
//! - kinds: list kinds in symbol resolution order

mod config;
mod handler;

use std::io::{self, BufRead, Write};

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::handler::Handler;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    info!(
        version = VERSION,
        mode = %config.mode,
        digits = ?config.digits,
        i18n = config.i18n,
        "quanta ready, waiting for requests"
    );

    let handler = Handler::new(config);
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("end of input");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(bytes = line.len(), "received request");

                let response = handler.handle_line(line);
                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", response.to_line()) {
                    error!(error = %e, "failed to write response");
                    break;
                }
                if let Err(e) = stdout.flush() {
                    error!(error = %e, "failed to flush stdout");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        }
    }
}
