// SPDX-License-Identifier: MIT

//! Log output for the command line tool.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the embedding process.

use tracing_subscriber::EnvFilter;

/// Human-readable events on stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_cli() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
