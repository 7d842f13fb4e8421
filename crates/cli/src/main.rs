// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use tkrs::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logging goes to stderr so structured stdout output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = tkrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
