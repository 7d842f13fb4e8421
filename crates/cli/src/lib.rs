// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tkrs - issue tracker CLI library.
//!
//! This crate provides the `tk` command-line front end over [`tk_core`]:
//! the built-in demonstration scenario, JSON Schema output for the
//! structured types, and shell completion generation.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - clap argument types
//! - [`display`] - pure text formatters over structured core data
//! - [`colors`] - terminal color helpers for section headers
//! - [`Error`] - error types for all commands

mod cli;
pub mod colors;
mod commands;
pub mod display;
pub mod error;

pub use cli::{Cli, Command, OutputFormat, SchemaCommand};
pub use error::{Error, Result};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Demo { output } => commands::demo::run(output),
        Command::Schema { target } => commands::schema::run(target),
        Command::Completion { shell } => commands::completion::run(shell),
    }
}
