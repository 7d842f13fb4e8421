// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "tk")]
#[command(about = "An in-memory issue tracker core with a demonstration front end")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the built-in demonstration scenario
    #[command(after_help = "Examples:\n  \
        tk demo            Print the scenario as console text\n  \
        tk demo -o json    Emit team, events, and dashboard snapshot as JSON")]
    Demo {
        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Print the JSON Schema for a structured output type
    Schema {
        #[command(subcommand)]
        target: SchemaCommand,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        shell: Shell,
    },
}

/// Structured output types with a published JSON Schema.
#[derive(Subcommand)]
pub enum SchemaCommand {
    /// Dashboard snapshot: project metadata plus ordered issue summaries
    Snapshot,
    /// Per-kind issue summary
    Issue,
    /// Per-kind member identity
    Member,
    /// Mutation notification event
    Event,
}
