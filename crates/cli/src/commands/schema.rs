// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for the structured output types, so
//! downstream consumers of `-o json` can validate what they read.

use schemars::schema_for;

use tk_core::{DashboardSnapshot, Event, IssueSummary, MemberIdentity};

use crate::cli::SchemaCommand;
use crate::error::Result;

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let schema = match cmd {
        SchemaCommand::Snapshot => schema_for!(DashboardSnapshot),
        SchemaCommand::Issue => schema_for!(IssueSummary),
        SchemaCommand::Member => schema_for!(MemberIdentity),
        SchemaCommand::Event => schema_for!(Event),
    };

    let json = serde_json::to_string_pretty(&schema)?;
    println!("{}", json);
    Ok(())
}
