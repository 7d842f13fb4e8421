// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for CLI commands.

use thiserror::Error;

/// All possible errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] tk_core::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for CLI commands.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
