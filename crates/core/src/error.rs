// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tk-core operations.

use thiserror::Error;

/// All possible errors that can occur in tk-core operations.
///
/// The permissive entity operations (append, overwrite mutators) never
/// fail; errors come from the validated insertion paths, the id lookups,
/// and the checked status mutator.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(u32),

    #[error("user not found: {0}")]
    UserNotFound(u32),

    #[error("duplicate issue id: {0}")]
    DuplicateIssue(u32),

    #[error("duplicate user id: {0}")]
    DuplicateUser(u32),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: NEW, IN_PROGRESS, RESOLVED, CLOSED")]
    InvalidStatus(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tk-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
