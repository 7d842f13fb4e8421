// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Notification events emitted by issue mutations.
//!
//! Every mutation returns an [`Event`] describing what changed. Events are
//! plain data; consumers decide whether to print, log, or discard them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Types of changes a mutation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Issue was assigned to a member.
    Assigned,
    /// Issue status label was overwritten.
    StatusChanged,
    /// A manager approved the issue.
    Approved,
}

impl Action {
    /// Returns the string representation used in display and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Assigned => "assigned",
            Action::StatusChanged => "status_changed",
            Action::Approved => "approved",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A notification record describing a change made to an issue.
///
/// The value fields depend on the action:
/// - `Assigned`: old/new assignee names
/// - `StatusChanged`: old/new status labels
/// - `Approved`: `new_value` is the approving manager's name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Event {
    /// What type of change occurred.
    pub action: Action,
    /// The issue this event refers to.
    pub issue_id: u32,
    /// The issue's title at the time of the change.
    pub issue_title: String,
    /// Previous value, where one existed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    /// New value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    /// When the event occurred.
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Creates a new event with the current timestamp.
    pub fn new(action: Action, issue_id: u32, issue_title: String) -> Self {
        Event {
            action,
            issue_id,
            issue_title,
            old_value: None,
            new_value: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the old and new values for this event (builder pattern).
    pub fn with_values(mut self, old: Option<String>, new: Option<String>) -> Self {
        self.old_value = old;
        self.new_value = new;
        self
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
