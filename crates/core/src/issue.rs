// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types: Issue, IssueKind, Assignee, and the status vocabulary.
//!
//! Severity and status are opaque labels. New issues start at `"NEW"`;
//! after that any label is reachable from any label, including self-loops,
//! and nothing is terminal. The enumerated [`WorkflowStatus`] vocabulary
//! applies only to the separately named checked mutator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::event::{Action, Event};
use crate::member::Member;

/// The known workflow status vocabulary.
///
/// Used by [`Issue::change_status_checked`] only; the plain status field
/// accepts any label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowStatus {
    /// Initial state for new issues.
    New,
    /// Currently being worked on.
    InProgress,
    /// Fix made and accepted.
    Resolved,
    /// No further work expected.
    Closed,
}

impl WorkflowStatus {
    /// Returns the canonical label used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStatus::New => "NEW",
            WorkflowStatus::InProgress => "IN_PROGRESS",
            WorkflowStatus::Resolved => "RESOLVED",
            WorkflowStatus::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkflowStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "NEW" => Ok(WorkflowStatus::New),
            "IN_PROGRESS" => Ok(WorkflowStatus::InProgress),
            "RESOLVED" => Ok(WorkflowStatus::Resolved),
            "CLOSED" => Ok(WorkflowStatus::Closed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Classification of tracked work items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// Standard unit of tracked work.
    Issue,
    /// Defect report carrying a criticality flag.
    Bug { critical: bool },
}

/// Lightweight reference to the member an issue is assigned to.
///
/// A reference, not ownership: reassignment overwrites the whole value,
/// it never merges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub member_id: u32,
    pub name: String,
}

impl From<&Member> for Assignee {
    fn from(member: &Member) -> Self {
        Assignee {
            member_id: member.id(),
            name: member.name().to_string(),
        }
    }
}

/// The primary entity representing a tracked work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    issue_id: u32,
    title: String,
    description: String,
    severity: String,
    status: String,
    assignee: Option<Assignee>,
    kind: IssueKind,
    created_at: DateTime<Utc>,
}

impl Issue {
    /// Opens a standard issue. Status starts at `"NEW"`.
    pub fn new(issue_id: u32, title: String, description: String, severity: String) -> Self {
        Issue::with_kind(issue_id, title, description, severity, IssueKind::Issue)
    }

    /// Opens a bug report with a criticality flag.
    pub fn bug(
        issue_id: u32,
        title: String,
        description: String,
        severity: String,
        critical: bool,
    ) -> Self {
        Issue::with_kind(
            issue_id,
            title,
            description,
            severity,
            IssueKind::Bug { critical },
        )
    }

    fn with_kind(
        issue_id: u32,
        title: String,
        description: String,
        severity: String,
        kind: IssueKind,
    ) -> Self {
        Issue {
            issue_id,
            title,
            description,
            severity,
            status: WorkflowStatus::New.as_str().to_string(),
            assignee: None,
            kind,
            created_at: Utc::now(),
        }
    }

    pub fn issue_id(&self) -> u32 {
        self.issue_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Impact label, assigned once at creation.
    pub fn severity(&self) -> &str {
        &self.severity
    }

    /// Current workflow label.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn assignee(&self) -> Option<&Assignee> {
        self.assignee.as_ref()
    }

    pub fn kind(&self) -> IssueKind {
        self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the current assignee with a reference to the given member.
    ///
    /// Last write wins: no membership check, no rejection of reassignment.
    pub fn assign_to(&mut self, member: &Member) -> Event {
        let old = self.assignee.take().map(|a| a.name);
        let assignee = Assignee::from(member);
        let new = assignee.name.clone();
        self.assignee = Some(assignee);
        Event::new(Action::Assigned, self.issue_id, self.title.clone())
            .with_values(old, Some(new))
    }

    /// Overwrites the status label.
    ///
    /// Accepts any label, including the current one and labels outside the
    /// [`WorkflowStatus`] vocabulary.
    pub fn change_status(&mut self, status: String) -> Event {
        let old = std::mem::replace(&mut self.status, status);
        Event::new(Action::StatusChanged, self.issue_id, self.title.clone())
            .with_values(Some(old), Some(self.status.clone()))
    }

    /// Checked variant of [`Issue::change_status`].
    ///
    /// The label must parse (case-insensitively) as a [`WorkflowStatus`];
    /// the canonical form is stored. On an unknown label the issue is left
    /// untouched.
    pub fn change_status_checked(&mut self, status: &str) -> Result<Event> {
        let parsed: WorkflowStatus = status.parse()?;
        Ok(self.change_status(parsed.as_str().to_string()))
    }

    /// Structured summary. Standard issues report severity; bugs report the
    /// criticality flag instead.
    pub fn summary(&self) -> IssueSummary {
        match self.kind {
            IssueKind::Issue => IssueSummary::Issue {
                issue_id: self.issue_id,
                title: self.title.clone(),
                severity: self.severity.clone(),
                status: self.status.clone(),
            },
            IssueKind::Bug { critical } => IssueSummary::Bug {
                title: self.title.clone(),
                critical,
                status: self.status.clone(),
            },
        }
    }
}

/// Per-kind summary of an issue, as shown on dashboards and listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueSummary {
    Issue {
        issue_id: u32,
        title: String,
        severity: String,
        status: String,
    },
    Bug {
        title: String,
        critical: bool,
        status: String,
    },
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
