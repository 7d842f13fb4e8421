// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stateless tracker facade over issue creation and mutation.

use crate::event::Event;
use crate::issue::Issue;
use crate::member::Member;

/// Creates and mutates issues on behalf of callers. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tracker;

impl Tracker {
    pub fn new() -> Self {
        Tracker
    }

    /// Opens a standard issue with status `"NEW"`.
    pub fn create_issue(
        &self,
        issue_id: u32,
        title: String,
        description: String,
        severity: String,
    ) -> Issue {
        Issue::new(issue_id, title, description, severity)
    }

    /// Opens a standard issue with a tag folded into the description.
    ///
    /// The description becomes exactly `"<description> [Tag=<tag>]"`; id,
    /// title, and severity pass through unchanged.
    pub fn create_tagged_issue(
        &self,
        issue_id: u32,
        title: String,
        description: String,
        severity: String,
        tag: &str,
    ) -> Issue {
        Issue::new(issue_id, title, format!("{description} [Tag={tag}]"), severity)
    }

    /// Opens a bug report with a criticality flag.
    pub fn create_bug(
        &self,
        issue_id: u32,
        title: String,
        description: String,
        severity: String,
        critical: bool,
    ) -> Issue {
        Issue::bug(issue_id, title, description, severity, critical)
    }

    /// Delegates to [`Issue::assign_to`].
    pub fn assign(&self, issue: &mut Issue, member: &Member) -> Event {
        issue.assign_to(member)
    }

    /// Delegates to [`Issue::change_status`].
    pub fn update_status(&self, issue: &mut Issue, status: String) -> Event {
        issue.change_status(status)
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
