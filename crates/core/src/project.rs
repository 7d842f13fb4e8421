// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The project aggregate: an ordered backlog of issues and an ordered team.
//!
//! The backlog is owned; the team is a membership listing (callers keep
//! their own member values for mutation). Both sequences preserve
//! insertion order and the plain append operations never deduplicate.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::issue::{Issue, IssueSummary};
use crate::member::Member;

/// A project with its backlog and team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    project_id: u32,
    name: String,
    repo_url: String,
    backlog: Vec<Issue>,
    team: Vec<Member>,
}

impl Project {
    pub fn new(project_id: u32, name: String, repo_url: String) -> Self {
        Project {
            project_id,
            name,
            repo_url,
            backlog: Vec::new(),
            team: Vec::new(),
        }
    }

    pub fn project_id(&self) -> u32 {
        self.project_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }

    /// Appends a member to the team. Repeat membership and duplicate ids
    /// are not rejected.
    pub fn add_user(&mut self, member: Member) {
        self.team.push(member);
    }

    /// Appends an issue to the backlog. Duplicate ids are not rejected.
    pub fn add_issue(&mut self, issue: Issue) {
        self.backlog.push(issue);
    }

    /// Validated insertion: rejects a member whose id is already on the
    /// team.
    pub fn try_add_user(&mut self, member: Member) -> Result<()> {
        if self.team.iter().any(|m| m.id() == member.id()) {
            return Err(Error::DuplicateUser(member.id()));
        }
        self.team.push(member);
        Ok(())
    }

    /// Validated insertion: rejects an issue whose id is already in the
    /// backlog.
    pub fn try_add_issue(&mut self, issue: Issue) -> Result<()> {
        if self.backlog.iter().any(|i| i.issue_id() == issue.issue_id()) {
            return Err(Error::DuplicateIssue(issue.issue_id()));
        }
        self.backlog.push(issue);
        Ok(())
    }

    /// The team, in insertion order.
    pub fn team(&self) -> &[Member] {
        &self.team
    }

    /// The backlog, in insertion order.
    pub fn issues(&self) -> &[Issue] {
        &self.backlog
    }

    /// Looks up a team member by id (first match in insertion order).
    pub fn member(&self, id: u32) -> Result<&Member> {
        self.team
            .iter()
            .find(|m| m.id() == id)
            .ok_or(Error::UserNotFound(id))
    }

    /// Looks up a backlog issue by id (first match in insertion order).
    pub fn issue(&self, id: u32) -> Result<&Issue> {
        self.backlog
            .iter()
            .find(|i| i.issue_id() == id)
            .ok_or(Error::IssueNotFound(id))
    }

    /// Mutable lookup of a backlog issue by id. This is how callers reach
    /// owned issues to mutate them through the tracker facade.
    pub fn issue_mut(&mut self, id: u32) -> Result<&mut Issue> {
        self.backlog
            .iter_mut()
            .find(|i| i.issue_id() == id)
            .ok_or(Error::IssueNotFound(id))
    }

    /// Backlog issues whose severity matches the label, case-insensitively,
    /// in backlog order. Lazy and restartable; no rendering side effect.
    pub fn issues_by_severity<'a>(
        &'a self,
        severity: &'a str,
    ) -> impl Iterator<Item = &'a Issue> + 'a {
        self.backlog
            .iter()
            .filter(move |i| i.severity().eq_ignore_ascii_case(severity))
    }

    /// Structured snapshot of project metadata and every backlog issue's
    /// summary, in insertion order. Pure read traversal.
    pub fn dashboard_snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            project_id: self.project_id,
            name: self.name.clone(),
            repo_url: self.repo_url.clone(),
            issues: self.backlog.iter().map(Issue::summary).collect(),
        }
    }
}

/// Project metadata plus ordered issue summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DashboardSnapshot {
    pub project_id: u32,
    pub name: String,
    pub repo_url: String,
    pub issues: Vec<IssueSummary>,
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
