// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pure text formatters over structured core data.
//!
//! Everything here maps data to `String`s; printing is the caller's job.
//! Console printing, logging, and any future API response are all just
//! consumers of the same structured values.

use tk_core::{Action, DashboardSnapshot, Event, IssueSummary, MemberIdentity};

/// Section header for the dashboard block.
pub const DASHBOARD_HEADER: &str = "---- Project Dashboard ----";

/// Section header for a severity listing.
pub fn severity_header(severity: &str) -> String {
    format!("=== Issues with severity: {} ===", severity)
}

/// Format a member identity line. Managers render a distinct shorter form.
pub fn format_member_identity(identity: &MemberIdentity) -> String {
    match identity {
        MemberIdentity::User {
            id,
            name,
            role,
            email,
        } => format!("User[ID={}, Name={}, Role={}, Email={}]", id, name, role, email),
        MemberIdentity::Manager { name, email } => {
            format!("Manager: {} (Email: {})", name, email)
        }
    }
}

/// Format a single issue summary line. Bugs render their criticality flag
/// in place of a severity.
pub fn format_issue_summary(summary: &IssueSummary) -> String {
    match summary {
        IssueSummary::Issue {
            issue_id,
            title,
            severity,
            status,
        } => format!("Issue#{}: {} [{}] - {}", issue_id, title, severity, status),
        IssueSummary::Bug {
            title,
            critical,
            status,
        } => format!("Bug: {} | Critical={} | Status={}", title, critical, status),
    }
}

/// Format a mutation event as a notification line.
pub fn format_event(event: &Event) -> String {
    let value = event.new_value.as_deref().unwrap_or_default();
    match event.action {
        Action::Assigned => format!("Issue '{}' assigned to {}", event.issue_title, value),
        Action::StatusChanged => format!("Issue '{}' moved to {}", event.issue_title, value),
        Action::Approved => format!("Manager {} approved issue: {}", value, event.issue_title),
    }
}

/// Format the project metadata line of a dashboard snapshot.
pub fn format_project_line(snapshot: &DashboardSnapshot) -> String {
    format!(
        "Project ID: {}, Name: {}, Repo: {}",
        snapshot.project_id, snapshot.name, snapshot.repo_url
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
