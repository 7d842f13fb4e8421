// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Demo command implementation.
//!
//! Wires the fixed demonstration scenario together: a three-person team, a
//! project with three issues, a round of assignments and status updates,
//! and a manager approval, followed by the dashboard and two severity
//! listings.

use serde::Serialize;

use tk_core::{
    DashboardSnapshot, Event, Manager, Member, MemberIdentity, Project, Tracker, User,
};

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::{
    format_event, format_issue_summary, format_member_identity, format_project_line,
    severity_header, DASHBOARD_HEADER,
};
use crate::error::Result;

/// JSON output structure for the demo command.
#[derive(Serialize)]
struct DemoOutputJson {
    team: Vec<MemberIdentity>,
    events: Vec<Event>,
    snapshot: DashboardSnapshot,
}

/// Run the demo command.
pub fn run(output: OutputFormat) -> Result<()> {
    let (project, events) = build_scenario()?;
    match output {
        OutputFormat::Text => print_text(&project, &events),
        OutputFormat::Json => {
            let out = DemoOutputJson {
                team: project.team().iter().map(Member::identity).collect(),
                snapshot: project.dashboard_snapshot(),
                events,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

/// Build the demonstration project and collect every emitted event.
fn build_scenario() -> Result<(Project, Vec<Event>)> {
    let tracker = Tracker::new();

    let alice = Member::from(User::new(
        101,
        "Alice".to_string(),
        "Dev".to_string(),
        "alice@company.com".to_string(),
    ));
    let bob = Member::from(User::new(
        102,
        "Bob".to_string(),
        "QA".to_string(),
        "bob@company.com".to_string(),
    ));
    let charlie = Manager::new(103, "Charlie".to_string(), "charlie@company.com".to_string());

    let mut project = Project::new(
        1,
        "BugTracker".to_string(),
        "https://github.com/bugtracker".to_string(),
    );
    project.add_user(alice.clone());
    project.add_user(bob.clone());
    project.add_user(Member::from(charlie.clone()));

    project.add_issue(tracker.create_issue(
        1,
        "Login Bug".to_string(),
        "Login fails intermittently".to_string(),
        "High".to_string(),
    ));
    project.add_issue(tracker.create_tagged_issue(
        2,
        "Crash on Save".to_string(),
        "App crashes when saving".to_string(),
        "Medium".to_string(),
        "UI",
    ));
    project.add_issue(tracker.create_bug(
        3,
        "Data Loss".to_string(),
        "File not saving properly".to_string(),
        "Critical".to_string(),
        true,
    ));

    let mut events = Vec::new();
    events.push(tracker.assign(project.issue_mut(1)?, &alice));
    events.push(tracker.assign(project.issue_mut(2)?, &bob));
    events.push(tracker.assign(project.issue_mut(3)?, &alice));

    events.push(tracker.update_status(project.issue_mut(1)?, "IN_PROGRESS".to_string()));
    events.push(tracker.update_status(project.issue_mut(1)?, "RESOLVED".to_string()));
    events.push(tracker.update_status(project.issue_mut(2)?, "IN_PROGRESS".to_string()));
    events.push(tracker.update_status(project.issue_mut(3)?, "CLOSED".to_string()));

    events.push(charlie.approve_issue(project.issue(1)?));

    tracing::debug!(events = events.len(), "demo scenario built");
    Ok((project, events))
}

/// Render the scenario as console text through the pure formatters.
fn print_text(project: &Project, events: &[Event]) {
    println!("{}", colors::header("Team:"));
    for member in project.team() {
        println!("  {}", format_member_identity(&member.identity()));
    }

    println!();
    for event in events {
        println!("{}", format_event(event));
    }

    let snapshot = project.dashboard_snapshot();
    println!();
    println!("{}", colors::header(DASHBOARD_HEADER));
    println!("{}", format_project_line(&snapshot));
    for summary in &snapshot.issues {
        println!("{}", format_issue_summary(summary));
    }

    for severity in ["High", "Critical"] {
        println!();
        println!("{}", colors::header(&severity_header(severity)));
        for issue in project.issues_by_severity(severity) {
            println!("{}", format_issue_summary(&issue.summary()));
        }
    }
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
