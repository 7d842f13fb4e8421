// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `tk demo` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn tk() -> Command {
    let mut cmd = Command::cargo_bin("tk").unwrap();
    // Pin rendering to the plain form regardless of the test environment.
    cmd.env("NO_COLOR", "1");
    cmd
}

fn demo_stdout() -> String {
    let output = tk().arg("demo").output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn demo_prints_team_roster() {
    tk().arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "User[ID=101, Name=Alice, Role=Dev, Email=alice@company.com]",
        ))
        .stdout(predicate::str::contains(
            "User[ID=102, Name=Bob, Role=QA, Email=bob@company.com]",
        ))
        .stdout(predicate::str::contains(
            "Manager: Charlie (Email: charlie@company.com)",
        ));
}

#[test]
fn demo_reports_each_notification() {
    tk().arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Issue 'Login Bug' assigned to Alice"))
        .stdout(predicate::str::contains("Issue 'Crash on Save' assigned to Bob"))
        .stdout(predicate::str::contains("Issue 'Data Loss' assigned to Alice"))
        .stdout(predicate::str::contains("Issue 'Login Bug' moved to IN_PROGRESS"))
        .stdout(predicate::str::contains("Issue 'Login Bug' moved to RESOLVED"))
        .stdout(predicate::str::contains("Issue 'Data Loss' moved to CLOSED"))
        .stdout(predicate::str::contains(
            "Manager Charlie approved issue: Login Bug",
        ));
}

#[test]
fn demo_prints_dashboard_in_insertion_order() {
    tk().arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "---- Project Dashboard ----\n\
             Project ID: 1, Name: BugTracker, Repo: https://github.com/bugtracker\n\
             Issue#1: Login Bug [High] - RESOLVED\n\
             Issue#2: Crash on Save [Medium] - IN_PROGRESS\n\
             Bug: Data Loss | Critical=true | Status=CLOSED",
        ));
}

#[test]
fn demo_high_severity_listing_has_exactly_issue_one() {
    let stdout = demo_stdout();
    let section = stdout
        .split("=== Issues with severity: High ===")
        .nth(1)
        .unwrap();
    let section = section.split("\n\n").next().unwrap();
    assert_eq!(section.trim(), "Issue#1: Login Bug [High] - RESOLVED");
}

#[test]
fn demo_critical_severity_listing_has_exactly_the_bug() {
    let stdout = demo_stdout();
    let section = stdout
        .split("=== Issues with severity: Critical ===")
        .nth(1)
        .unwrap();
    let section = section.split("\n\n").next().unwrap();
    assert_eq!(
        section.trim(),
        "Bug: Data Loss | Critical=true | Status=CLOSED"
    );
}

#[test]
fn demo_json_output_is_structured() {
    let output = tk().arg("demo").arg("-o").arg("json").output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let team = parsed["team"].as_array().unwrap();
    assert_eq!(team.len(), 3);
    assert_eq!(team[0]["kind"], "user");
    assert_eq!(team[2]["kind"], "manager");
    // The manager identity is the short form: no id, no role.
    assert!(team[2].get("id").is_none());
    assert!(team[2].get("role").is_none());

    let events = parsed["events"].as_array().unwrap();
    assert_eq!(events.len(), 8);
    assert_eq!(events[0]["action"], "assigned");
    assert_eq!(events[7]["action"], "approved");

    let issues = parsed["snapshot"]["issues"].as_array().unwrap();
    let statuses: Vec<&str> = issues
        .iter()
        .map(|i| i["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["RESOLVED", "IN_PROGRESS", "CLOSED"]);
    assert_eq!(issues[0]["kind"], "issue");
    assert_eq!(issues[2]["kind"], "bug");
    assert_eq!(issues[2]["critical"], true);
    assert_eq!(
        parsed["snapshot"]["repo_url"],
        "https://github.com/bugtracker"
    );
}

#[test]
fn demo_tagged_issue_description_appears_in_no_listing() {
    // Descriptions are not part of summaries; the tag formatting is a
    // creation-time concern only.
    let stdout = demo_stdout();
    assert!(!stdout.contains("[Tag=UI]"));
}
