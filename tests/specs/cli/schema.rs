// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `tk schema` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use yare::parameterized;

#[allow(deprecated)]
fn tk() -> Command {
    Command::cargo_bin("tk").unwrap()
}

#[parameterized(
    snapshot = { "snapshot" },
    issue = { "issue" },
    member = { "member" },
    event = { "event" },
)]
fn schema_emits_valid_json(target: &str) {
    let output = tk().arg("schema").arg(target).output().unwrap();
    assert!(output.status.success());
    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(schema.get("$schema").is_some());
    assert!(schema.get("title").is_some());
}

#[test]
fn schema_rejects_unknown_target() {
    let output = tk().arg("schema").arg("backlog").output().unwrap();
    assert!(!output.status.success());
}
