// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `tk completion` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn tk() -> Command {
    Command::cargo_bin("tk").unwrap()
}

#[test]
fn bash_completion_covers_subcommands() {
    tk().arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("schema"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn zsh_completion_generates_output() {
    tk().arg("completion")
        .arg("zsh")
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn completion_rejects_unknown_shell() {
    tk().arg("completion").arg("dos").assert().failure();
}
