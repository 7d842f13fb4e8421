// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end specs for the `tk` binary.
//!
//! The spec files under `cli/` are registered as `[[test]]` targets of the
//! `trak` package so they run against the freshly built binary. This stub
//! library only anchors the package.
