// This file is part of Gear.
//
// Copyright (C) 2025 Gear Technologies Inc.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Integration tests for the `era` binary.

use std::{
    path::Path,
    process::{Command, Output},
};
use tempfile::TempDir;

/// Run binary `era` against the configuration in `dir`.
fn era(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_era"))
        .arg("--config")
        .arg(dir.join("config.toml"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run `era`")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "`era` failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn mortal_from_birth_block() {
    let dir = TempDir::new().unwrap();
    let out = stdout(&era(
        dir.path(),
        &["mortal", "--validity", "50", "--birth", "1000"],
    ));

    assert!(out.contains("Period: 64"));
    assert!(out.contains("Phase: 40"));
    assert!(out.contains("Quantize factor: 1"));
    assert!(out.contains("Era: 0x8502"));
    assert!(out.contains("Bytes: 0x85 0x02"));
}

#[test]
fn mortal_from_current_block_starts_one_block_earlier() {
    let dir = TempDir::new().unwrap();
    let out = stdout(&era(
        dir.path(),
        &["mortal", "--validity", "50", "--current", "1001"],
    ));

    assert!(out.contains("Era: 0x8502"));
}

#[test]
fn mortal_requires_a_block() {
    let dir = TempDir::new().unwrap();
    let output = era(dir.path(), &["mortal", "--validity", "50"]);

    assert!(!output.status.success());
}

#[test]
fn mortal_uses_configured_validity() {
    let dir = TempDir::new().unwrap();

    let out = stdout(&era(dir.path(), &["mortal", "--birth", "1000"]));
    assert!(out.contains("Period: 64"));

    stdout(&era(dir.path(), &["config", "set", "validity", "65537"]));
    let out = stdout(&era(dir.path(), &["mortal", "--birth", "1000005"]));
    assert!(out.contains("Period: 65536"));
    assert!(out.contains("Phase: 16960"));
    assert!(out.contains("Era: 0x4f42"));

    stdout(&era(dir.path(), &["config", "reset"]));
    let out = stdout(&era(dir.path(), &["config", "get"]));
    assert!(out.contains("Validity: 50"));
}

#[test]
fn decode_mortal_and_immortal() {
    let dir = TempDir::new().unwrap();

    let out = stdout(&era(dir.path(), &["decode", "0x8502"]));
    assert!(out.contains("Kind: mortal"));
    assert!(out.contains("Period exponent: 5"));
    assert!(out.contains("Quantized phase: 40"));
    assert!(out.contains("Period: 64"));
    assert!(out.contains("Phase: 40"));

    let out = stdout(&era(dir.path(), &["decode", "00"]));
    assert!(out.contains("Kind: immortal"));
}

#[test]
fn decode_rejects_invalid_era() {
    let dir = TempDir::new().unwrap();

    assert!(!era(dir.path(), &["decode", "0x0000"]).status.success());
    assert!(!era(dir.path(), &["decode", "0x850200"]).status.success());
    assert!(!era(dir.path(), &["decode", "not-hex"]).status.success());
}

#[test]
fn lifetime_of_mortal_era() {
    let dir = TempDir::new().unwrap();
    let out = stdout(&era(dir.path(), &["lifetime", "0x8502", "--current", "1063"]));

    assert!(out.contains("Birth: #1000"));
    assert!(out.contains("Death: #1064"));

    let out = stdout(&era(dir.path(), &["lifetime", "0x00", "--current", "1063"]));
    assert!(out.contains("Birth: #0"));
    assert!(out.contains("Death: never"));
}
