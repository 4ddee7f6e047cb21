//! # devport CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`port.rs`, `urls.rs`, ...).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate and runs
//! the compiled `devport` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::net::{Ipv4Addr, TcpListener};
use std::path::Path;
use tempfile::TempDir;

/// # Get devport Command (`devport_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `devport` binary.
///
/// ## Panics
/// Panics if the `devport` binary cannot be found via `Command::cargo_bin`.
pub fn devport_cmd() -> Command {
    Command::cargo_bin("devport").expect("Failed to find devport binary for testing")
}

/// # Isolated Project Directory (`isolated_project`)
///
/// Creates a temporary directory marked as a git root, so the project config
/// search never leaves it, and which also serves as the home/config directory
/// so no real user configuration is read.
pub fn isolated_project() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp project dir");
    std::fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    dir
}

/// # devport Command In Directory (`devport_cmd_in`)
///
/// Runs `devport` inside `dir` with the `PORT` override removed and the user
/// config location pointed into `dir`.
pub fn devport_cmd_in(dir: &Path) -> Command {
    let mut cmd = devport_cmd();
    cmd.current_dir(dir)
        .env_remove("PORT")
        .env_remove("RUST_LOG")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd
}

/// # Hold Port (`hold_port`)
///
/// Binds an OS-assigned port on every interface and keeps it bound for as
/// long as the returned listener lives.
pub fn hold_port() -> (TcpListener, u16) {
    let listener =
        TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0)).expect("Failed to bind ephemeral port");
    let port = listener.local_addr().expect("Failed to read local addr").port();
    (listener, port)
}

/// # Free Port (`free_port`)
///
/// Returns a port that was free a moment ago.
pub fn free_port() -> u16 {
    let (listener, port) = hold_port();
    drop(listener);
    port
}

/// The exact message printed when an explicitly requested port is taken.
pub fn port_unavailable_message(port: u16) -> String {
    format!(
        "Another process is already running on port {}. Please choose a different port.",
        port
    )
}
