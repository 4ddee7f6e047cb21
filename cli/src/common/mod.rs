//! # devport Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utility modules used by the command handlers, kept apart from
//! command-specific logic (`commands::`, in the binary) and core infrastructure
//! (`core::`).
//!
//! - **`network`**: Port probing, free port selection, reachable URL listing
//!   and cache-busting URL helpers.
//!

/// Host networking helpers for development servers.
pub mod network;
