//! # devport Library Root
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Host networking helpers for local development servers, usable from other
//! crates and from the `devport` binary:
//! - Probing whether a TCP port can be bound
//! - Finding a free port in a bounded sequential range
//! - Resolving the port a server should use from explicit requests and defaults
//! - Listing the URLs a bound server is reachable at
//! - Appending cache-busting timestamps to URLs
//!
//! ## Architecture
//!
//! - `core`: Configuration (`BindOptions`) and error types
//! - `common::network`: The networking helpers themselves
//!
//! The command-line surface lives in the binary (`src/main.rs`, `src/commands/`)
//! and only calls into these modules.
//!
pub mod common;
pub mod core;
