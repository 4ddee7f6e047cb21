//! # devport Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by the networking helpers and the command handlers:
//! - `config`: Layered loading of `BindOptions` from defaults, files and flags
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config::{self, BindOptions};
//! use crate::core::error::{DevportError, Result};
//! ```
//!
pub mod config;
pub mod error;
