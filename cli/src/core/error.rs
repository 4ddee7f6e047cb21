//! # devport Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout devport. Fallible
//! operations return `Result<T>` (an alias for `anyhow::Result<T>`) and raise
//! one of the `DevportError` variants when the caller may need to react to the
//! specific condition.
//!
//! ## Architecture
//!
//! - `DevportError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The variants cover:
//! - Socket bind failures other than "address in use"
//! - An explicitly requested port that is already taken
//! - Invalid port strings (CLI input, `PORT` environment variable)
//! - Network interface enumeration failures
//! - Configuration file problems
//!
//! ## Examples
//!
//! Distinguishing "port taken" from other failures:
//!
//! ```rust,ignore
//! match network::ports::resolve(&options, env_port).await {
//!     Ok(port) => println!("Using port {}", port),
//!     Err(e) if matches!(e.downcast_ref::<DevportError>(), Some(DevportError::PortUnavailable { .. })) => {
//!         eprintln!("{}", e);
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for devport.
#[derive(Error, Debug)]
pub enum DevportError {
    /// Binding a probe socket failed for a reason other than the port being in use
    /// (permission denied, address not available, ...).
    #[error("Failed to bind port {port}: {source}")]
    BindFailure {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// The user explicitly asked for a port that another process holds.
    /// The message wording is relied upon by callers and must not change.
    #[error("Another process is already running on port {port}. Please choose a different port.")]
    PortUnavailable { port: u16 },

    #[error("Invalid port '{0}': expected a base-10 integer between 0 and 65535")]
    InvalidPort(String),

    #[error("Failed to list network interfaces: {0}")]
    InterfaceQuery(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
