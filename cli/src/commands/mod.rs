//! # devport Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level command groups of the devport CLI and
//! the argument pieces they share.
//!
//! ## Command Groups
//!
//! - `port`: Probe, find and resolve ports
//! - `urls`: List reachable server URLs, append cache-busting timestamps
//!
//! Each command group defines its own arguments structure and handler function.
//!
use clap::Args;
use devport::core::config::BindOverrides;

/// Command group for port checks (`probe`, `find`, `resolve`).
pub mod port;
/// Command group for URL output (`list`, `stamp`).
pub mod urls;

/// Environment variable consulted for a port override when no port was
/// requested by flag or configuration file.
pub const PORT_ENV_VAR: &str = "PORT";

/// # Bind Flags (`BindFlags`)
///
/// Command-line flags that override the configured `BindOptions`.
#[derive(Args, Debug, Clone, Default)]
pub struct BindFlags {
    /// Explicitly request this port (0 lets the OS choose).
    #[arg(long, short, value_parser = devport::common::network::ports::parse_port)]
    pub port: Option<u16>,

    /// Host the server binds. `0.0.0.0` means every interface.
    #[arg(long)]
    pub host: Option<String>,

    /// The server uses TLS (`https` URLs).
    #[arg(long, conflicts_with = "no_tls")]
    pub tls: bool,

    /// The server does not use TLS, even if a configuration file enables it.
    #[arg(long)]
    pub no_tls: bool,
}

impl From<&BindFlags> for BindOverrides {
    fn from(flags: &BindFlags) -> Self {
        BindOverrides {
            port: flags.port,
            host: flags.host.clone(),
            tls: match (flags.tls, flags.no_tls) {
                (true, _) => Some(true),
                (false, true) => Some(false),
                (false, false) => None,
            },
        }
    }
}

/// Reads the port override from the environment at call time.
pub fn env_port() -> Option<String> {
    std::env::var(PORT_ENV_VAR).ok()
}
