//! # devport Port Commands
//!
//! File: cli/src/commands/port/mod.rs
//!
//! ## Overview
//!
//! The `devport port` command group checks and picks TCP ports for a
//! development server:
//!
//! - `probe`: Report whether one port is free
//! - `find`: Print the first free port at or after a start port
//! - `resolve`: Print the port a server should bind, honoring explicit requests
//!
//! ## Examples
//!
//! ```bash
//! devport port probe 3000
//! devport port find 5173
//! PORT=4000 devport port resolve
//! devport port resolve --port 9000
//! ```
//!
use clap::{Parser, Subcommand};
use devport::core::error::Result;

mod find;
mod probe;
mod resolve;

/// # Port Command Group Arguments (`PortArgs`)
///
/// Captures which `devport port` subcommand the user wants to run.
#[derive(Parser, Debug)]
pub struct PortArgs {
    #[command(subcommand)]
    command: PortCommand,
}

/// # Port Subcommands (`PortCommand`)
#[derive(Subcommand, Debug)]
enum PortCommand {
    /// Check whether a port can be bound right now.
    Probe(probe::ProbeArgs),
    /// Find the first free port starting at a given port (at most 21 ports are tried).
    Find(find::FindArgs),
    /// Determine the port a server should bind.
    Resolve(resolve::ResolveArgs),
}

/// # Handle Port Command (`handle_port`)
///
/// Dispatches to the handler of the chosen subcommand.
pub async fn handle_port(args: PortArgs) -> Result<()> {
    match args.command {
        PortCommand::Probe(probe_args) => probe::handle_probe(probe_args).await,
        PortCommand::Find(find_args) => find::handle_find(find_args).await,
        PortCommand::Resolve(resolve_args) => resolve::handle_resolve(resolve_args).await,
    }
}
