//! # devport Port Probe Command
//!
//! File: cli/src/commands/port/probe.rs
//!
//! Implements `devport port probe <PORT>`. Prints whether the port is free and
//! exits successfully either way; only a failed check is an error.
//!
use clap::Parser;
use devport::common::network::{ports, probe};
use devport::core::error::Result;
use tracing::info;

/// # Port Probe Arguments (`ProbeArgs`)
#[derive(Parser, Debug)]
pub struct ProbeArgs {
    /// The port to check.
    #[arg(value_parser = ports::parse_port)]
    port: u16,
}

/// # Handle Probe Command (`handle_probe`)
///
/// Binds the port once and reports the outcome on stdout.
///
/// ## Errors
///
/// Returns an error if the bind fails for a reason other than the port being
/// in use (for example a privileged port without permission).
pub async fn handle_probe(args: ProbeArgs) -> Result<()> {
    info!("Probing port {}", args.port);

    if probe::probe(args.port).await? {
        println!("Port {} is free", args.port);
    } else {
        println!("Port {} is in use", args.port);
    }
    Ok(())
}
