//! # devport Port Resolve Command
//!
//! File: cli/src/commands/port/resolve.rs
//!
//! Implements `devport port resolve [--port P] [--host H] [--tls | --no-tls]`.
//!
//! The requested port comes from `--port`, then the configuration files, then
//! the `PORT` environment variable. A requested port that is taken is an error;
//! without a request the first free port from 8080 is printed.
//!
use crate::commands::{env_port, BindFlags};
use clap::Parser;
use devport::common::network::ports;
use devport::core::config::{self, BindOverrides};
use devport::core::error::Result;
use tracing::debug;

/// # Port Resolve Arguments (`ResolveArgs`)
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    bind: BindFlags,
}

/// # Handle Resolve Command (`handle_resolve`)
///
/// Loads the effective `BindOptions`, resolves the port and prints it.
///
/// ## Errors
///
/// * The requested port is in use ("Another process is already running on port ...").
/// * `PORT` is set but is not a valid port.
/// * Configuration files cannot be read or parsed.
pub async fn handle_resolve(args: ResolveArgs) -> Result<()> {
    let options = config::load_bind_options(&BindOverrides::from(&args.bind))?;
    debug!("Resolving port with options {:?}", options);

    let port = ports::resolve(&options, env_port().as_deref()).await?;
    println!("{}", port);
    Ok(())
}
