//! # devport Port Find Command
//!
//! File: cli/src/commands/port/find.rs
//!
//! Implements `devport port find [START]`.
//!
use clap::Parser;
use devport::common::network::ports;
use devport::core::error::Result;
use tracing::info;

/// # Port Find Arguments (`FindArgs`)
#[derive(Parser, Debug)]
pub struct FindArgs {
    /// First port to try. Defaults to 8080.
    #[arg(value_parser = ports::parse_port, default_value_t = ports::DEFAULT_PORT)]
    start: u16,
}

/// # Handle Find Command (`handle_find`)
///
/// Prints the first free port in `START..=START+20`. When the whole range is
/// taken the last port of the range is printed anyway, matching
/// `ports::find_free`.
pub async fn handle_find(args: FindArgs) -> Result<()> {
    info!("Searching for a free port from {}", args.start);

    let port = ports::find_free(args.start).await?;
    println!("{}", port);
    Ok(())
}
