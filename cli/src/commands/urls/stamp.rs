//! # devport URL Stamp Command
//!
//! File: cli/src/commands/urls/stamp.rs
//!
//! Implements `devport urls stamp <URL> [--time T]`.
//!
use clap::Parser;
use devport::common::network::url;
use devport::core::error::Result;

/// # URL Stamp Arguments (`StampArgs`)
#[derive(Parser, Debug)]
pub struct StampArgs {
    /// The URL to extend. It is not validated.
    url: String,

    /// Timestamp to append. Defaults to the current Unix time in milliseconds.
    #[arg(long, short, allow_negative_numbers = true)]
    time: Option<i64>,
}

/// # Handle Stamp Command (`handle_stamp`)
pub fn handle_stamp(args: StampArgs) -> Result<()> {
    let timestamp = args
        .time
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
    println!("{}", url::append_timestamp(&args.url, timestamp));
    Ok(())
}
