//! # devport URL Commands
//!
//! File: cli/src/commands/urls/mod.rs
//!
//! ## Overview
//!
//! The `devport urls` command group prints URLs for a development server:
//!
//! - `list`: The URLs a server bound with the given options is reachable at
//! - `stamp`: A URL with a cache-busting `t=<timestamp>` parameter appended
//!
//! ## Examples
//!
//! ```bash
//! devport urls list --port 3000
//! devport urls list --host 0.0.0.0 --port 3000 --tls
//! devport urls list --pipe /tmp/dev.sock
//! devport urls stamp "http://localhost:3000/app.js?v=2"
//! ```
//!
use clap::{Parser, Subcommand};
use devport::core::error::Result;

mod list;
mod stamp;

/// # URL Command Group Arguments (`UrlsArgs`)
#[derive(Parser, Debug)]
pub struct UrlsArgs {
    #[command(subcommand)]
    command: UrlsCommand,
}

/// # URL Subcommands (`UrlsCommand`)
#[derive(Subcommand, Debug)]
enum UrlsCommand {
    /// List the URLs a server is reachable at, loopback first.
    List(list::ListArgs),
    /// Append a cache-busting timestamp to a URL.
    Stamp(stamp::StampArgs),
}

/// # Handle URLs Command (`handle_urls`)
pub async fn handle_urls(args: UrlsArgs) -> Result<()> {
    match args.command {
        UrlsCommand::List(list_args) => list::handle_list(list_args).await,
        UrlsCommand::Stamp(stamp_args) => stamp::handle_stamp(stamp_args),
    }
}
