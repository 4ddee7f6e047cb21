//! # devport URL List Command
//!
//! File: cli/src/commands/urls/list.rs
//!
//! Implements `devport urls list`. Prints one URL per line.
//!
//! The port is taken from `--port`, the configuration files or `PORT`, in that
//! order. It is not probed, so the command also works for a server that is
//! already running. Without any of them the first free port from 8080 is used,
//! which is where `devport port resolve` would put a new server.
//!
use crate::commands::{env_port, BindFlags};
use clap::Parser;
use devport::common::network::addresses::{self, BoundAddress, SystemInterfaces};
use devport::common::network::ports;
use devport::core::config::{self, BindOptions, BindOverrides};
use devport::core::error::Result;
use tracing::{debug, info};

/// # URL List Arguments (`ListArgs`)
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    bind: BindFlags,

    /// The server listens on a named pipe or unix socket instead of a TCP port.
    /// The path is printed as is.
    #[arg(long, conflicts_with = "port")]
    pipe: Option<String>,
}

/// # Handle List Command (`handle_list`)
///
/// ## Errors
///
/// * Configuration files cannot be read or parsed.
/// * `PORT` is consulted and is not a valid port.
/// * The network interfaces cannot be listed (wildcard host only).
pub async fn handle_list(args: ListArgs) -> Result<()> {
    let options = config::load_bind_options(&BindOverrides::from(&args.bind))?;

    let bound = match args.pipe {
        Some(pipe) => BoundAddress::Formatted(pipe),
        None => BoundAddress::Socket {
            port: display_port(&options).await?,
            family: addresses::AddressFamily::IPv4,
        },
    };
    debug!("Listing URLs for {:?}", bound);

    let urls = addresses::list_addresses(&bound, &options, &SystemInterfaces)?;
    info!("Found {} reachable URL(s)", urls.len());
    for url in urls {
        println!("{}", url);
    }
    Ok(())
}

/// Picks the port to show URLs for without requiring it to be free.
async fn display_port(options: &BindOptions) -> Result<u16> {
    if let Some(port) = options.port {
        return Ok(port);
    }
    match env_port().filter(|value| !value.trim().is_empty()) {
        Some(value) => Ok(ports::parse_port(&value)?),
        None => ports::find_free(ports::DEFAULT_PORT).await,
    }
}
