//! # devport Network Utilities Module (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//!
//! ## Overview
//!
//! Host networking helpers used by development servers before and after they
//! open their listening socket.
//!
//! ## Architecture
//!
//! The module is organized into independent, stateless submodules:
//!
//! - **`probe`**: Checks whether a single TCP port can be bound right now.
//! - **`ports`**: Strict port parsing, sequential free-port search, and
//!   resolution of the port a server should use.
//! - **`addresses`**: Lists the URLs a bound server is reachable at, using an
//!   injected `InterfaceSource` for the OS interface list.
//! - **`url`**: Appends cache-busting timestamps to URLs.
//!
//! Probes are best-effort pre-checks. No port is reserved, so the server's own
//! bind may still lose a race against another process and must handle that.
//!
//! ## Usage
//!
//! ```rust
//! use devport::common::network::{addresses, ports};
//! use devport::core::config::BindOptions;
//!
//! # async fn run_example() -> devport::core::error::Result<()> {
//! let options = BindOptions::default();
//! let env_port = std::env::var("PORT").ok();
//! let port = ports::resolve(&options, env_port.as_deref()).await?;
//!
//! let bound = addresses::BoundAddress::Socket { port, family: addresses::AddressFamily::IPv4 };
//! for url in addresses::list_addresses(&bound, &options, &addresses::SystemInterfaces)? {
//!     println!("Server running at {}", url);
//! }
//! # Ok(())
//! # }
//! ```

/// Listing of reachable server URLs from a bound address.
pub mod addresses;
/// Free port search and server port resolution.
pub mod ports;
/// Single-port bind probe.
pub mod probe;
/// URL string helpers.
pub mod url;
