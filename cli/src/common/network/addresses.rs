//! # Reachable Address Listing (`common::network::addresses`)
//!
//! File: cli/src/common/network/addresses.rs
//!
//! ## Overview
//!
//! Turns the address a server is bound to into the URLs a user can open, for
//! "server running at ..." output.
//!
//! - A pre-formatted address (named pipe, unix socket path) is passed through as is.
//! - An explicit host yields exactly one URL built from that host.
//! - The wildcard host `0.0.0.0` yields a `localhost` URL followed by one URL per
//!   external IPv4 address found on the host's network interfaces.
//!
//! ## Architecture
//!
//! Interface enumeration sits behind the `InterfaceSource` trait so callers
//! (and tests) inject it per call. `SystemInterfaces` queries the OS fresh on
//! every call; nothing is cached.
//!
use crate::core::config::BindOptions;
use crate::core::error::{DevportError, Result};
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use tracing::{debug, info};

/// Host value meaning "listen on every interface".
pub const WILDCARD_HOST: &str = "0.0.0.0";

/// Address family of a bound socket or interface address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressFamily {
    IPv4,
    IPv6,
    Other(String),
}

impl From<&IpAddr> for AddressFamily {
    fn from(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => AddressFamily::IPv4,
            IpAddr::V6(_) => AddressFamily::IPv6,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::IPv4 => write!(f, "IPv4"),
            AddressFamily::IPv6 => write!(f, "IPv6"),
            AddressFamily::Other(name) => write!(f, "{}", name),
        }
    }
}

/// # Bound Address (`BoundAddress`)
///
/// What a listening server reports about its own address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundAddress {
    /// An opaque address that is already printable (pipe or socket path).
    Formatted(String),
    /// A TCP socket bound to some interface.
    Socket { port: u16, family: AddressFamily },
}

impl From<SocketAddr> for BoundAddress {
    fn from(addr: SocketAddr) -> Self {
        BoundAddress::Socket {
            port: addr.port(),
            family: AddressFamily::from(&addr.ip()),
        }
    }
}

/// One address assigned to a network interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub family: AddressFamily,
    pub address: IpAddr,
    /// Loopback or otherwise not reachable from other hosts.
    pub is_internal: bool,
}

impl InterfaceAddress {
    pub fn new(address: IpAddr) -> Self {
        Self {
            family: AddressFamily::from(&address),
            address,
            is_internal: address.is_loopback(),
        }
    }
}

/// # Network Interface Snapshot (`NetworkInterfaceSnapshot`)
///
/// Interface names mapped to their addresses, in the order the OS reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkInterfaceSnapshot {
    interfaces: Vec<(String, Vec<InterfaceAddress>)>,
}

impl NetworkInterfaceSnapshot {
    /// Builds a snapshot from a flat `(interface name, address)` listing.
    /// Addresses are grouped under their interface; interfaces keep the order
    /// in which they first appear.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, InterfaceAddress)>,
    {
        let mut interfaces: Vec<(String, Vec<InterfaceAddress>)> = Vec::new();
        for (name, address) in pairs {
            match interfaces.iter_mut().find(|(existing, _)| *existing == name) {
                Some((_, addresses)) => addresses.push(address),
                None => interfaces.push((name, vec![address])),
            }
        }
        Self { interfaces }
    }

    pub fn interfaces(&self) -> impl Iterator<Item = (&str, &[InterfaceAddress])> {
        self.interfaces
            .iter()
            .map(|(name, addresses)| (name.as_str(), addresses.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

/// Supplies the current network interface snapshot.
pub trait InterfaceSource {
    fn snapshot(&self) -> Result<NetworkInterfaceSnapshot>;
}

/// Reads the live interface list from the operating system on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInterfaces;

impl InterfaceSource for SystemInterfaces {
    fn snapshot(&self) -> Result<NetworkInterfaceSnapshot> {
        let pairs = local_ip_address::list_afinet_netifas()
            .map_err(|e| DevportError::InterfaceQuery(e.to_string()))?;
        debug!("OS reported {} interface addresses", pairs.len());

        Ok(NetworkInterfaceSnapshot::from_pairs(
            pairs
                .into_iter()
                .map(|(name, ip)| (name, InterfaceAddress::new(ip))),
        ))
    }
}

/// # List Reachable Addresses (`list_addresses`)
///
/// Produces the URLs under which a server bound at `addr` can be reached,
/// loopback first.
///
/// ## Arguments
///
/// * `addr`: The bound address reported by the server.
/// * `options`: Only `host` and `use_tls` are read.
/// * `interfaces`: Consulted only when `options.host` is the wildcard host.
///
/// ## Errors
///
/// Propagates failures of `interfaces.snapshot()`.
pub fn list_addresses(
    addr: &BoundAddress,
    options: &BindOptions,
    interfaces: &dyn InterfaceSource,
) -> Result<Vec<String>> {
    let port = match addr {
        BoundAddress::Formatted(formatted) => return Ok(vec![formatted.clone()]),
        BoundAddress::Socket { port, family } => {
            debug!("Listing addresses for {} socket on port {}", family, port);
            *port
        }
    };

    let scheme = if options.use_tls { "https" } else { "http" };

    if options.host != WILDCARD_HOST {
        return Ok(vec![format!("{}://{}:{}", scheme, options.host, port)]);
    }

    let mut urls = vec![format!("{}://localhost:{}", scheme, port)];
    let snapshot = interfaces.snapshot()?;
    if snapshot.is_empty() {
        debug!("No network interfaces reported, listing localhost only");
    }
    for (name, addresses) in snapshot.interfaces() {
        for entry in addresses {
            if entry.family != AddressFamily::IPv4 || entry.is_internal {
                continue;
            }
            let address = entry.address.to_string();
            if address == WILDCARD_HOST {
                continue;
            }
            info!("Reachable via interface {}: {}", name, address);
            urls.push(format!("{}://{}:{}", scheme, address, port));
        }
    }

    Ok(urls)
}
