//! # Port Probe (`common::network::probe`)
//!
//! File: cli/src/common/network/probe.rs
//!
//! ## Overview
//!
//! Tests whether a single TCP port can currently be bound. The probe binds a
//! transient listener on the wildcard interface and drops it straight away, so
//! the port is only occupied for the duration of the check.
//!
//! The dual-stack wildcard `[::]` is tried first, so a server listening only on
//! IPv6 (`[::1]`, as `localhost` often resolves) counts as a conflict. The IPv4
//! wildcard `0.0.0.0` is checked afterwards; it is the only check on hosts
//! without IPv6 and also covers hosts where `[::]` is IPv6-only.
//!
//! A successful probe is not a reservation. Another process may bind the same
//! port between the probe and the caller's real bind; callers must still handle
//! a failing bind of their own.
//!
use crate::core::error::{DevportError, Result};
use std::io::{self, ErrorKind};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::TcpListener;
use tracing::debug;

/// # Probe Port (`probe`)
///
/// Attempts to bind `[::]:<port>` and then `0.0.0.0:<port>`, releasing each
/// listener immediately.
///
/// ## Returns
///
/// * `Ok(true)`: Both binds succeeded (or IPv6 is unavailable and the IPv4
///   bind succeeded), the port is free right now.
/// * `Ok(false)`: A bind failed with "address in use".
///
/// ## Errors
///
/// Any other failure of the IPv4 bind (permission denied, ...) is returned as
/// `DevportError::BindFailure` so callers can tell "port taken" apart from
/// "could not check".
pub async fn probe(port: u16) -> Result<bool> {
    let dual_stack = SocketAddr::from((Ipv6Addr::UNSPECIFIED, port));
    match TcpListener::bind(dual_stack).await {
        Ok(listener) => drop(listener),
        Err(e) if e.kind() == ErrorKind::AddrInUse => {
            debug!("Port {} is in use on {}", port, dual_stack);
            return Ok(false);
        }
        // No usable IPv6 stack; the IPv4 bind below decides.
        Err(e) => debug!("Skipping IPv6 check for port {}: {}", port, e),
    }

    let ipv4 = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    classify_bind(port, TcpListener::bind(ipv4).await)
}

/// Maps the outcome of a probe bind to the `probe` result. A successful
/// listener is dropped before returning.
fn classify_bind(port: u16, bind: io::Result<TcpListener>) -> Result<bool> {
    match bind {
        Ok(listener) => {
            drop(listener);
            debug!("Port {} is free", port);
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AddrInUse => {
            debug!("Port {} is in use", port);
            Ok(false)
        }
        Err(e) => Err(DevportError::BindFailure { port, source: e }.into()),
    }
}
