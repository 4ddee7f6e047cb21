//! # Port Selection (`common::network::ports`)
//!
//! File: cli/src/common/network/ports.rs
//!
//! ## Overview
//!
//! Picks the port a development server should bind:
//!
//! - `parse_port`: Strict base-10 parsing of user supplied port strings.
//! - `find_free`: Sequential search for a free port, starting at a given port.
//! - `resolve`: Honors an explicitly requested port (flag, config or `PORT`
//!   override) and otherwise falls back to `find_free(DEFAULT_PORT)`.
//!
//! ## Guarantees
//!
//! Every returned port was free when it was probed, except for the documented
//! exhaustion case of `find_free`. Nothing is reserved: the caller's own bind
//! can still lose a race against another process.
//!
use super::probe::probe;
use crate::core::config::BindOptions;
use crate::core::error::{DevportError, Result};
use tracing::{debug, info, warn};

/// Port used as the search start when no port was explicitly requested.
pub const DEFAULT_PORT: u16 = 8080;

/// Number of ports `find_free` examines: the start port plus 20 increments.
pub const MAX_PORT_ATTEMPTS: u16 = 21;

/// # Parse Port (`parse_port`)
///
/// Parses a port given as text (command-line argument, `PORT` variable).
/// Surrounding whitespace is ignored; anything else that is not a base-10
/// integer in `0..=65535` is rejected.
///
/// Returns the typed error directly so it can double as a clap value parser.
pub fn parse_port(input: &str) -> std::result::Result<u16, DevportError> {
    input
        .trim()
        .parse::<u16>()
        .map_err(|_| DevportError::InvalidPort(input.to_string()))
}

/// # Find Free Port (`find_free`)
///
/// Probes `start_port`, `start_port + 1`, ... one at a time and returns the
/// first port that can be bound. At most `MAX_PORT_ATTEMPTS` ports are tried,
/// stopping early at 65535.
///
/// If every examined port is taken, the last examined port is returned anyway.
/// This is a soft failure: the caller's real bind will report the conflict.
///
/// ## Errors
///
/// Propagates `DevportError::BindFailure` from the probe.
pub async fn find_free(start_port: u16) -> Result<u16> {
    let last_port = start_port.saturating_add(MAX_PORT_ATTEMPTS - 1);

    for port in start_port..=last_port {
        if probe(port).await? {
            if port != start_port {
                info!(
                    "Port {} was unavailable, using free port {} instead.",
                    start_port, port
                );
            }
            return Ok(port);
        }
        debug!("Port {} is in use, trying the next one", port);
    }

    warn!(
        "No free port found in {}..={}; returning {} without a guarantee it is free.",
        start_port, last_port, last_port
    );
    Ok(last_port)
}

/// # Resolve Server Port (`resolve`)
///
/// Determines the port a server should bind.
///
/// 1. The requested port is `options.port` when set (`Some(0)` counts as a request),
///    otherwise `env_port` when it is present and non-blank.
/// 2. A requested port is probed and returned if free. If it is taken the call
///    fails with `DevportError::PortUnavailable`; no other port is substituted.
/// 3. Without a request, the result of `find_free(DEFAULT_PORT)` is returned.
///
/// ## Errors
///
/// * `DevportError::PortUnavailable` when the requested port is in use.
/// * `DevportError::InvalidPort` when `env_port` is consulted and is not a valid port.
/// * `DevportError::BindFailure` from the underlying probe.
pub async fn resolve(options: &BindOptions, env_port: Option<&str>) -> Result<u16> {
    let requested = match options.port {
        Some(port) => Some(port),
        None => env_port
            .filter(|value| !value.trim().is_empty())
            .map(parse_port)
            .transpose()?,
    };

    let Some(port) = requested else {
        debug!("No port requested, searching from {}", DEFAULT_PORT);
        return find_free(DEFAULT_PORT).await;
    };

    if probe(port).await? {
        info!("Requested port {} is available", port);
        Ok(port)
    } else {
        Err(DevportError::PortUnavailable { port }.into())
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use tokio::net::TcpListener;

    /// Binds `count` consecutive ports on the wildcard interface and keeps them
    /// bound. The run starts at an OS-assigned port, so parallel tests never
    /// pick the same base.
    async fn hold_consecutive(count: u16) -> (Vec<TcpListener>, u16) {
        for _ in 0..50 {
            let first = TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0))
                .await
                .expect("bind ephemeral port");
            let base = first.local_addr().expect("local addr").port();
            if u32::from(base) + u32::from(count) - 1 > u32::from(u16::MAX) {
                continue;
            }

            let mut held = vec![first];
            for offset in 1..count {
                match TcpListener::bind((Ipv4Addr::UNSPECIFIED, base + offset)).await {
                    Ok(listener) => held.push(listener),
                    Err(_) => break,
                }
            }
            if held.len() == count as usize {
                return (held, base);
            }
        }
        panic!("could not hold {} consecutive ports", count);
    }

    fn options_with_port(port: Option<u16>) -> BindOptions {
        BindOptions {
            port,
            ..BindOptions::default()
        }
    }

    #[test]
    fn test_parse_port_valid() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
        assert_eq!(parse_port(" 3000\n").unwrap(), 3000);
        assert_eq!(parse_port("0").unwrap(), 0);
        assert_eq!(parse_port("65535").unwrap(), 65535);
    }

    #[test]
    fn test_parse_port_invalid() {
        for input in ["", "abc", "x80", "80x", "-1", "65536", "8.0"] {
            let result = parse_port(input);
            assert!(
                matches!(result, Err(DevportError::InvalidPort(ref s)) if s == input),
                "expected InvalidPort for {:?}",
                input
            );
        }
    }

    #[tokio::test]
    async fn test_find_free_start_is_free() -> Result<()> {
        let (held, base) = hold_consecutive(1).await;
        drop(held);

        assert_eq!(find_free(base).await?, base);
        Ok(())
    }

    #[tokio::test]
    async fn test_find_free_skips_occupied() -> Result<()> {
        let (mut held, base) = hold_consecutive(4).await;
        // Keep the first three, release the fourth.
        drop(held.pop());

        let port = find_free(base).await?;
        assert_eq!(port, base + 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_find_free_stays_in_range() -> Result<()> {
        let (_held, base) = hold_consecutive(2).await;

        let port = find_free(base).await?;
        assert!(port >= base);
        assert!(u32::from(port) <= u32::from(base) + u32::from(MAX_PORT_ATTEMPTS) - 1);
        Ok(())
    }

    /// Weak guarantee: when the whole window is occupied, the last examined
    /// port comes back even though it is not free.
    #[tokio::test]
    async fn test_find_free_exhausted_returns_last_port() -> Result<()> {
        let (_held, base) = hold_consecutive(MAX_PORT_ATTEMPTS).await;

        let port = find_free(base).await?;
        assert_eq!(port, base + 20);
        assert!(!probe(port).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_find_free_stops_at_max_port() -> Result<()> {
        let port = find_free(65530).await?;
        assert!(port >= 65530);
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_port_zero_is_explicit() -> Result<()> {
        assert_eq!(resolve(&options_with_port(Some(0)), None).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_requested_port_free() -> Result<()> {
        let (held, base) = hold_consecutive(1).await;
        drop(held);

        assert_eq!(resolve(&options_with_port(Some(base)), None).await?, base);
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_requested_port_taken() {
        let (_held, base) = hold_consecutive(1).await;

        let err = resolve(&options_with_port(Some(base)), None)
            .await
            .expect_err("occupied port must not resolve");
        assert!(matches!(
            err.downcast_ref::<DevportError>(),
            Some(DevportError::PortUnavailable { port }) if *port == base
        ));
        assert_eq!(
            err.to_string(),
            format!(
                "Another process is already running on port {}. Please choose a different port.",
                base
            )
        );
    }

    #[tokio::test]
    async fn test_resolve_port_9999_taken() {
        // Skip quietly if something else on the host already owns 9999.
        let Ok(_listener) = TcpListener::bind((Ipv4Addr::UNSPECIFIED, 9999)).await else {
            return;
        };

        let err = resolve(&options_with_port(Some(9999)), None)
            .await
            .expect_err("occupied port must not resolve");
        assert_eq!(
            err.to_string(),
            "Another process is already running on port 9999. Please choose a different port."
        );
    }

    #[tokio::test]
    async fn test_resolve_env_port_taken() {
        let (_held, base) = hold_consecutive(1).await;
        let env_value = base.to_string();

        let err = resolve(&options_with_port(None), Some(&env_value))
            .await
            .expect_err("occupied env port must not resolve");
        assert!(matches!(
            err.downcast_ref::<DevportError>(),
            Some(DevportError::PortUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_env_port_invalid() {
        let err = resolve(&options_with_port(None), Some("http"))
            .await
            .expect_err("non-numeric env port must fail");
        assert!(matches!(
            err.downcast_ref::<DevportError>(),
            Some(DevportError::InvalidPort(_))
        ));
    }

    #[tokio::test]
    async fn test_resolve_option_port_wins_over_env() -> Result<()> {
        // The env value is never parsed when an option port is set.
        assert_eq!(resolve(&options_with_port(Some(0)), Some("junk")).await?, 0);
        Ok(())
    }

    /// Both unrequested cases share one test so nothing else in this module
    /// probes the default port concurrently.
    #[tokio::test]
    async fn test_resolve_without_request_searches_from_default() -> Result<()> {
        let default_free = probe(DEFAULT_PORT).await?;

        let port = resolve(&options_with_port(None), None).await?;
        if default_free {
            assert_eq!(port, DEFAULT_PORT);
        }
        assert!(port >= DEFAULT_PORT && port <= DEFAULT_PORT + MAX_PORT_ATTEMPTS - 1);

        // A blank override counts as unset.
        let port = resolve(&options_with_port(None), Some("  ")).await?;
        assert!(port >= DEFAULT_PORT && port <= DEFAULT_PORT + MAX_PORT_ATTEMPTS - 1);
        Ok(())
    }
}
