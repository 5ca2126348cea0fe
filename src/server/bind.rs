//! Listener binding with a single fallback.
//!
//! The configured address is tried first. If it cannot be bound (usually
//! because the port is taken), the same host is bound on port 0 and the OS
//! picks a free port. The listener returned is already bound, so the port
//! cannot be taken between choosing and listening. There is no retry beyond
//! that one fallback.

use crate::error::{GpicError, Result};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// A bound listener and the address it ended up on.
#[derive(Debug)]
pub struct BoundListener {
    pub listener: TcpListener,
    pub local_addr: SocketAddr,
    /// Whether the preferred address failed and the fallback was used.
    pub fell_back: bool,
}

/// Bind `preferred`, falling back once to `fallback` (normally `<host>:0`).
pub async fn bind_with_fallback(preferred: &str, fallback: &str) -> Result<BoundListener> {
    let (listener, fell_back) = match TcpListener::bind(preferred).await {
        Ok(listener) => (listener, false),
        Err(e) => {
            warn!("could not bind {}: {}; asking the OS for a free port", preferred, e);
            let listener = TcpListener::bind(fallback).await.map_err(|fallback_err| {
                GpicError::ServerError(format!(
                    "failed to bind '{}' ({}) and fallback '{}' ({})",
                    preferred, e, fallback, fallback_err
                ))
            })?;
            (listener, true)
        }
    };

    let local_addr = listener.local_addr().map_err(|e| {
        GpicError::ServerError(format!("failed to read bound address: {}", e))
    })?;
    info!("bound {}", local_addr);

    Ok(BoundListener {
        listener,
        local_addr,
        fell_back,
    })
}

/// The URL users open: the configured host name with the port actually bound.
///
/// Keeps names like `localhost` instead of the resolved IP; falls back to the
/// bound IP when the configured address has no usable host part.
pub fn public_url(bind_address: &str, local_addr: SocketAddr) -> String {
    let host = bind_address
        .rsplit_once(':')
        .map(|(host, _)| host)
        .filter(|host| !host.is_empty() && *host != "0.0.0.0" && *host != "[::]");

    match host {
        Some(host) => format!("http://{}:{}", host, local_addr.port()),
        None => format!("http://{}", local_addr),
    }
}
