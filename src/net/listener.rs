//! TCP listener with address reuse.
//!
//! # Responsibilities
//! - Bind to the configured address with `SO_REUSEADDR` set, so a restarted
//!   fixture can rebind while the previous socket lingers in `TIME_WAIT`
//! - Hand the bound socket to tokio for the serve loop
//!
//! `SO_REUSEPORT` stays off, so a port held by a live listener still fails
//! to bind.

use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Configured address is not a socket address.
    #[error("Invalid bind address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Failed to bind to address.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// A bound listening socket, ready to be served.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
    local_addr: SocketAddr,
}

impl Listener {
    /// Bind to the configured address.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        let addr: SocketAddr =
            config
                .bind_address
                .parse()
                .map_err(|source| ListenerError::InvalidAddress {
                    address: config.bind_address.clone(),
                    source,
                })?;

        let bind_err = |source: std::io::Error| ListenerError::Bind {
            address: addr,
            source,
        };

        let socket = reusable_socket(&addr, config.backlog).map_err(bind_err)?;
        let inner = TcpListener::from_std(socket.into()).map_err(bind_err)?;
        let local_addr = inner.local_addr().map_err(bind_err)?;

        tracing::info!(
            address = %local_addr,
            backlog = config.backlog,
            "Listener bound"
        );

        Ok(Self { inner, local_addr })
    }

    /// Get the local address this listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Release the tokio listener for serving.
    pub fn into_inner(self) -> TcpListener {
        self.inner
    }
}

fn reusable_socket(addr: &SocketAddr, backlog: u32) -> std::io::Result<Socket> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // SO_REUSEADDR - allow binding to address in TIME_WAIT
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&(*addr).into())?;
    socket.listen(backlog.min(i32::MAX as u32) as i32)?;

    Ok(socket)
}
