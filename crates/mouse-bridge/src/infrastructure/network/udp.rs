//! UDP datagram transport.
//!
//! The peer address is resolved exactly once, when the bridge starts.  The
//! socket binds an ephemeral local port of the same address family as the
//! peer and sends with `send_to`, so no connection state exists: a peer that
//! is down simply never sees the datagrams.
//!
//! Sends are synchronous.  A datagram of a few bytes never blocks for long on
//! a UDP socket, and keeping the call synchronous lets the window loop use the
//! same transport on the main thread.

use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use thiserror::Error;
use tracing::{debug, info};

use crate::application::forward::DatagramSink;

/// Errors raised while setting up the transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Name resolution failed.
    #[error("failed to resolve peer '{host}': {source}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },
    /// Resolution succeeded but produced no address.
    #[error("peer '{host}' resolved to no address")]
    NoAddress { host: String },
    /// The local socket could not be bound.
    #[error("failed to bind UDP socket on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
}

/// Resolves `host:port` to a single socket address, preferring IPv4.
///
/// `host` may be a dotted IPv4 literal, an IPv6 literal or a hostname.
pub fn resolve_peer(host: &str, port: u16) -> Result<SocketAddr, TransportError> {
    // Bare IPv6 literals need no brackets here.
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }

    let candidates: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|source| TransportError::Resolve {
            host: host.to_string(),
            source,
        })?
        .collect();
    debug!("resolved {host} to {candidates:?}");

    candidates
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| candidates.first())
        .copied()
        .ok_or_else(|| TransportError::NoAddress {
            host: host.to_string(),
        })
}

/// A bound UDP socket aimed at one peer.
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
    peer: SocketAddr,
}

impl UdpTransport {
    /// Binds an ephemeral local port suitable for sending to `peer`.
    pub fn open(peer: SocketAddr) -> Result<Self, TransportError> {
        let unspecified = match peer.ip() {
            IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        };
        let addr = SocketAddr::new(unspecified, 0);
        let socket =
            UdpSocket::bind(addr).map_err(|source| TransportError::Bind { addr, source })?;
        let local = socket.local_addr().unwrap_or(addr);
        info!("UDP transport bound to {local} -> {peer}");
        Ok(Self { socket, peer })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }
}

impl DatagramSink for UdpTransport {
    fn send(&self, payload: &[u8]) -> io::Result<()> {
        self.socket.send_to(payload, self.peer).map(|_| ())
    }
}
