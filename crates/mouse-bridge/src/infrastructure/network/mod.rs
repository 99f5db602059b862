//! Network infrastructure for the bridge.
//!
//! # Sub-modules
//!
//! - **`udp`** – Resolves the peer once at startup and sends each payload as
//!   one fire-and-forget UDP datagram.  Nothing is ever received.

pub mod udp;

pub use udp::{resolve_peer, TransportError, UdpTransport};
