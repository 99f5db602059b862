//! # mouse-bridge-core
//!
//! Shared library for the mouse bridge containing the coordinate mapper,
//! the aggregated input state, and the datagram text codec.
//!
//! This crate has zero dependencies on OS APIs, windowing toolkits, or
//! network sockets.  Everything here is pure and can be tested on any
//! platform without a display.
//!
//! # Architecture overview
//!
//! The bridge forwards a desktop mouse to an embedded peer that draws on a
//! fixed 320×240 screen.  Every datagram carries one snapshot of the pointer:
//!
//! ```text
//! PointerEvent ─▶ InputState ─▶ CoordinateMapper ─▶ LogicalFrame ─▶ "x,y,pressed,wheel"
//! ```
//!
//! - **`domain`** – The logical grid, the native resolution, the mapper that
//!   rescales between them, and the owned [`InputState`] that absorbs events.
//!
//! - **`protocol`** – How a [`LogicalFrame`] is rendered to (and parsed from)
//!   the comma-separated ASCII payload the peer expects on UDP port 4210.

pub mod domain;
pub mod protocol;

pub use domain::event::{MouseButton, PointerEvent};
pub use domain::grid::{
    map_axis, CoordinateMapper, LogicalGrid, Resolution, ResolutionParseError,
};
pub use domain::state::{InputState, LogicalFrame};
pub use protocol::packet::{decode_packet, encode_frame, PacketError, PacketFormat, PEER_PORT};
