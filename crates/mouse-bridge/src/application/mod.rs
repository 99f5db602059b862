//! Application layer for the bridge.
//!
//! Use cases in this layer depend on traits ([`forward::DatagramSink`],
//! [`window_loop::PointerWindow`]) rather than on sockets or windowing
//! toolkits, so they run unchanged against test doubles.  The
//! infrastructure layer implements those traits.
//!
//! # Sub-modules
//!
//! - **`forward`**     – Owns the [`InputState`](mouse_bridge_core::InputState)
//!   and turns it into datagrams.  This is the single "state ready → encode
//!   and send" path shared by both front-ends.
//!
//! - **`cadence`**     – Async drivers that consume events from a channel-fed
//!   source (the global hook) and decide when to send: on every event, or
//!   once per tick.
//!
//! - **`window_loop`** – The single-threaded frame loop for the bridge
//!   window: sample, send, render, wait.

pub mod cadence;
pub mod forward;
pub mod window_loop;

use std::fmt;

/// Why a driver returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The shutdown flag was cleared (Ctrl-C).
    Interrupted,
    /// The user closed the bridge window.
    WindowClosed,
    /// The input source hung up its event channel.
    SourceClosed,
}

impl StopReason {
    /// `true` when the user asked the bridge to stop.
    pub fn is_user_requested(self) -> bool {
        matches!(self, StopReason::Interrupted | StopReason::WindowClosed)
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopReason::Interrupted => "interrupted",
            StopReason::WindowClosed => "window closed",
            StopReason::SourceClosed => "input source closed",
        })
    }
}
