//! Forwarder: turns the aggregated pointer state into datagrams.
//!
//! The forwarder owns the [`InputState`], the [`CoordinateMapper`], and the
//! [`DatagramSink`].  Drivers feed it events with [`Forwarder::apply`] and ask
//! for a send with [`Forwarder::flush`].
//!
//! # Send failures
//!
//! Sends are best-effort.  A failed send is logged and counted, never
//! propagated: the next event or tick resends the current state anyway.  Only
//! the first failure of a run is logged at `warn`; repeats go to `debug` until
//! a send succeeds again.

use std::io;

use mouse_bridge_core::{
    encode_frame, CoordinateMapper, InputState, LogicalFrame, PacketFormat, PointerEvent,
};
use tracing::{debug, info, trace, warn};

/// Trait for delivering one datagram payload to the peer.
///
/// The infrastructure implementation wraps a UDP socket; tests record calls.
#[cfg_attr(test, mockall::automock)]
pub trait DatagramSink: Send {
    /// Sends `payload` as a single datagram.
    fn send(&self, payload: &[u8]) -> io::Result<()>;
}

/// Counters reported when the bridge stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardStats {
    pub sent: u64,
    pub failed: u64,
}

/// Owns the input state and sends it to the peer on request.
pub struct Forwarder<S> {
    state: InputState,
    mapper: CoordinateMapper,
    format: PacketFormat,
    sink: S,
    stats: ForwardStats,
    consecutive_failures: u64,
}

impl<S: DatagramSink> Forwarder<S> {
    pub fn new(mapper: CoordinateMapper, format: PacketFormat, sink: S) -> Self {
        Self {
            state: InputState::new(),
            mapper,
            format,
            sink,
            stats: ForwardStats::default(),
            consecutive_failures: 0,
        }
    }

    /// Folds one event into the state without sending.
    pub fn apply(&mut self, event: PointerEvent) {
        self.state.apply(event);
    }

    /// Encodes the current state and sends it, draining the wheel accumulator.
    ///
    /// Returns the frame that was (or failed to be) sent.
    pub fn flush(&mut self) -> LogicalFrame {
        let frame = self.state.take_frame(&self.mapper);
        let payload = encode_frame(&frame, self.format);

        match self.sink.send(payload.as_bytes()) {
            Ok(()) => {
                if self.consecutive_failures > 0 {
                    info!(
                        "datagram sends recovered after {} failure(s)",
                        self.consecutive_failures
                    );
                    self.consecutive_failures = 0;
                }
                self.stats.sent += 1;
                trace!(%payload, "datagram sent");
            }
            Err(e) => {
                self.stats.failed += 1;
                self.consecutive_failures += 1;
                if self.consecutive_failures == 1 {
                    warn!("datagram send failed, continuing: {e}");
                } else {
                    debug!("datagram send failed ({} in a row): {e}", self.consecutive_failures);
                }
            }
        }
        frame
    }

    /// Applies `event` and sends immediately (event-driven cadence).
    ///
    /// A wheel event is only accumulated when the payload has no wheel field,
    /// since sending would repeat the previous datagram.  Returns the sent
    /// frame, or `None` when nothing was sent.
    pub fn forward(&mut self, event: PointerEvent) -> Option<LogicalFrame> {
        self.apply(event);
        if matches!(event, PointerEvent::Wheel { .. }) && !self.format.carries_wheel() {
            return None;
        }
        Some(self.flush())
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn stats(&self) -> ForwardStats {
        self.stats
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
