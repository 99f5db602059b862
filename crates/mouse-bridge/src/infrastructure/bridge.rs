//! Wires the selected input source, the forwarder and the UDP transport
//! together and runs until shutdown.
//!
//! [`run_bridge`] does the OS-facing setup (peer resolution, socket, hook or
//! window) and hands off to [`run_hook_source`] or [`run_window_source`].
//! Those two take their source and sink as trait objects / generics so they
//! run against test doubles.

use std::sync::{atomic::AtomicBool, Arc};

use mouse_bridge_core::CoordinateMapper;
use tracing::{info, warn};

use crate::application::cadence::drive;
use crate::application::forward::{DatagramSink, ForwardStats, Forwarder};
use crate::application::window_loop::{run_window_loop, PointerWindow};
use crate::application::StopReason;
use crate::domain::{BridgeConfig, Cadence, SourceKind};
use crate::error::BridgeError;
use crate::infrastructure::input_capture::{system_hook, InputSource};
use crate::infrastructure::network::{resolve_peer, UdpTransport};
use crate::infrastructure::screen_info::native_screen_resolution;
use crate::infrastructure::window::open_bridge_window;

/// How a bridge run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeOutcome {
    pub reason: StopReason,
    pub stats: ForwardStats,
}

/// Runs the bridge described by `config` until `running` is cleared, the
/// window is closed, or the input source dies.
///
/// # Errors
///
/// Setup failures (peer resolution, socket bind, missing hook or window)
/// are returned before anything is sent.  A hook that dies mid-run yields
/// [`BridgeError::SourceLost`].
pub async fn run_bridge(
    config: BridgeConfig,
    running: Arc<AtomicBool>,
) -> Result<BridgeOutcome, BridgeError> {
    let peer = resolve_peer(&config.peer_host, config.peer_port)?;
    let transport = UdpTransport::open(peer)?;
    let format = config.source.packet_format();

    match config.source {
        SourceKind::Hook => {
            let native = native_screen_resolution(config.screen);
            info!("sending mouse to {peer} (screen {native})");
            let source = system_hook()?;
            let forwarder =
                Forwarder::new(CoordinateMapper::new(native, config.grid), format, transport);
            run_hook_source(source.as_ref(), forwarder, config.cadence(), running).await
        }
        SourceKind::Window => {
            let surface = config.window_resolution();
            info!("sending mouse to {peer} (window {surface})");
            let mut window = open_bridge_window(surface, config.rate_hz)?;
            let forwarder =
                Forwarder::new(CoordinateMapper::new(surface, config.grid), format, transport);
            tokio::task::block_in_place(|| {
                run_window_source(window.as_mut(), forwarder, &running)
            })
        }
    }
}

/// Starts `source` and forwards its events at `cadence` until shutdown or
/// until the source hangs up.
///
/// # Errors
///
/// A source that fails to start is reported before anything is sent.
pub async fn run_hook_source<S: DatagramSink>(
    source: &dyn InputSource,
    mut forwarder: Forwarder<S>,
    cadence: Cadence,
    running: Arc<AtomicBool>,
) -> Result<BridgeOutcome, BridgeError> {
    let events = source.start()?;
    info!("press Ctrl+C to stop");

    let reason = drive(events, &mut forwarder, cadence, running).await;
    source.stop();
    finish(reason, forwarder.stats())
}

/// Runs the frame loop on `window` until it closes or `running` is cleared.
///
/// Blocks the calling thread.
pub fn run_window_source<S: DatagramSink>(
    window: &mut dyn PointerWindow,
    mut forwarder: Forwarder<S>,
    running: &AtomicBool,
) -> Result<BridgeOutcome, BridgeError> {
    info!("move the mouse inside the window; close it or press Ctrl+C to stop");
    let reason = run_window_loop(window, &mut forwarder, running)?;
    finish(reason, forwarder.stats())
}

fn finish(reason: StopReason, stats: ForwardStats) -> Result<BridgeOutcome, BridgeError> {
    if reason.is_user_requested() {
        Ok(BridgeOutcome { reason, stats })
    } else {
        warn!("input source closed after {} datagram(s)", stats.sent);
        Err(BridgeError::SourceLost)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
