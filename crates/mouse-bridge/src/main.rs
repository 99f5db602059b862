//! Mouse Bridge: entry point.
//!
//! Captures the local mouse (position, buttons, wheel), rescales it to the
//! peer's 320×240 grid and streams it to the peer as ASCII UDP datagrams on
//! port 4210.
//!
//! # Usage
//!
//! ```text
//! mouse-bridge <HOST> [OPTIONS]
//!
//! Arguments:
//!   <HOST>                 Peer IPv4 address or hostname
//!
//! Options:
//!   --source <SOURCE>      hook (system-wide) or window (local window) [default: hook]
//!   --cadence <CADENCE>    event or poll, hook source only [default: event]
//!   --rate <HZ>            poll / frame rate, 1-1000 [default: 60]
//!   --screen <WxH>         override the native screen size (hook source)
//! ```
//!
//! Set `RUST_LOG=debug` to see per-send diagnostics.
//!
//! # Architecture overview
//!
//! ```text
//! rdev hook thread ──PointerEvent──▶ cadence driver ─┐
//!                                                     ├─▶ Forwarder ─▶ UDP :4210
//! minifb window (main thread) ──▶ window frame loop ──┘
//! ```

use std::process;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mouse_bridge::domain::config::DEFAULT_RATE_HZ;
use mouse_bridge::domain::{BridgeConfig, CadenceKind, SourceKind};
use mouse_bridge::infrastructure::run_bridge;
use mouse_bridge_core::{LogicalGrid, Resolution, PEER_PORT};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Streams the local mouse to a 320×240 peer over UDP.
#[derive(Debug, Parser)]
#[command(
    name = "mouse-bridge",
    about = "Streams mouse position, buttons and wheel to a peer over UDP",
    version
)]
struct Cli {
    /// IPv4 address or hostname of the peer (UDP port 4210).
    host: String,

    /// Input source: `hook` captures the whole desktop, `window` only the
    /// pointer inside a local 640×480 window.
    #[arg(long, default_value = "hook")]
    source: SourceKind,

    /// When the hook source sends: on every `event`, or `poll` at `--rate`.
    ///
    /// The window source always sends once per frame.
    #[arg(long, default_value = "event")]
    cadence: CadenceKind,

    /// Poll rate for `--cadence poll` and frame rate for the window, in Hz.
    #[arg(
        long,
        value_name = "HZ",
        default_value_t = DEFAULT_RATE_HZ,
        value_parser = clap::value_parser!(u32).range(1..=1000)
    )]
    rate: u32,

    /// Native screen size as WIDTHxHEIGHT; queried from the display when
    /// omitted.
    #[arg(long, value_name = "WxH")]
    screen: Option<Resolution>,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`BridgeConfig`].
    fn into_bridge_config(self) -> BridgeConfig {
        BridgeConfig {
            peer_host: self.host,
            peer_port: PEER_PORT,
            source: self.source,
            cadence: self.cadence,
            rate_hz: self.rate,
            screen: self.screen,
            grid: LogicalGrid::PEER,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Usage errors exit with 1; --help and --version exit with 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(1);
        }
        Err(e) => e.exit(),
    };
    let config = cli.into_bridge_config();

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("received Ctrl+C, stopping");
                running_clone.store(false, Ordering::Relaxed);
            }
            Err(e) => {
                tracing::error!("failed to listen for Ctrl+C signal: {e}");
            }
        }
    });

    let outcome = run_bridge(config, running).await?;

    info!(
        "mouse bridge stopped ({}): {} datagram(s) sent, {} failed",
        outcome.reason, outcome.stats.sent, outcome.stats.failed
    );
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
