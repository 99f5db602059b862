//! Bridge configuration types.
//!
//! [`BridgeConfig`] is the single source of truth for all runtime settings.
//! It is built once at startup from CLI arguments and never changes while the
//! bridge runs.  There are no config files and no persisted state.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use mouse_bridge_core::{LogicalGrid, PacketFormat, Resolution, PEER_PORT};
use thiserror::Error;

/// Default poll / frame rate in Hz.
pub const DEFAULT_RATE_HZ: u32 = 60;

/// The bridge window shows the logical grid at this integer scale.
pub const WINDOW_SCALE: u32 = 2;

/// Screen size assumed when the display cannot be queried.
pub const FALLBACK_SCREEN: Resolution = Resolution::new(1920, 1080);

/// Errors produced when parsing a source or cadence name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigParseError {
    #[error("unknown input source '{0}' (expected 'hook' or 'window')")]
    UnknownSource(String),
    #[error("unknown cadence '{0}' (expected 'event' or 'poll')")]
    UnknownCadence(String),
}

/// Which front-end produces pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// System-wide input hook; coordinates are in native screen pixels.
    #[default]
    Hook,
    /// Local bridge window; coordinates are in window pixels.
    Window,
}

impl SourceKind {
    /// Payload layout sent by this front-end.
    ///
    /// The hook front-end sends `x,y,pressed`; the window front-end also
    /// reports the wheel.
    pub fn packet_format(self) -> PacketFormat {
        match self {
            SourceKind::Hook => PacketFormat::Basic,
            SourceKind::Window => PacketFormat::WithWheel,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SourceKind::Hook => "hook",
            SourceKind::Window => "window",
        })
    }
}

impl FromStr for SourceKind {
    type Err = ConfigParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hook" => Ok(SourceKind::Hook),
            "window" => Ok(SourceKind::Window),
            _ => Err(ConfigParseError::UnknownSource(s.to_string())),
        }
    }
}

/// When the hook front-end sends datagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CadenceKind {
    /// Send on every captured event.
    #[default]
    Event,
    /// Send once per tick at the configured rate.
    Poll,
}

impl FromStr for CadenceKind {
    type Err = ConfigParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "event" => Ok(CadenceKind::Event),
            "poll" => Ok(CadenceKind::Poll),
            _ => Err(ConfigParseError::UnknownCadence(s.to_string())),
        }
    }
}

/// The resolved send cadence handed to the drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Encode and send immediately after each event.
    OnEvent,
    /// Encode and send once per tick; the wheel is drained on every tick.
    FixedRate { hz: u32 },
}

impl Cadence {
    /// Time between ticks for [`Cadence::FixedRate`]; `None` for [`Cadence::OnEvent`].
    pub fn tick_period(self) -> Option<Duration> {
        match self {
            Cadence::OnEvent => None,
            Cadence::FixedRate { hz } => Some(Duration::from_secs(1) / hz.max(1)),
        }
    }
}

/// All runtime configuration for the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// IPv4 address or hostname of the peer.
    pub peer_host: String,
    /// UDP port of the peer; always [`PEER_PORT`] outside of tests.
    pub peer_port: u16,
    pub source: SourceKind,
    /// Ignored by the window front-end, which always polls.
    pub cadence: CadenceKind,
    /// Poll rate for `CadenceKind::Poll` and frame rate for the window.
    pub rate_hz: u32,
    /// Overrides the queried screen size (hook front-end only).
    pub screen: Option<Resolution>,
    pub grid: LogicalGrid,
}

impl BridgeConfig {
    /// Creates a config for `peer_host` with every other setting at its default.
    pub fn for_peer(peer_host: impl Into<String>) -> Self {
        Self {
            peer_host: peer_host.into(),
            ..Self::default()
        }
    }

    /// Resolves the cadence actually used by the selected front-end.
    pub fn cadence(&self) -> Cadence {
        match (self.source, self.cadence) {
            (SourceKind::Hook, CadenceKind::Event) => Cadence::OnEvent,
            (SourceKind::Hook, CadenceKind::Poll) | (SourceKind::Window, _) => {
                Cadence::FixedRate { hz: self.rate_hz }
            }
        }
    }

    /// Pixel size of the bridge window.
    pub fn window_resolution(&self) -> Resolution {
        self.grid.scaled(WINDOW_SCALE)
    }
}

impl Default for BridgeConfig {
    /// | Field     | Default        |
    /// |-----------|----------------|
    /// | peer_host | `127.0.0.1`    |
    /// | peer_port | `4210`         |
    /// | source    | hook           |
    /// | cadence   | event          |
    /// | rate_hz   | 60             |
    /// | screen    | queried        |
    /// | grid      | 320×240        |
    fn default() -> Self {
        Self {
            peer_host: "127.0.0.1".to_string(),
            peer_port: PEER_PORT,
            source: SourceKind::Hook,
            cadence: CadenceKind::Event,
            rate_hz: DEFAULT_RATE_HZ,
            screen: None,
            grid: LogicalGrid::PEER,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
