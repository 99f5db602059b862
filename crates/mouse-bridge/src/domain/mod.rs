//! Domain layer: runtime configuration types.
//!
//! No I/O happens here.  `main.rs` fills a [`BridgeConfig`] from the command
//! line; tests build one from [`BridgeConfig::default`].

pub mod config;

pub use config::{BridgeConfig, Cadence, CadenceKind, ConfigParseError, SourceKind};
