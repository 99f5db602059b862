//! Infrastructure layer for the bridge.
//!
//! Contains OS-facing adapters (the global input hook, the bridge window,
//! the UDP socket, the screen-size query) and [`run_bridge`], which wires
//! them to the application layer.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `mouse_bridge_core`, but MUST NOT be imported by the `application` or
//! domain layers.

pub mod bridge;
pub mod input_capture;
pub mod network;
pub mod screen_info;
pub mod window;

pub use bridge::{run_bridge, run_hook_source, run_window_source, BridgeOutcome};
