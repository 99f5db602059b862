//! mouse-bridge library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! ```text
//! [mouse-bridge]
//!   ├── domain/           BridgeConfig, source and cadence selection
//!   ├── application/      Forwarder (state → datagram), cadence drivers,
//!   │                     window frame loop
//!   ├── infrastructure/
//!   │     ├── bridge          run_bridge: wires source → forwarder → socket
//!   │     ├── input_capture/  global hook (rdev) + mock source
//!   │     ├── window/         bridge window (minifb) + canvas
//!   │     ├── network/        UDP transport
//!   │     └── screen_info     native screen size
//!   └── error             BridgeError (fatal startup/runtime errors)
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
