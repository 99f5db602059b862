//! Top-level error type for the bridge.
//!
//! Each infrastructure module has its own error enum; they are folded into
//! [`BridgeError`] here.  A facility that is compiled out or missing on this
//! machine surfaces as [`BridgeError::MissingDependency`] so the binary can
//! print an install hint.

use thiserror::Error;

use crate::application::window_loop::WindowError;
use crate::infrastructure::input_capture::CaptureError;
use crate::infrastructure::network::TransportError;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("{facility} is not available: {hint}")]
    MissingDependency {
        facility: &'static str,
        hint: &'static str,
    },
    #[error("input capture failed: {0}")]
    Capture(CaptureError),
    #[error("bridge window failed: {0}")]
    Window(WindowError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("input source stopped unexpectedly")]
    SourceLost,
}

impl From<CaptureError> for BridgeError {
    fn from(e: CaptureError) -> Self {
        match e {
            CaptureError::Unavailable { facility, hint } => {
                BridgeError::MissingDependency { facility, hint }
            }
            other => BridgeError::Capture(other),
        }
    }
}

impl From<WindowError> for BridgeError {
    fn from(e: WindowError) -> Self {
        match e {
            WindowError::Unavailable { facility, hint } => {
                BridgeError::MissingDependency { facility, hint }
            }
            other => BridgeError::Window(other),
        }
    }
}
