//! Global input capture.
//!
//! With the `hook` feature, a system-wide listener runs on a dedicated thread
//! and posts [`PointerEvent`]s into a Tokio channel.  The listener callback
//! never touches the input state; it only translates and forwards.
//!
//! # Testability
//!
//! The [`InputSource`] trait allows tests to inject synthetic events without
//! an OS hook (see [`mock::MockInputSource`]).

use mouse_bridge_core::PointerEvent;
use tokio::sync::mpsc::UnboundedReceiver;

pub mod mock;

#[cfg(feature = "hook")]
pub mod hook;

/// Error type for input capture operations.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("failed to install input hook: {0}")]
    HookInstallFailed(String),
    #[error("{facility} is not available: {hint}")]
    Unavailable {
        facility: &'static str,
        hint: &'static str,
    },
}

/// Trait abstracting pointer event production.
///
/// The production implementation is [`hook::HookInputSource`]; tests use
/// [`mock::MockInputSource`].
pub trait InputSource: Send + Sync {
    /// Starts the source and returns a receiver for captured events.
    fn start(&self) -> Result<UnboundedReceiver<PointerEvent>, CaptureError>;
    /// Stops delivering events.
    fn stop(&self);
}

/// Returns the system-wide input source for this build.
pub fn system_hook() -> Result<Box<dyn InputSource>, CaptureError> {
    #[cfg(feature = "hook")]
    {
        Ok(Box::new(hook::HookInputSource::new()))
    }
    #[cfg(not(feature = "hook"))]
    {
        Err(CaptureError::Unavailable {
            facility: "global input hook",
            hint: "rebuild with `--features hook`",
        })
    }
}
