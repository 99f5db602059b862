//! Mock input source for tests.
//!
//! Lets tests inject synthetic [`PointerEvent`]s without an OS hook.

use std::sync::{Arc, Mutex};

use mouse_bridge_core::PointerEvent;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::{CaptureError, InputSource};

/// An [`InputSource`] fed by [`MockInputSource::inject_event`].
pub struct MockInputSource {
    sender: Arc<Mutex<Option<UnboundedSender<PointerEvent>>>>,
}

impl MockInputSource {
    pub fn new() -> Self {
        Self {
            sender: Arc::new(Mutex::new(None)),
        }
    }

    /// Injects a synthetic event, as if captured from hardware.
    ///
    /// Panics if `start()` has not been called or if `stop()` has been called.
    pub fn inject_event(&self, event: PointerEvent) {
        let guard = self.sender.lock().expect("lock poisoned");
        match guard.as_ref() {
            Some(sender) => sender
                .send(event)
                .expect("receiver has been dropped; keep it alive while injecting"),
            None => panic!("MockInputSource::inject_event called before start()"),
        }
    }

    /// `true` between `start()` and `stop()`.
    pub fn is_started(&self) -> bool {
        self.sender.lock().expect("lock poisoned").is_some()
    }
}

impl Default for MockInputSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for MockInputSource {
    fn start(&self) -> Result<UnboundedReceiver<PointerEvent>, CaptureError> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.sender.lock().expect("lock poisoned") = Some(tx);
        Ok(rx)
    }

    fn stop(&self) {
        // Drop the sender to close the channel
        *self.sender.lock().expect("lock poisoned") = None;
    }
}
