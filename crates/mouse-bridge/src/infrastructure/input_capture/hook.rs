//! System-wide pointer hook backed by `rdev`.
//!
//! `rdev::listen` blocks its thread for the lifetime of the process, so it
//! runs on a dedicated named thread.  The callback only translates the native
//! event and posts it into the channel; it must return quickly or the OS may
//! drop the hook.
//!
//! `listen` never reports success, only failure.  [`InputSource::start`]
//! therefore waits a short grace period for a failure report before it
//! treats the hook as installed.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::{self as std_mpsc, RecvTimeoutError},
    Arc,
};
use std::thread;
use std::time::Duration;

use mouse_bridge_core::{MouseButton, PointerEvent};
use rdev::{Button, EventType};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{error, info};

use super::{CaptureError, InputSource};

/// How long `start` waits for the listener to fail before assuming it runs.
const STARTUP_GRACE: Duration = Duration::from_millis(250);

const HOOK_FACILITY: &str = "global input hook";
const HOOK_HINT: &str = "run inside a graphical session (an X11 display on Linux), \
     grant input monitoring permission on macOS, or use `--source window`";

/// Global pointer hook.
pub struct HookInputSource {
    /// Cleared by [`InputSource::stop`]; the callback drops events while unset.
    active: Arc<AtomicBool>,
    started: AtomicBool,
}

impl HookInputSource {
    /// Creates a new (unstarted) hook.
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
            started: AtomicBool::new(false),
        }
    }
}

impl Default for HookInputSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for HookInputSource {
    fn start(&self) -> Result<UnboundedReceiver<PointerEvent>, CaptureError> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(CaptureError::HookInstallFailed(
                "the input hook is already running".to_string(),
            ));
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let (status_tx, status_rx) = std_mpsc::channel::<String>();
        let active = Arc::clone(&self.active);
        active.store(true, Ordering::SeqCst);

        thread::Builder::new()
            .name("mouse-bridge-hook".to_string())
            .spawn(move || {
                let callback = move |event: rdev::Event| {
                    if !active.load(Ordering::Relaxed) {
                        return;
                    }
                    if let Some(pointer) = translate(&event.event_type) {
                        // A closed receiver means the bridge is shutting down.
                        let _ = tx.send(pointer);
                    }
                };
                // Returns only on failure; dropping the callback closes the channel.
                if let Err(e) = rdev::listen(callback) {
                    let reason = format!("{e:?}");
                    // After the grace period nobody waits for the report.
                    if status_tx.send(reason.clone()).is_err() {
                        error!("input hook stopped: {reason}");
                    }
                }
            })
            .map_err(|e| CaptureError::HookInstallFailed(e.to_string()))?;

        await_listener(&status_rx, STARTUP_GRACE)?;

        info!("global input hook started");
        Ok(rx)
    }

    fn stop(&self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

/// Waits up to `grace` for the listener thread to report a startup failure.
///
/// Silence means the hook is installed.  A reported failure is mapped to
/// [`CaptureError::Unavailable`] so the user gets a setup hint.
fn await_listener(
    status: &std_mpsc::Receiver<String>,
    grace: Duration,
) -> Result<(), CaptureError> {
    match status.recv_timeout(grace) {
        Err(RecvTimeoutError::Timeout) => Ok(()),
        Ok(reason) => {
            error!("input hook could not start: {reason}");
            Err(CaptureError::Unavailable {
                facility: HOOK_FACILITY,
                hint: HOOK_HINT,
            })
        }
        Err(RecvTimeoutError::Disconnected) => Err(CaptureError::HookInstallFailed(
            "input hook exited during startup".to_string(),
        )),
    }
}

/// Translates a native hook event into a [`PointerEvent`].
///
/// Keyboard events and horizontal-only scrolls yield `None`.
pub(crate) fn translate(event: &EventType) -> Option<PointerEvent> {
    match *event {
        EventType::MouseMove { x, y } => Some(PointerEvent::Move {
            x: x.round() as i32,
            y: y.round() as i32,
        }),
        EventType::ButtonPress(button) => Some(PointerEvent::Button {
            button: map_button(button),
            pressed: true,
        }),
        EventType::ButtonRelease(button) => Some(PointerEvent::Button {
            button: map_button(button),
            pressed: false,
        }),
        EventType::Wheel { delta_y, .. } if delta_y != 0 => Some(PointerEvent::Wheel {
            delta: delta_y.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
        }),
        _ => None,
    }
}

fn map_button(button: Button) -> MouseButton {
    match button {
        Button::Left => MouseButton::Left,
        Button::Right => MouseButton::Right,
        Button::Middle => MouseButton::Middle,
        Button::Unknown(_) => MouseButton::Other,
    }
}
