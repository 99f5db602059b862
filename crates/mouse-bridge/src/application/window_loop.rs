//! Frame loop for the bridge window.
//!
//! Each frame reads the pointer from the window, folds the changes into the
//! forwarder's state, sends one datagram and redraws.  The window paces the
//! loop itself (target frame rate), so there is no separate timer here and
//! everything runs on the calling thread.

use std::sync::atomic::{AtomicBool, Ordering};

use mouse_bridge_core::{MouseButton, PointerEvent};
use thiserror::Error;
use tracing::debug;

use super::forward::{DatagramSink, Forwarder};
use super::StopReason;

/// Errors raised by a [`PointerWindow`] implementation.
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("failed to update window: {0}")]
    Update(String),
    #[error("{facility} is not available: {hint}")]
    Unavailable {
        facility: &'static str,
        hint: &'static str,
    },
}

/// Pointer state read from the window once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerSample {
    /// Cursor position in window pixels, or `None` when the window has no
    /// pointer information this frame.
    pub position: Option<(i32, i32)>,
    pub left: bool,
    pub right: bool,
    pub middle: bool,
    /// Wheel notches scrolled since the previous sample (positive = away
    /// from the user).
    pub wheel: i32,
}

/// A window that reports pointer input and can draw the cursor marker.
pub trait PointerWindow {
    /// `false` once the user has closed the window.
    fn is_open(&self) -> bool;

    /// Reads the pointer state for this frame.
    fn sample(&mut self) -> PointerSample;

    /// Redraws the window with the cursor marker at `cursor` and waits for
    /// the next frame.
    fn present(&mut self, cursor: (i32, i32)) -> Result<(), WindowError>;
}

/// Button levels seen on the previous frame.
#[derive(Debug, Default)]
struct FrameInput {
    left: bool,
    right: bool,
    middle: bool,
}

impl FrameInput {
    /// Converts `sample` into events relative to the previous frame.
    fn diff(&mut self, sample: &PointerSample) -> Vec<PointerEvent> {
        let mut events = Vec::with_capacity(5);
        if let Some((x, y)) = sample.position {
            events.push(PointerEvent::Move { x, y });
        }
        for (button, was, now) in [
            (MouseButton::Left, &mut self.left, sample.left),
            (MouseButton::Right, &mut self.right, sample.right),
            (MouseButton::Middle, &mut self.middle, sample.middle),
        ] {
            if *was != now {
                *was = now;
                events.push(PointerEvent::Button {
                    button,
                    pressed: now,
                });
            }
        }
        if sample.wheel != 0 {
            events.push(PointerEvent::Wheel {
                delta: sample.wheel,
            });
        }
        events
    }
}

/// Runs the window loop until the window closes or `running` is cleared.
///
/// One datagram is sent per frame, whether or not anything changed.
pub fn run_window_loop<W, S>(
    window: &mut W,
    forwarder: &mut Forwarder<S>,
    running: &AtomicBool,
) -> Result<StopReason, WindowError>
where
    W: PointerWindow + ?Sized,
    S: DatagramSink,
{
    let mut input = FrameInput::default();

    loop {
        if !running.load(Ordering::Relaxed) {
            return Ok(StopReason::Interrupted);
        }
        if !window.is_open() {
            debug!("bridge window closed");
            return Ok(StopReason::WindowClosed);
        }

        let sample = window.sample();
        for event in input.diff(&sample) {
            forwarder.apply(event);
        }
        forwarder.flush();

        window.present(forwarder.state().position())?;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
