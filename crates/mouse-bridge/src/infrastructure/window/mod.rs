//! The bridge window.
//!
//! A small fixed-size window showing the logical grid at ×2 scale.  The
//! pointer inside it is sampled once per frame and the current position is
//! drawn as a dot.  [`canvas`] holds the pure drawing code; the `minifb`
//! backend (feature `window`) owns the OS window.

pub mod canvas;

#[cfg(feature = "window")]
pub mod minifb_window;

use std::fmt;

use mouse_bridge_core::Resolution;
use tracing::error;

use crate::application::window_loop::{PointerWindow, WindowError};

/// Title shown on the bridge window.
pub const WINDOW_TITLE: &str = "Mouse Bridge (click + drag inside)";

const WINDOW_FACILITY: &str = "bridge window";
const WINDOW_HINT: &str = "run inside a graphical session (DISPLAY or WAYLAND_DISPLAY \
     must be set on Linux), or use `--source hook`";

/// Opens the bridge window with a `surface` sized drawing area, paced at
/// `fps` frames per second.
pub fn open_bridge_window(
    surface: Resolution,
    fps: u32,
) -> Result<Box<dyn PointerWindow>, WindowError> {
    #[cfg(feature = "window")]
    {
        Ok(Box::new(minifb_window::MinifbWindow::open(surface, fps)?))
    }
    #[cfg(not(feature = "window"))]
    {
        let _ = (surface, fps);
        Err(WindowError::Unavailable {
            facility: WINDOW_FACILITY,
            hint: "rebuild with `--features window`",
        })
    }
}

/// Maps a failure to create the OS window to [`WindowError::Unavailable`].
///
/// Window creation fails when there is no usable display, which the user can
/// only fix by changing their environment.  The backend's reason is logged.
pub(crate) fn creation_failed(reason: &dyn fmt::Display) -> WindowError {
    error!("bridge window could not be created: {reason}");
    WindowError::Unavailable {
        facility: WINDOW_FACILITY,
        hint: WINDOW_HINT,
    }
}

/// Converts a fractional scroll amount into whole wheel notches.
///
/// Rounds to the nearest notch; any non-zero scroll that would round to zero
/// counts as one notch in its direction so small trackpad scrolls are not
/// lost.
pub fn wheel_notches(scroll: f32) -> i32 {
    if !scroll.is_finite() || scroll == 0.0 {
        return 0;
    }
    let rounded = scroll.round();
    if rounded == 0.0 {
        scroll.signum() as i32
    } else {
        rounded.clamp(i32::MIN as f32, i32::MAX as f32) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_notches_rounds_whole_steps() {
        assert_eq!(wheel_notches(1.0), 1);
        assert_eq!(wheel_notches(-2.4), -2);
        assert_eq!(wheel_notches(2.6), 3);
    }

    #[test]
    fn test_wheel_notches_keeps_small_scrolls() {
        assert_eq!(wheel_notches(0.2), 1);
        assert_eq!(wheel_notches(-0.1), -1);
    }

    #[test]
    fn test_wheel_notches_zero_and_nan() {
        assert_eq!(wheel_notches(0.0), 0);
        assert_eq!(wheel_notches(f32::NAN), 0);
    }

    #[test]
    fn test_creation_failure_reports_unavailable_with_hint() {
        let err = creation_failed(&"Unable to open display");

        match err {
            WindowError::Unavailable { facility, hint } => {
                assert_eq!(facility, "bridge window");
                assert!(hint.contains("DISPLAY"));
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[cfg(not(feature = "window"))]
    #[test]
    fn test_open_without_window_feature_reports_unavailable() {
        let result = open_bridge_window(Resolution::new(640, 480), 60);
        assert!(matches!(result, Err(WindowError::Unavailable { .. })));
    }
}
