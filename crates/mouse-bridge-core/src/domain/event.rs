//! Uniform pointer events.
//!
//! Both the system-wide hook and the local window translate their native
//! callbacks into [`PointerEvent`]s, so the state aggregator only has to
//! understand one vocabulary.

/// Mouse button identifier used in [`PointerEvent::Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Any extra button (side buttons, vendor-specific codes).
    Other,
}

impl MouseButton {
    /// Bit used for this button in the held-button mask.
    pub(crate) fn mask(self) -> u8 {
        match self {
            MouseButton::Left => 0b0001,
            MouseButton::Right => 0b0010,
            MouseButton::Middle => 0b0100,
            MouseButton::Other => 0b1000,
        }
    }
}

/// A single input event in native coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer moved to an absolute native position.
    Move { x: i32, y: i32 },
    /// A button changed state.
    Button { button: MouseButton, pressed: bool },
    /// The vertical wheel was scrolled.
    ///
    /// Positive = away from the user, negative = toward the user.
    Wheel { delta: i32 },
}
