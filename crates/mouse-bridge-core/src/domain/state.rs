//! Aggregated pointer state.
//!
//! [`InputState`] holds the latest known pointer position, held buttons, and
//! the wheel delta accumulated since the last send.  Only the latest value
//! matters (last-write-wins); no history is kept.
//!
//! The state is an owned value.  Whoever drives the send cadence owns it and
//! applies events to it; input callbacks running on foreign threads hand
//! their events over a channel instead of mutating it directly.

use super::event::{MouseButton, PointerEvent};
use super::grid::CoordinateMapper;

/// One snapshot of the pointer in logical grid coordinates.
///
/// Ephemeral: recomputed for every send and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogicalFrame {
    /// X on the logical grid, `0..grid.width()`.
    pub x: u16,
    /// Y on the logical grid, `0..grid.height()`.
    pub y: u16,
    /// `true` while any mouse button is held.
    pub pressed: bool,
    /// Wheel notches accumulated since the previous frame.
    pub wheel_delta: i32,
}

/// The latest known pointer state in native coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    x: i32,
    y: i32,
    held_buttons: u8,
    wheel_delta: i32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one pointer event.
    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move { x, y } => self.set_position(x, y),
            PointerEvent::Button { button, pressed } => self.set_button(button, pressed),
            PointerEvent::Wheel { delta } => self.accumulate_wheel(delta),
        }
    }

    /// Replaces the native pointer position.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Records a button press or release.
    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.held_buttons |= button.mask();
        } else {
            self.held_buttons &= !button.mask();
        }
    }

    /// Adds wheel notches to the accumulator, saturating at the `i32` range.
    pub fn accumulate_wheel(&mut self, delta: i32) {
        self.wheel_delta = self.wheel_delta.saturating_add(delta);
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Returns `true` while any button is held.
    pub fn is_pressed(&self) -> bool {
        self.held_buttons != 0
    }

    /// Wheel delta accumulated since the last [`take_frame`](Self::take_frame).
    pub fn pending_wheel(&self) -> i32 {
        self.wheel_delta
    }

    /// Builds the frame to send and drains the wheel accumulator.
    ///
    /// Each wheel notch is reported exactly once: the accumulator is zero
    /// immediately after this call.
    pub fn take_frame(&mut self, mapper: &CoordinateMapper) -> LogicalFrame {
        let (x, y) = mapper.map(self.x, self.y);
        let wheel_delta = std::mem::take(&mut self.wheel_delta);
        LogicalFrame {
            x,
            y,
            pressed: self.is_pressed(),
            wheel_delta,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grid::{LogicalGrid, Resolution};

    fn mapper_1080p() -> CoordinateMapper {
        CoordinateMapper::new(Resolution::new(1920, 1080), LogicalGrid::PEER)
    }

    #[test]
    fn test_new_state_is_at_origin_and_released() {
        let state = InputState::new();
        assert_eq!(state.position(), (0, 0));
        assert!(!state.is_pressed());
        assert_eq!(state.pending_wheel(), 0);
    }

    #[test]
    fn test_move_event_replaces_position() {
        // Arrange
        let mut state = InputState::new();

        // Act
        state.apply(PointerEvent::Move { x: 10, y: 20 });
        state.apply(PointerEvent::Move { x: 30, y: 40 });

        // Assert – last write wins
        assert_eq!(state.position(), (30, 40));
    }

    #[test]
    fn test_button_down_then_up_toggles_pressed() {
        let mut state = InputState::new();

        state.apply(PointerEvent::Button {
            button: MouseButton::Left,
            pressed: true,
        });
        assert!(state.is_pressed());

        state.apply(PointerEvent::Button {
            button: MouseButton::Left,
            pressed: false,
        });
        assert!(!state.is_pressed());
    }

    #[test]
    fn test_pressed_stays_set_while_any_button_is_held() {
        // Arrange
        let mut state = InputState::new();
        state.set_button(MouseButton::Left, true);
        state.set_button(MouseButton::Right, true);

        // Act – release only the right button
        state.set_button(MouseButton::Right, false);

        // Assert
        assert!(state.is_pressed(), "left is still held");
        state.set_button(MouseButton::Left, false);
        assert!(!state.is_pressed());
    }

    #[test]
    fn test_release_without_press_is_harmless() {
        let mut state = InputState::new();
        state.set_button(MouseButton::Middle, false);
        assert!(!state.is_pressed());
    }

    #[test]
    fn test_wheel_events_accumulate() {
        let mut state = InputState::new();
        state.apply(PointerEvent::Wheel { delta: 1 });
        state.apply(PointerEvent::Wheel { delta: -3 });
        assert_eq!(state.pending_wheel(), -2);
    }

    #[test]
    fn test_wheel_accumulator_saturates() {
        let mut state = InputState::new();
        state.accumulate_wheel(i32::MAX);
        state.accumulate_wheel(10);
        assert_eq!(state.pending_wheel(), i32::MAX);
    }

    #[test]
    fn test_take_frame_maps_position_and_reports_wheel() {
        // Arrange
        let mut state = InputState::new();
        state.set_position(150, 100);
        state.set_button(MouseButton::Left, true);
        state.accumulate_wheel(-2);

        // Act
        let frame = state.take_frame(&mapper_1080p());

        // Assert
        assert_eq!(
            frame,
            LogicalFrame {
                x: 25,
                y: 22,
                pressed: true,
                wheel_delta: -2,
            }
        );
    }

    #[test]
    fn test_take_frame_drains_wheel_exactly_once() {
        // Arrange
        let mapper = mapper_1080p();
        let mut state = InputState::new();
        state.accumulate_wheel(4);

        // Act
        let first = state.take_frame(&mapper);
        let second = state.take_frame(&mapper);

        // Assert
        assert_eq!(first.wheel_delta, 4);
        assert_eq!(state.pending_wheel(), 0);
        assert_eq!(second.wheel_delta, 0);
    }

    #[test]
    fn test_take_frame_keeps_position_and_buttons() {
        let mapper = mapper_1080p();
        let mut state = InputState::new();
        state.set_position(1919, 1079);
        state.set_button(MouseButton::Right, true);

        let first = state.take_frame(&mapper);
        let second = state.take_frame(&mapper);

        assert_eq!(first, second);
        assert_eq!((first.x, first.y), (319, 239));
    }
}
