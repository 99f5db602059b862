//! Domain entities for the mouse bridge.
//!
//! Pure logic with no infrastructure dependencies: nothing in here opens a
//! socket, a window, or an input hook.  The application crate feeds these
//! types from whichever input source was selected at startup.

/// Pointer events shared by every input source.
pub mod event;

/// Logical grid, native resolution, and the coordinate mapper.
///
/// See [`grid::CoordinateMapper`] for the main type.
pub mod grid;

/// The aggregated pointer state and the per-send frame derived from it.
pub mod state;
