//! `minifb` backend for the bridge window.
//!
//! `minifb` must be driven from the main thread on some platforms, which is
//! why the window loop runs synchronously there.

use minifb::{MouseButton as FbButton, MouseMode, Window, WindowOptions};
use mouse_bridge_core::Resolution;
use tracing::info;

use super::{canvas, creation_failed, wheel_notches, WINDOW_TITLE};
use crate::application::window_loop::{PointerSample, PointerWindow, WindowError};

/// An OS window plus its frame buffer.
pub struct MinifbWindow {
    window: Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl MinifbWindow {
    /// Creates the window and limits updates to `fps` frames per second.
    pub fn open(surface: Resolution, fps: u32) -> Result<Self, WindowError> {
        let width = surface.width as usize;
        let height = surface.height as usize;
        let mut window = Window::new(WINDOW_TITLE, width, height, WindowOptions::default())
            .map_err(|e| creation_failed(&e))?;
        window.set_target_fps(fps.max(1) as usize);
        info!("bridge window opened ({surface} @ {fps} Hz)");

        Ok(Self {
            window,
            buffer: vec![canvas::BACKGROUND; width * height],
            width,
            height,
        })
    }
}

impl PointerWindow for MinifbWindow {
    fn is_open(&self) -> bool {
        self.window.is_open()
    }

    fn sample(&mut self) -> PointerSample {
        let position = self
            .window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x.round() as i32, y.round() as i32));
        let wheel = self
            .window
            .get_scroll_wheel()
            .map_or(0, |(_, dy)| wheel_notches(dy));

        PointerSample {
            position,
            left: self.window.get_mouse_down(FbButton::Left),
            right: self.window.get_mouse_down(FbButton::Right),
            middle: self.window.get_mouse_down(FbButton::Middle),
            wheel,
        }
    }

    fn present(&mut self, cursor: (i32, i32)) -> Result<(), WindowError> {
        canvas::draw(&mut self.buffer, self.width, self.height, cursor);
        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| WindowError::Update(e.to_string()))
    }
}
