//! Software rendering for the bridge window.
//!
//! The frame buffer is `0RGB` packed into `u32`, row-major, as `minifb`
//! expects.

/// Background colour (30, 60, 120).
pub const BACKGROUND: u32 = 0x001E_3C78;
pub const FOREGROUND: u32 = 0x00FF_FFFF;
pub const CURSOR_RADIUS: i32 = 4;

/// Draws one frame: background, 1-px border, and the cursor dot at
/// `cursor` (window pixels).  Parts of the dot outside the buffer are
/// clipped.
pub fn draw(buffer: &mut [u32], width: usize, height: usize, cursor: (i32, i32)) {
    debug_assert_eq!(buffer.len(), width * height);
    if width == 0 || height == 0 {
        return;
    }

    buffer.fill(BACKGROUND);

    for x in 0..width {
        buffer[x] = FOREGROUND;
        buffer[(height - 1) * width + x] = FOREGROUND;
    }
    for y in 0..height {
        buffer[y * width] = FOREGROUND;
        buffer[y * width + width - 1] = FOREGROUND;
    }

    let (cx, cy) = cursor;
    let r2 = CURSOR_RADIUS * CURSOR_RADIUS;
    for dy in -CURSOR_RADIUS..=CURSOR_RADIUS {
        for dx in -CURSOR_RADIUS..=CURSOR_RADIUS {
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let (px, py) = (cx + dx, cy + dy);
            if px < 0 || py < 0 {
                continue;
            }
            let (px, py) = (px as usize, py as usize);
            if px < width && py < height {
                buffer[py * width + px] = FOREGROUND;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: usize = 64;
    const H: usize = 48;

    fn frame(cursor: (i32, i32)) -> Vec<u32> {
        let mut buffer = vec![0; W * H];
        draw(&mut buffer, W, H, cursor);
        buffer
    }

    fn at(buffer: &[u32], x: usize, y: usize) -> u32 {
        buffer[y * W + x]
    }

    #[test]
    fn test_draw_fills_background_and_border() {
        let buffer = frame((-100, -100));

        assert_eq!(at(&buffer, 0, 0), FOREGROUND);
        assert_eq!(at(&buffer, W - 1, H - 1), FOREGROUND);
        assert_eq!(at(&buffer, 0, H / 2), FOREGROUND);
        assert_eq!(at(&buffer, W / 2, H / 2), BACKGROUND);
    }

    #[test]
    fn test_draw_cursor_dot_has_radius_four() {
        let buffer = frame((30, 20));

        assert_eq!(at(&buffer, 30, 20), FOREGROUND);
        assert_eq!(at(&buffer, 34, 20), FOREGROUND);
        assert_eq!(at(&buffer, 35, 20), BACKGROUND);
        // Corner of the bounding box lies outside the circle.
        assert_eq!(at(&buffer, 34, 24), BACKGROUND);
    }

    #[test]
    fn test_draw_clips_cursor_at_edges() {
        // Must not panic for a cursor at or beyond the corner.
        let buffer = frame((W as i32 - 1, H as i32 - 1));
        assert_eq!(at(&buffer, W - 3, H - 3), FOREGROUND);
        frame((W as i32 + 10, -10));
    }

    #[test]
    fn test_draw_ignores_empty_surface() {
        let mut buffer: Vec<u32> = Vec::new();
        draw(&mut buffer, 0, 0, (0, 0));
        assert!(buffer.is_empty());
    }
}
