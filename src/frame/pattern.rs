use super::FrameBuffer;
use crate::constants::{GRID_EMPTY, GRID_LINE, GRID_SPACING};

/// Reference grid: opaque black lines every 8 pixels on both axes,
/// transparent elsewhere. Used to eyeball buffer sizing independently of
/// whatever the core renders.
pub fn generate_grid(width: u32, height: u32) -> FrameBuffer {
    let mut frame = FrameBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let on_line = x % GRID_SPACING == 0 || y % GRID_SPACING == 0;
            frame.set_pixel(x, y, if on_line { GRID_LINE } else { GRID_EMPTY });
        }
    }
    frame
}
