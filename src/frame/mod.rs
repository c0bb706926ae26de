mod pattern;

pub use pattern::generate_grid;

use crate::constants::BYTES_PER_PIXEL;

/// Row-major RGBA pixels. Each `u32` holds the four channel bytes in
/// memory order, so the native-endian byte view is what gets exported.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// A buffer large enough to hold a `factor`-times upscaled frame.
    pub fn scaled(width: u32, height: u32, factor: u32) -> Self {
        Self::new(width * factor, height * factor)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, value: u32) {
        self.pixels[(y * self.width + x) as usize] = value;
    }

    pub fn byte_len(&self) -> usize {
        self.pixels.len() * BYTES_PER_PIXEL
    }

    /// RGBA bytes of the whole buffer, in memory order.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_ne_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_geometry() {
        let frame = FrameBuffer::new(256, 192);
        assert_eq!(frame.pixels().len(), 256 * 192);
        assert_eq!(frame.stride(), 1024);
        assert_eq!(frame.byte_len(), 256 * 192 * 4);
    }

    #[test]
    fn test_scaled_geometry() {
        let frame = FrameBuffer::scaled(256, 192, 3);
        assert_eq!((frame.width(), frame.height()), (768, 576));
    }

    #[test]
    fn test_rgba_byte_order() {
        let mut frame = FrameBuffer::new(2, 1);
        frame.set_pixel(0, 0, u32::from_ne_bytes([0x10, 0x20, 0x30, 0x40]));
        frame.set_pixel(1, 0, u32::from_ne_bytes([0, 0, 0, 0xFF]));
        assert_eq!(
            frame.to_rgba_bytes(),
            vec![0x10, 0x20, 0x30, 0x40, 0, 0, 0, 0xFF]
        );
    }
}
