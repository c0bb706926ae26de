use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use super::ImageSink;
use crate::error::HarnessError;
use crate::frame::FrameBuffer;

/// Writes 8-bit RGBA PNG files.
#[derive(Debug, Default)]
pub struct PngSink;

impl ImageSink for PngSink {
    fn write_image(&mut self, path: &Path, frame: &FrameBuffer) -> Result<(), HarnessError> {
        let image_err = |source: png::EncodingError| HarnessError::Image {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(|e| image_err(e.into()))?;
        let mut encoder = png::Encoder::new(BufWriter::new(file), frame.width(), frame.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header().map_err(image_err)?;
        writer
            .write_image_data(&frame.to_rgba_bytes())
            .map_err(image_err)?;
        writer.finish().map_err(image_err)
    }
}
