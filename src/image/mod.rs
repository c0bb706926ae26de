mod png_sink;

pub use png_sink::PngSink;

use std::path::Path;

use crate::error::HarnessError;
use crate::frame::FrameBuffer;

/// Destination for exported frames.
pub trait ImageSink {
    fn write_image(&mut self, path: &Path, frame: &FrameBuffer) -> Result<(), HarnessError>;
}
