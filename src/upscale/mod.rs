#[cfg(feature = "hqx")]
mod hqx;

#[cfg(feature = "hqx")]
pub use hqx::Hqx;

use crate::error::HarnessError;
use crate::frame::FrameBuffer;

/// An external resize filter, treated as a black box.
pub trait Upscaler {
    fn name(&self) -> &'static str;

    /// Integer scale factor applied to both axes.
    fn factor(&self) -> u32;

    /// Writes the upscaled `source` into `target`, which must be exactly
    /// `factor` times larger on both axes.
    fn upscale(&mut self, source: &FrameBuffer, target: &mut FrameBuffer)
    -> Result<(), HarnessError>;
}

/// Checks that `target` has the geometry an upscale by `factor` produces.
pub fn ensure_target_size(
    source: &FrameBuffer,
    target: &FrameBuffer,
    factor: u32,
) -> Result<(), HarnessError> {
    let expected = source.pixels().len() * (factor * factor) as usize;
    if target.width() != source.width() * factor
        || target.height() != source.height() * factor
        || target.pixels().len() != expected
    {
        return Err(HarnessError::BufferSize {
            expected,
            found: target.pixels().len(),
        });
    }
    Ok(())
}

/// The per-frame upscaler plus the one run once at capture time.
pub struct Upscalers {
    pub per_frame: Box<dyn Upscaler>,
    pub capture: Box<dyn Upscaler>,
}

/// Upscalers together with output buffers sized for one resolution.
pub struct UpscalePipeline {
    per_frame: Box<dyn Upscaler>,
    per_frame_out: FrameBuffer,
    capture: Box<dyn Upscaler>,
    capture_out: FrameBuffer,
}

impl UpscalePipeline {
    pub fn new(upscalers: Upscalers, width: u32, height: u32) -> Self {
        let per_frame_out = FrameBuffer::scaled(width, height, upscalers.per_frame.factor());
        let capture_out = FrameBuffer::scaled(width, height, upscalers.capture.factor());
        Self {
            per_frame: upscalers.per_frame,
            per_frame_out,
            capture: upscalers.capture,
            capture_out,
        }
    }

    pub fn run_per_frame(&mut self, source: &FrameBuffer) -> Result<(), HarnessError> {
        self.per_frame.upscale(source, &mut self.per_frame_out)
    }

    pub fn run_capture(&mut self, source: &FrameBuffer) -> Result<(), HarnessError> {
        self.capture.upscale(source, &mut self.capture_out)
    }

    /// Output of the most recent per-frame upscale, with its factor.
    pub fn per_frame_output(&self) -> (u32, &FrameBuffer) {
        (self.per_frame.factor(), &self.per_frame_out)
    }

    pub fn capture_output(&self) -> (u32, &FrameBuffer) {
        (self.capture.factor(), &self.capture_out)
    }

    pub fn capture_name(&self) -> &'static str {
        self.capture.name()
    }
}
