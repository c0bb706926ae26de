use std::path::PathBuf;

use log::{error, info};

use crate::constants::{ORIGINAL_FILE, resized_file};
use crate::frame::FrameBuffer;
use crate::image::ImageSink;
use crate::telemetry::Timer;
use crate::upscale::UpscalePipeline;

/// What a capture produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaptureReport {
    /// Paths actually written.
    pub exported: Vec<PathBuf>,
    /// One-shot timing of the capture-time upscale, if one ran.
    pub capture_upscale_ms: Option<f32>,
    /// Steps that failed, with the error message.
    pub failures: Vec<String>,
}

/// Exports screenshots once per run, at the capture tick.
pub struct CaptureOrchestrator {
    capture_tick: u32,
    output_dir: PathBuf,
    fired: bool,
}

impl CaptureOrchestrator {
    pub fn new(capture_tick: u32, output_dir: PathBuf) -> Self {
        Self {
            capture_tick,
            output_dir,
            fired: false,
        }
    }

    pub fn capture_tick(&self) -> u32 {
        self.capture_tick
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Runs the capture if `tick` is the capture tick and nothing was
    /// captured yet. Returns `None` when it does nothing.
    ///
    /// Every step is attempted once even if an earlier one failed; failures
    /// are logged and listed in the report.
    pub fn capture(
        &mut self,
        tick: u32,
        frame: &FrameBuffer,
        upscale: Option<&mut UpscalePipeline>,
        sink: &mut dyn ImageSink,
    ) -> Option<CaptureReport> {
        if self.fired || tick != self.capture_tick {
            return None;
        }
        // Latched before exporting so a failed export is not retried.
        self.fired = true;

        let mut report = CaptureReport::default();
        self.export(ORIGINAL_FILE, frame, sink, &mut report);

        if let Some(pipeline) = upscale {
            let (factor, upscaled) = pipeline.per_frame_output();
            self.export(&resized_file(factor), upscaled, sink, &mut report);

            info!("{} upscale", pipeline.capture_name());
            let timer = Timer::new(pipeline.capture_name());
            let upscaled = pipeline.run_capture(frame);
            report.capture_upscale_ms = Some(timer.finish());

            match upscaled {
                Ok(()) => {
                    let (factor, upscaled) = pipeline.capture_output();
                    self.export(&resized_file(factor), upscaled, sink, &mut report);
                }
                Err(e) => {
                    error!("{} upscale failed: {}", pipeline.capture_name(), e);
                    report.failures.push(e.to_string());
                }
            }
        }

        Some(report)
    }

    fn export(
        &self,
        file: &str,
        frame: &FrameBuffer,
        sink: &mut dyn ImageSink,
        report: &mut CaptureReport,
    ) {
        let path = self.output_dir.join(file);
        info!("=> Capture screenshot {:?}", path);
        match sink.write_image(&path, frame) {
            Ok(()) => report.exported.push(path),
            Err(e) => {
                error!("Capture failed: {}", e);
                report.failures.push(e.to_string());
            }
        }
    }
}
