use std::path::PathBuf;

use log::{error, info, trace, warn};

use crate::capture::{CaptureOrchestrator, CaptureReport};
use crate::config::HarnessConfig;
use crate::constants::*;
use crate::emulator::{CreateParams, EmulatorCore};
use crate::error::HarnessError;
use crate::frame::{FrameBuffer, generate_grid};
use crate::image::ImageSink;
use crate::script::{Action, StimulusScript};
use crate::telemetry::{AccuTimer, RunningStat};
use crate::upscale::{UpscalePipeline, Upscalers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Created,
    Running,
    Terminating,
    /// Reported by `finish` once the core has been released.
    Destroyed,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The core could not be created, the loop never ran.
    NotStarted,
    Completed(RunReport),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub frames: u64,
    pub display: RunningStat,
    /// Present when a per-frame upscaler was configured.
    pub upscale: Option<RunningStat>,
    pub capture: Option<CaptureReport>,
    /// Always `Destroyed`: the core has been released when a report exists.
    pub state: ControllerState,
}

impl RunReport {
    pub fn log_summary(&self) {
        info!(
            "{}: {}x - avg. {}ms",
            self.display.name, self.display.sample_count, self.display.average_ms
        );
        if let Some(upscale) = &self.upscale {
            info!(
                "{}: {}x - avg. {}ms",
                upscale.name, upscale.sample_count, upscale.average_ms
            );
            info!(
                "=> Upscaled frame: avg. {}ms",
                upscale.average_ms + self.display.average_ms
            );
        }
    }
}

/// Owns the core for one run and sequences the per-tick work.
pub struct FrameCycleController<C: EmulatorCore, S: ImageSink> {
    // Declared before `audio`: the core must be dropped while the buffers
    // it writes into are still allocated.
    core: C,
    audio: Vec<Vec<u8>>,
    frame: FrameBuffer,
    upscale: Option<UpscalePipeline>,
    script: StimulusScript,
    snapshot: PathBuf,
    capture: CaptureOrchestrator,
    capture_report: Option<CaptureReport>,
    sink: S,
    tick: u32,
    frames: u64,
    display_stat: RunningStat,
    upscale_stat: RunningStat,
    state: ControllerState,
}

impl<C: EmulatorCore, S: ImageSink> FrameCycleController<C, S> {
    /// Creates the core and prepares buffers. `None` if `create` fails.
    pub fn start<F>(
        config: &HarnessConfig,
        create: F,
        upscalers: Option<Upscalers>,
        mut sink: S,
    ) -> Option<Self>
    where
        F: FnOnce(&CreateParams) -> Option<C>,
    {
        let core = create(&config.create_params())?;
        let (width, height) = core.resolution();
        info!("Resolution {}x{}", width, height);

        if config.grid {
            let grid = generate_grid(width + 1, height + 1);
            let path = config.output_dir.join(GRID_FILE);
            if let Err(e) = sink.write_image(&path, &grid) {
                warn!("Reference grid not written: {}", e);
            }
        }

        let mut controller = Self {
            core,
            audio: vec![vec![0; AUDIO_BUFFER_LEN]; AUDIO_CHANNELS],
            frame: FrameBuffer::new(width, height),
            upscale: upscalers.map(|u| UpscalePipeline::new(u, width, height)),
            script: config.script.clone(),
            snapshot: config.snapshot.clone(),
            capture: CaptureOrchestrator::new(config.capture_tick, config.output_dir.clone()),
            capture_report: None,
            sink,
            tick: 0,
            frames: 0,
            display_stat: RunningStat::new(STAT_DISPLAY_READ),
            upscale_stat: RunningStat::new(STAT_UPSCALE),
            state: ControllerState::Created,
        };

        for (channel, buffer) in controller.audio.iter_mut().enumerate() {
            // SAFETY: the buffers are never resized and `core` is dropped
            // before `audio`, see the field order.
            unsafe { controller.core.register_audio_channel(channel, buffer) };
        }
        controller.state = ControllerState::Running;
        Some(controller)
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// One loop iteration. Returns false once the cycle is over.
    pub fn step(&mut self) -> Result<bool, HarnessError> {
        if self.state != ControllerState::Running {
            return Ok(false);
        }

        self.core.advance_frame();
        self.frames += 1;
        {
            let _t = AccuTimer::new(&mut self.display_stat);
            self.core.read_display(&mut self.frame);
        }
        if let Some(pipeline) = self.upscale.as_mut() {
            let _t = AccuTimer::new(&mut self.upscale_stat);
            pipeline.run_per_frame(&self.frame)?;
        }

        self.tick += 1;
        trace!("Tick {}", self.tick);
        self.apply_script();

        if self.tick == self.capture.capture_tick() {
            if let Some(report) =
                self.capture
                    .capture(self.tick, &self.frame, self.upscale.as_mut(), &mut self.sink)
            {
                self.capture_report = Some(report);
            }
            self.tick = 0;
        }

        if self.tick == 0 {
            self.state = ControllerState::Terminating;
            return Ok(false);
        }
        Ok(true)
    }

    fn apply_script(&mut self) {
        if let Some(label) = self.script.label_at(self.tick) {
            info!("{}", label);
        }
        for action in self.script.actions_at(self.tick) {
            match action {
                Action::KeyDown(key) => {
                    info!("Key {:?} pressed", key);
                    self.core.inject_key(*key, true);
                }
                Action::KeyUp(key) => {
                    info!("Key {:?} released", key);
                    self.core.inject_key(*key, false);
                }
                Action::LoadSnapshot(path) => {
                    let path = path.as_ref().unwrap_or(&self.snapshot);
                    info!("Loading snapshot {:?}", path);
                    if !self.core.load_snapshot(path) {
                        warn!("Failed to load snapshot {:?}", path);
                    }
                }
            }
        }
    }

    pub fn run_to_completion(&mut self) -> Result<(), HarnessError> {
        while self.step()? {}
        Ok(())
    }

    /// Releases the core, then reports.
    pub fn finish(self) -> RunReport {
        let Self {
            core,
            audio,
            frames,
            display_stat,
            upscale_stat,
            upscale,
            capture_report,
            ..
        } = self;
        drop(core);
        drop(audio);

        let report = RunReport {
            frames,
            display: display_stat,
            upscale: upscale.map(|_| upscale_stat),
            capture: capture_report,
            state: ControllerState::Destroyed,
        };
        report.log_summary();
        report
    }
}

/// Runs one full cycle against the core produced by `create`.
pub fn run<C, S, F>(
    config: &HarnessConfig,
    create: F,
    upscalers: Option<Upscalers>,
    sink: S,
) -> Result<RunOutcome, HarnessError>
where
    C: EmulatorCore,
    S: ImageSink,
    F: FnOnce(&CreateParams) -> Option<C>,
{
    let Some(mut controller) = FrameCycleController::start(config, create, upscalers, sink) else {
        error!("Failed to create instance");
        return Ok(RunOutcome::NotStarted);
    };
    controller.run_to_completion()?;
    let report = controller.finish();
    info!("Done.");
    Ok(RunOutcome::Completed(report))
}
