use std::path::PathBuf;

use crate::args::Args;
use crate::constants::*;
use crate::emulator::CreateParams;
use crate::error::HarnessError;
use crate::script::StimulusScript;

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub rom_dir: PathBuf,
    pub snapshot: PathBuf,
    pub output_dir: PathBuf,
    pub script: StimulusScript,
    pub capture_tick: u32,
    pub upscale: bool,
    pub grid: bool,
    pub is_48k: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            rom_dir: PathBuf::from(DEFAULT_ROM_DIR),
            snapshot: PathBuf::from(DEFAULT_SNAPSHOT),
            output_dir: PathBuf::from("."),
            script: StimulusScript::default_scenario(),
            capture_tick: CAPTURE_TICK,
            upscale: true,
            grid: true,
            is_48k: false,
        }
    }
}

impl HarnessConfig {
    pub fn from_args(args: &Args) -> Result<Self, HarnessError> {
        let script = match &args.script {
            Some(path) => StimulusScript::load(path, CAPTURE_TICK)?,
            None => StimulusScript::default_scenario(),
        };
        Ok(Self {
            rom_dir: args.rom_dir.clone(),
            snapshot: args.snapshot.clone(),
            output_dir: args.output_dir.clone(),
            script,
            capture_tick: CAPTURE_TICK,
            upscale: !args.no_upscale,
            grid: !args.no_grid,
            is_48k: args.model_48k,
        })
    }

    pub fn create_params(&self) -> CreateParams {
        CreateParams {
            is_48k: self.is_48k,
            sample_rate: SAMPLE_RATE,
            buffer_frames: AUDIO_BUFFER_LEN,
            rom_dir: self.rom_dir.clone(),
        }
    }
}
