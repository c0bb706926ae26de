use std::path::PathBuf;

use clap::Parser;

use crate::constants::{DEFAULT_ROM_DIR, DEFAULT_SNAPSHOT};

/// Drives the Gumak core through a scripted 150-frame scenario and reports
/// display-read and upscale timings.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory the core loads its ROM images from.
    #[arg(long, default_value = DEFAULT_ROM_DIR)]
    pub rom_dir: PathBuf,

    /// Snapshot loaded by the scenario.
    #[arg(long, default_value = DEFAULT_SNAPSHOT)]
    pub snapshot: PathBuf,

    /// Directory screenshots are written to.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    // JSON scenario replacing the built-in input script.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Skip the per-frame and capture upscalers.
    #[arg(long)]
    pub no_upscale: bool,

    /// Skip writing the reference grid.
    #[arg(long)]
    pub no_grid: bool,

    /// Emulate the 48K model.
    #[arg(long)]
    pub model_48k: bool,

    // Optional log path, if none given, logs go to stderr.
    #[arg(long)]
    pub log_path: Option<PathBuf>,
}
