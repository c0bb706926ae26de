pub mod args;
pub mod capture;
pub mod config;
pub mod constants;
pub mod controller;
pub mod emulator;
pub mod error;
pub mod frame;
pub mod image;
pub mod script;
pub mod telemetry;
pub mod upscale;

use std::io;
use std::io::Write;
use std::path::PathBuf;

pub use controller::{FrameCycleController, RunOutcome, RunReport, run};
pub use error::HarnessError;

pub fn setup_logging(log_path: &Option<PathBuf>) -> Result<(), io::Error> {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    // Send output to the file instead of stderr when a path is given.
    if let Some(path) = log_path {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Runs the benchmark against the linked Gumak library.
#[cfg(feature = "gumak")]
pub fn bench_exec(args: args::Args) -> Result<RunOutcome, HarnessError> {
    use log::{info, warn};

    setup_logging(&args.log_path)?;
    info!("Gumak frame-cycle benchmark");

    let config = config::HarnessConfig::from_args(&args)?;
    std::fs::create_dir_all(&config.output_dir)?;

    let upscalers = if config.upscale {
        linked_upscalers()
    } else {
        None
    };
    if config.upscale && upscalers.is_none() {
        warn!("No upscaler linked, only display reads are measured");
    }

    run(
        &config,
        emulator::GumakCore::create,
        upscalers,
        image::PngSink,
    )
}

#[cfg(all(feature = "gumak", feature = "hqx"))]
fn linked_upscalers() -> Option<upscale::Upscalers> {
    Some(upscale::Upscalers {
        per_frame: Box::new(upscale::Hqx::x3()),
        capture: Box::new(upscale::Hqx::x2()),
    })
}

#[cfg(all(feature = "gumak", not(feature = "hqx")))]
fn linked_upscalers() -> Option<upscale::Upscalers> {
    None
}
