use std::process::ExitCode;

use clap::Parser;

use gumak_bench::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    // A core that failed to start still exits cleanly; the log says why.
    match gumak_bench::bench_exec(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
