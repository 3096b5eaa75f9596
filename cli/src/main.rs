mod args;
mod commands;

use args::Args;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Configure logging
    env_logger::init();

    let args = Args::parse();

    if args.list {
        commands::list_presets();
        return ExitCode::SUCCESS;
    }

    match args.image.as_deref() {
        Some(image) => {
            log::debug!("converting {}", image.display());
            commands::convert(&args, image)
        }
        None => {
            eprintln!("Error: no image given (see --help)");
            ExitCode::from(2)
        }
    }
}
