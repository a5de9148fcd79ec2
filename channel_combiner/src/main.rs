// Channel-assignment tool: `channel_combiner -r <path> -g <path> -b <path> -output <path>`.
// Each input becomes one channel of the JPEG that is written.

use anyhow::Context;
use clap::Parser;
use image_combiner::channels;
use image_combiner::cli::{self, ChannelArgs};
use image_combiner::logging;
use image_combiner::CombinerError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _logger = match logging::init(logging::DEFAULT_LEVEL).context("Failed to start logging") {
        Ok(handle) => handle,
        Err(e) => {
            println!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let argv = cli::expand_single_dash_long_flags(std::env::args_os());
    let args = match ChannelArgs::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => return cli::report_parse_error(e),
    };

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            match e {
                CombinerError::MissingOutput => println!("An output filename is required."),
                _ => println!("An image must be supplied for every color."),
            }
            println!("Run with -h for more information.");
            return ExitCode::FAILURE;
        }
    };

    // Each error already names the stage and file that failed.
    match channels::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
