// Color-accumulation tool: `image_combiner <image> <color> [<image> <color>...] <output>`.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use image_combiner::accumulate;
use image_combiner::cli::{self, AccumulateArgs};
use image_combiner::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _logger = match logging::init(logging::DEFAULT_LEVEL).context("Failed to start logging") {
        Ok(handle) => handle,
        Err(e) => {
            println!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let args = match AccumulateArgs::try_parse() {
        Ok(args) => args,
        Err(e) => return cli::report_parse_error(e),
    };

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            if e.is_usage_error() {
                println!("{}", AccumulateArgs::command().render_usage());
            }
            return ExitCode::FAILURE;
        }
    };

    // Each error already names the stage and file that failed.
    match accumulate::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
