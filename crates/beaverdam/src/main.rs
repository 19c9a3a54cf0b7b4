// Author: Dustin Pilgrim
// License: MIT

mod annotation;
mod cli;
mod config;
mod cursor;
mod logging;
mod paths;
mod render;
mod run;

use clap::Parser;
use eventline::{debug, error, info};

use crate::cli::Args;
use crate::logging::init_logging;
use crate::paths::{default_config_path, default_log_path};

fn main() {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| default_log_path("beaverdam.log"));

    if let Err(e) = init_logging(&log_path, args.verbose) {
        // logging should never block normal usage
        eprintln!("beaverdam: failed to init logging: {e}");
    }

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    info!("starting beaverdam");
    debug!("parsed args: {:?}", args.cmd);

    let config_path = args.config.unwrap_or_else(default_config_path);
    if !config_path.exists() {
        debug!("no config at {} (using defaults)", config_path.display());
    }
    let cfg = config::load(&config_path).map_err(|e| format!("{}: {e}", config_path.display()))?;
    debug!("config: {:?}", cfg);

    run::run_cmd(args.cmd, &cfg)
}
