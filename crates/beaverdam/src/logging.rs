// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use eventline::info;
use eventline::runtime::{self, LogLevel};

use crate::paths::ensure_parent_dir;

/// File sink always, console only with `--verbose`.
pub fn init_logging(log_path: &Path, verbose: bool) -> Result<(), String> {
    ensure_parent_dir(log_path).map_err(|e| format!("create log dir: {e}"))?;

    async_io::block_on(runtime::init());

    runtime::enable_file_output(log_path).map_err(|e| format!("enable file output: {e}"))?;
    runtime::enable_console_output(verbose);
    runtime::enable_console_color(verbose);
    runtime::set_log_level(log_level(verbose));

    info!(
        "beaverdam {} logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_path.display()
    );

    Ok(())
}

fn log_level(verbose: bool) -> LogLevel {
    if verbose { LogLevel::Debug } else { LogLevel::Info }
}
