//! Paper launcher

use std::process::ExitCode;

use anyhow::Result;
use tinder_runtime::{launchers, logging};
use tinder_services::{BuildProfile, CommandLine};

fn main() -> Result<ExitCode> {
    // Captured before anything else runs; read-only from here on.
    let command_line = CommandLine::capture();
    logging::init();

    let bootstrap = launchers::paper(BuildProfile::current(), command_line);
    tracing::debug!("booting Paper");

    let status = bootstrap.run(&mut std::io::stderr())?;
    Ok(ExitCode::from(status.exit_code()))
}
