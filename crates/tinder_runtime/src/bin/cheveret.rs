//! Cheveret launcher

use std::process::ExitCode;

use anyhow::Result;
use tinder_runtime::{launchers, logging};
use tinder_services::BuildProfile;

fn main() -> Result<ExitCode> {
    logging::init();

    let bootstrap = launchers::cheveret(BuildProfile::current());
    tracing::debug!(modules = ?bootstrap.module_names().collect::<Vec<_>>(), "booting Cheveret");

    let status = bootstrap.run(&mut std::io::stderr())?;
    Ok(ExitCode::from(status.exit_code()))
}
