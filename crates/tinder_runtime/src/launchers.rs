//! The two launchers built from this workspace

use tinder_script::{EmbeddedProgram, HostLibrary, SpawnStyle};
use tinder_services::{AppIdentity, BuildProfile, CommandLine};

use crate::bootstrap::Bootstrap;

pub static CHEVERET_PROGRAM: EmbeddedProgram = EmbeddedProgram::new(
    "cheveret",
    include_bytes!(concat!(env!("OUT_DIR"), "/cheveret.lc")),
);

pub static PAPER_PROGRAM: EmbeddedProgram = EmbeddedProgram::new(
    "paper",
    include_bytes!(concat!(env!("OUT_DIR"), "/paper.lc")),
);

pub const CHEVERET_APP_ID: &str = "ca.vlacroix.Cheveret";
pub const PAPER_APP_ID: &str = "ca.vlacroix.Paper";

/// Cheveret: `chevlib` with working directory and directory-aware spawn,
/// plus the `inotify` module on Linux.
pub fn cheveret(profile: BuildProfile) -> Bootstrap {
    let chevlib = HostLibrary::new("chevlib", AppIdentity::resolve(CHEVERET_APP_ID, profile))
        .with_working_directory()
        .with_spawn(SpawnStyle::InDirectory);

    let bootstrap = Bootstrap::new("Cheveret", CHEVERET_PROGRAM).with_module(chevlib);

    #[cfg(target_os = "linux")]
    let bootstrap = bootstrap.with_module(tinder_script::InotifyModule);

    bootstrap
}

/// Paper: `paperlib` with the command line and plain spawn.
pub fn paper(profile: BuildProfile, command_line: CommandLine) -> Bootstrap {
    let paperlib = HostLibrary::new("paperlib", AppIdentity::resolve(PAPER_APP_ID, profile))
        .with_command_line(command_line)
        .with_spawn(SpawnStyle::Plain);

    Bootstrap::new("Paper", PAPER_PROGRAM).with_module(paperlib)
}
