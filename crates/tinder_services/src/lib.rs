//! Tinder Services Layer
//!
//! Host-side operations the launchers expose to their embedded programs:
//! - Build identity (application id, version, devel flag)
//! - Working directory query
//! - Command line snapshot
//! - Detached shell command spawning
//! - Filesystem change notification (Linux)
//!
//! Nothing here knows about the scripting runtime. `tinder_script` wraps
//! these into the tables the embedded program requires.

pub mod cli;
#[cfg(target_os = "linux")]
pub mod fswatch;
pub mod identity;
pub mod process;
pub mod workdir;

pub use cli::CommandLine;
pub use identity::{AppIdentity, BuildProfile, VERSION};
pub use process::{launch_detached, spawn_shell_command, SpawnRequest};
pub use workdir::current_working_directory;
