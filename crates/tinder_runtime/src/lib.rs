//! Tinder Launcher Runtime
//!
//! Boots an embedded Lua program: create the runtime, install host modules,
//! load the program blob, run it, report the exit code.

pub mod bootstrap;
pub mod launchers;
pub mod logging;

pub use bootstrap::{Bootstrap, BootstrapError, LaunchStatus};
