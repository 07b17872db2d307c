//! Detached shell command spawning
//!
//! Children are launched and forgotten. The parent drops the handle right
//! after spawning, never waits on the child and never learns how it ended;
//! children outlive the launcher and are re-parented when it exits.
//!
//! Directory change and program replacement happen in the child before the
//! shell starts. If either fails the child exits immediately without
//! running any of the parent's code, so a half-configured copy of the
//! launcher (and its inherited GUI state) never keeps running.

use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::process::Command;

/// Shell used to interpret command strings.
pub const SHELL: &str = "/bin/sh";

/// Parameters for one spawn. Not retained after the call returns.
///
/// Both fields are raw OS strings; the shell gets the command bytes as is.
#[derive(Debug, Clone, Copy)]
pub struct SpawnRequest<'a> {
    pub directory: Option<&'a Path>,
    pub command: &'a OsStr,
}

impl<'a> SpawnRequest<'a> {
    pub fn new<S: AsRef<OsStr> + ?Sized>(command: &'a S) -> Self {
        Self {
            directory: None,
            command: command.as_ref(),
        }
    }

    pub fn in_directory(mut self, directory: &'a Path) -> Self {
        self.directory = Some(directory);
        self
    }
}

/// Start `sh -c <command>` in the requested directory without waiting.
///
/// Returns the child's pid. Errors cover failures up to and including the
/// child's directory change and exec.
#[allow(clippy::zombie_processes)] // never reaped
pub fn spawn_shell_command(request: &SpawnRequest<'_>) -> io::Result<u32> {
    let mut cmd = Command::new(SHELL);
    cmd.arg("-c").arg(request.command);
    if let Some(directory) = request.directory {
        cmd.current_dir(directory);
    }

    let child = cmd.spawn()?;
    Ok(child.id())
}

/// Fire-and-forget form of [`spawn_shell_command`].
///
/// Failures are only visible at debug log level.
pub fn launch_detached(request: &SpawnRequest<'_>) {
    match spawn_shell_command(request) {
        Ok(pid) => tracing::debug!(pid, command = ?request.command, "spawned shell command"),
        Err(err) => tracing::debug!(
            %err,
            command = ?request.command,
            directory = ?request.directory,
            "shell command did not start"
        ),
    }
}
