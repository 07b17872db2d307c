//! Working directory query

use std::io;
use std::path::PathBuf;

/// Size of the path buffer the launchers have always used for this query,
/// terminator included. Longer paths are reported as unavailable.
pub const PATH_BUFFER_LEN: usize = 8191;

/// The process working directory, or `None` when the OS cannot report one
/// (removed directory, permission denied, path too long).
pub fn current_working_directory() -> Option<PathBuf> {
    resolve(std::env::current_dir())
}

fn resolve(query: io::Result<PathBuf>) -> Option<PathBuf> {
    match query {
        Ok(path) if path.as_os_str().len() < PATH_BUFFER_LEN => Some(path),
        Ok(path) => {
            tracing::debug!(len = path.as_os_str().len(), "working directory exceeds path buffer");
            None
        }
        Err(err) => {
            tracing::debug!(%err, "working directory query failed");
            None
        }
    }
}
