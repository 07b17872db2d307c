//! Command line snapshot

use std::ffi::{OsStr, OsString};
use std::sync::Arc;

/// The process argument vector, captured once at entry.
///
/// Includes the program name as the first element. Cloning shares the
/// underlying storage; the arguments are never modified after capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    args: Arc<[OsString]>,
}

impl CommandLine {
    pub fn capture() -> Self {
        Self::from_args(std::env::args_os())
    }

    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OsStr> {
        self.args.iter().map(OsString::as_os_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_order_and_length() {
        let cli = CommandLine::from_args(["a", "b"]);
        assert_eq!(cli.len(), 2);
        assert_eq!(cli.iter().collect::<Vec<_>>(), vec![OsStr::new("a"), OsStr::new("b")]);
    }

    #[test]
    fn capture_includes_program_name() {
        let cli = CommandLine::capture();
        assert_eq!(cli.len(), std::env::args_os().count());
        assert!(!cli.is_empty());
    }
}
