//! Embedded program loading
//!
//! The program ships inside the launcher binary as an opaque byte range.
//! Loading either yields a chunk ready to call with no arguments, or one of
//! three failures, each with its own process exit code.

use thiserror::Error;

/// Exit code when the embedded program does not parse.
pub const EXIT_MALFORMED: u8 = 1;
/// Exit code when the runtime ran out of memory while loading.
pub const EXIT_OUT_OF_MEMORY: u8 = 2;
/// Exit code for any other load failure.
pub const EXIT_UNHANDLED: u8 = 255;

/// A program blob compiled into the executable image.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedProgram {
    label: &'static str,
    bytes: &'static [u8],
}

impl EmbeddedProgram {
    pub const fn new(label: &'static str, bytes: &'static [u8]) -> Self {
        Self { label, bytes }
    }

    /// Chunk name shown in runtime diagnostics.
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn bytes(&self) -> &'static [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Why an embedded program could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("embedded binary is malformed")]
    Syntax { message: String },

    #[error("could not allocate memory")]
    Memory,

    #[error("an unhandled error occurred")]
    Unhandled(#[source] mlua::Error),
}

impl LoadError {
    pub fn exit_code(&self) -> u8 {
        match self {
            LoadError::Syntax { .. } => EXIT_MALFORMED,
            LoadError::Memory => EXIT_OUT_OF_MEMORY,
            LoadError::Unhandled(_) => EXIT_UNHANDLED,
        }
    }

    /// Runtime message worth showing the operator, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            LoadError::Syntax { message } => Some(message),
            _ => None,
        }
    }
}

impl From<mlua::Error> for LoadError {
    fn from(err: mlua::Error) -> Self {
        match err {
            mlua::Error::SyntaxError { message, .. } => LoadError::Syntax { message },
            mlua::Error::MemoryError(_) => LoadError::Memory,
            other => LoadError::Unhandled(other),
        }
    }
}
