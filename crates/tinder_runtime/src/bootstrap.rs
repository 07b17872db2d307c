//! Bootstrap sequence
//!
//! Init → Register → Load → Execute → Exit. Linear and one-shot: the first
//! failure ends the launch.

use std::io::Write;

use thiserror::Error;
use tinder_script::{CapabilityModule, EmbeddedProgram, LoadError, ScriptRuntime};

/// Failures outside the load phase. Both are fatal.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to install module '{module}'")]
    Register {
        module: String,
        #[source]
        source: tinder_script::mlua::Error,
    },

    #[error("embedded program raised an error")]
    Execute(#[source] tinder_script::mlua::Error),
}

/// How a launch ended when it did not raise.
#[derive(Debug)]
pub enum LaunchStatus {
    /// The program returned normally.
    Completed,
    /// The program never ran.
    LoadFailed(LoadError),
}

impl LaunchStatus {
    pub fn exit_code(&self) -> u8 {
        match self {
            LaunchStatus::Completed => 0,
            LaunchStatus::LoadFailed(err) => err.exit_code(),
        }
    }
}

/// One launcher: its program and the modules installed before it runs.
pub struct Bootstrap {
    display_name: &'static str,
    program: EmbeddedProgram,
    modules: Vec<Box<dyn CapabilityModule>>,
}

impl Bootstrap {
    pub fn new(display_name: &'static str, program: EmbeddedProgram) -> Self {
        Self {
            display_name,
            program,
            modules: Vec::new(),
        }
    }

    pub fn with_module(mut self, module: impl CapabilityModule + 'static) -> Self {
        self.modules.push(Box::new(module));
        self
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|module| module.name())
    }

    /// Run the whole sequence. Load failures are reported on `diagnostics`
    /// and returned as a status; errors raised by the program propagate.
    pub fn run(&self, diagnostics: &mut dyn Write) -> Result<LaunchStatus, BootstrapError> {
        let runtime = ScriptRuntime::new();

        for module in &self.modules {
            runtime
                .register(module.as_ref())
                .map_err(|source| BootstrapError::Register {
                    module: module.name().to_owned(),
                    source,
                })?;
        }

        tracing::debug!(
            program = self.program.label(),
            bytes = self.program.len(),
            "loading embedded program"
        );
        let entry = match runtime.load(&self.program) {
            Ok(entry) => entry,
            Err(err) => {
                self.report(diagnostics, &err);
                return Ok(LaunchStatus::LoadFailed(err));
            }
        };

        entry.call::<()>(()).map_err(BootstrapError::Execute)?;

        tracing::debug!(program = self.program.label(), "embedded program returned");
        Ok(LaunchStatus::Completed)
    }

    fn report(&self, diagnostics: &mut dyn Write, err: &LoadError) {
        tracing::error!(program = self.program.label(), code = err.exit_code(), error = %err, "load failed");

        // Nowhere left to report a failing diagnostic stream.
        let _ = writeln!(diagnostics, "Failed to load {}: {err}.", self.display_name);
        if let Some(detail) = err.detail() {
            let _ = writeln!(diagnostics, "{detail}");
        }
    }
}
