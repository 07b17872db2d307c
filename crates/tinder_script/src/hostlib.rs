//! Host library table
//!
//! The table each launcher installs under its own module name (`chevlib`,
//! `paperlib`). Function names are the ones the embedded programs call.

use std::path::Path;

use mlua::{Lua, LuaSerdeExt, String as LuaString, Table, Variadic};
use tinder_services::{
    current_working_directory, launch_detached, AppIdentity, CommandLine, SpawnRequest,
};

use crate::{lua_to_os_string, os_str_to_lua};
use crate::registry::CapabilityModule;

/// Shape of the spawn function a launcher exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnStyle {
    /// `forkcdexec(dir, command)`; `dir` may be nil.
    InDirectory,
    /// `forkexec(command)`
    Plain,
}

/// Identity queries plus the optional capabilities a launcher opts into.
#[derive(Debug, Clone)]
pub struct HostLibrary {
    name: String,
    identity: AppIdentity,
    working_directory: bool,
    command_line: Option<CommandLine>,
    spawn: SpawnStyle,
}

impl HostLibrary {
    pub fn new(name: impl Into<String>, identity: AppIdentity) -> Self {
        Self {
            name: name.into(),
            identity,
            working_directory: false,
            command_line: None,
            spawn: SpawnStyle::Plain,
        }
    }

    /// Expose `getcwd`.
    pub fn with_working_directory(mut self) -> Self {
        self.working_directory = true;
        self
    }

    /// Expose `get_cli_args`, answering from `command_line`.
    pub fn with_command_line(mut self, command_line: CommandLine) -> Self {
        self.command_line = Some(command_line);
        self
    }

    pub fn with_spawn(mut self, spawn: SpawnStyle) -> Self {
        self.spawn = spawn;
        self
    }
}

impl CapabilityModule for HostLibrary {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self, lua: &Lua) -> mlua::Result<Table> {
        let lib = lua.create_table()?;

        let devel = self.identity.is_devel_build();
        lib.set("get_is_devel", lua.create_function(move |_, ()| Ok(devel))?)?;

        let id = self.identity.application_id().to_owned();
        lib.set("get_app_id", lua.create_function(move |_, ()| Ok(id.clone()))?)?;

        let version = self.identity.application_version();
        lib.set("get_app_ver", lua.create_function(move |_, ()| Ok(version))?)?;

        let identity = self.identity.clone();
        lib.set(
            "get_build_info",
            lua.create_function(move |lua, ()| lua.to_value(&identity))?,
        )?;

        if self.working_directory {
            // No return values at all when the query fails.
            lib.set(
                "getcwd",
                lua.create_function(|lua, ()| {
                    let mut results = Variadic::new();
                    if let Some(path) = current_working_directory() {
                        results.push(os_str_to_lua(lua, path.as_os_str())?);
                    }
                    Ok(results)
                })?,
            )?;
        }

        if let Some(command_line) = &self.command_line {
            let command_line = command_line.clone();
            lib.set(
                "get_cli_args",
                lua.create_function(move |lua, ()| {
                    command_line
                        .iter()
                        .map(|arg| os_str_to_lua(lua, arg))
                        .collect::<mlua::Result<Variadic<_>>>()
                })?,
            )?;
        }

        // Directory and command are byte strings; neither has to be UTF-8.
        match self.spawn {
            SpawnStyle::InDirectory => lib.set(
                "forkcdexec",
                lua.create_function(
                    |_, (directory, command): (Option<LuaString>, LuaString)| {
                        let command = lua_to_os_string(&command);
                        let directory = directory.as_ref().map(lua_to_os_string);

                        let mut request = SpawnRequest::new(&command);
                        if let Some(directory) = &directory {
                            request = request.in_directory(Path::new(directory));
                        }
                        launch_detached(&request);
                        Ok(())
                    },
                )?,
            )?,
            SpawnStyle::Plain => lib.set(
                "forkexec",
                lua.create_function(|_, command: LuaString| {
                    launch_detached(&SpawnRequest::new(&lua_to_os_string(&command)));
                    Ok(())
                })?,
            )?,
        }

        Ok(lib)
    }
}
