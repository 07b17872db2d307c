//! Tinder Scripting Bridge
//!
//! Lua 5.4 execution via mlua for the launchers' embedded programs.
//!
//! ## Architecture
//!
//! - **Runtime:** one [`ScriptRuntime`] per process, standard libraries open
//! - **Modules:** host capabilities installed into `package.loaded`, never
//!   as globals, so programs reach them only through `require`
//! - **Loader:** the embedded blob (bytecode or source) compiled into one
//!   callable chunk, with failures classified for the launcher's exit code

pub mod hostlib;
#[cfg(target_os = "linux")]
pub mod inotify;
pub mod loader;
pub mod registry;
pub mod runtime;

pub use hostlib::{HostLibrary, SpawnStyle};
#[cfg(target_os = "linux")]
pub use inotify::InotifyModule;
pub use loader::{EmbeddedProgram, LoadError};
pub use registry::CapabilityModule;
pub use runtime::ScriptRuntime;

pub use mlua;

use std::ffi::{OsStr, OsString};

/// Lua strings are byte strings, so OS strings pass through unchanged.
pub(crate) fn os_str_to_lua(lua: &mlua::Lua, value: &OsStr) -> mlua::Result<mlua::String> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        lua.create_string(value.as_bytes())
    }
    #[cfg(not(unix))]
    {
        lua.create_string(value.to_string_lossy().as_bytes())
    }
}

/// Inverse of [`os_str_to_lua`]: any Lua byte string is a valid OS string.
pub(crate) fn lua_to_os_string(value: &mlua::String) -> OsString {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        OsStr::from_bytes(&value.as_bytes()).to_os_string()
    }
    #[cfg(not(unix))]
    {
        OsString::from(value.to_string_lossy().to_string())
    }
}
