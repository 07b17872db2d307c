//! Capability registry
//!
//! A capability module is a named table of host functions. Modules are
//! handed to [`ScriptRuntime::register`](crate::ScriptRuntime::register),
//! which stores the opened table in `package.loaded` under the module's
//! name. The name is only used at that boundary, where the embedded
//! program writes `require "<name>"`.

use mlua::{Lua, Table};

/// A host module the embedded program can `require`.
pub trait CapabilityModule {
    /// Name passed to `require`.
    fn name(&self) -> &str;

    /// Build the module table inside `lua`.
    fn open(&self, lua: &Lua) -> mlua::Result<Table>;
}

impl<M: CapabilityModule + ?Sized> CapabilityModule for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn open(&self, lua: &Lua) -> mlua::Result<Table> {
        (**self).open(lua)
    }
}
