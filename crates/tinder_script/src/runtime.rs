//! Script runtime management
//!
//! One Lua state per process. Standard libraries are opened at creation;
//! host modules must be registered before the embedded program is loaded,
//! since its top-level code may `require` them straight away.

use mlua::{Function, Lua, LuaOptions, StdLib, Table};

use crate::loader::{EmbeddedProgram, LoadError};
use crate::registry::CapabilityModule;

/// Script execution context
pub struct ScriptRuntime {
    lua: Lua,
}

impl ScriptRuntime {
    pub fn new() -> Self {
        // Precompiled chunks are refused by mlua's safe mode, and the
        // embedded programs expect every standard library (debug included).
        let lua = unsafe { Lua::unsafe_new_with(StdLib::ALL, LuaOptions::default()) };
        Self { lua }
    }

    pub fn lua(&self) -> &Lua {
        &self.lua
    }

    /// Store the table built by `open` as `package.loaded[name]`.
    ///
    /// Same effect as a `require` whose result is discarded, without
    /// creating a global. Registering a name again replaces the table.
    pub fn preload<F>(&self, name: &str, open: F) -> mlua::Result<()>
    where
        F: FnOnce(&Lua) -> mlua::Result<Table>,
    {
        let loaded: Table = self.lua.globals().get::<Table>("package")?.get("loaded")?;
        let module = open(&self.lua)?;
        loaded.set(name, module)?;

        tracing::debug!(module = name, "installed host module");
        Ok(())
    }

    pub fn register(&self, module: &dyn CapabilityModule) -> mlua::Result<()> {
        self.preload(module.name(), |lua| module.open(lua))
    }

    /// Compile the embedded program into a callable chunk.
    ///
    /// Nothing is installed on failure; the chunk only exists once this
    /// returns `Ok`.
    pub fn load(&self, program: &EmbeddedProgram) -> Result<Function, LoadError> {
        self.lua
            .load(program.bytes())
            .set_name(program.label())
            .into_function()
            .map_err(LoadError::from)
    }
}

impl Default for ScriptRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant {
        name: &'static str,
        value: i64,
    }

    impl CapabilityModule for Constant {
        fn name(&self) -> &str {
            self.name
        }

        fn open(&self, lua: &Lua) -> mlua::Result<Table> {
            let table = lua.create_table()?;
            table.set("value", self.value)?;
            Ok(table)
        }
    }

    #[test]
    fn standard_libraries_are_open() {
        let runtime = ScriptRuntime::new();
        let ok: bool = runtime
            .lua()
            .load("return string ~= nil and io ~= nil and os ~= nil and debug ~= nil and package ~= nil")
            .eval()
            .unwrap();
        assert!(ok);
    }

    #[test]
    fn modules_are_required_by_name_without_globals() {
        let runtime = ScriptRuntime::new();
        runtime.register(&Constant { name: "first", value: 1 }).unwrap();
        runtime.register(&Constant { name: "second", value: 2 }).unwrap();

        let (a, b, leaked): (i64, i64, bool) = runtime
            .lua()
            .load(
                r#"
                local first = require "first"
                local second = require "second"
                return first.value, second.value, rawget(_G, "first") ~= nil or rawget(_G, "second") ~= nil
                "#,
            )
            .eval()
            .unwrap();

        assert_eq!((a, b), (1, 2));
        assert!(!leaked);
    }

    #[test]
    fn registering_again_replaces_module() {
        let runtime = ScriptRuntime::new();
        runtime.register(&Constant { name: "lib", value: 1 }).unwrap();
        runtime.register(&Constant { name: "lib", value: 5 }).unwrap();

        let value: i64 = runtime.lua().load(r#"return require("lib").value"#).eval().unwrap();
        assert_eq!(value, 5);
    }

    #[test]
    fn loads_source_chunk() {
        let runtime = ScriptRuntime::new();
        let program = EmbeddedProgram::new("test", b"answer = 42");

        let chunk = runtime.load(&program).unwrap();
        chunk.call::<()>(()).unwrap();

        let answer: i64 = runtime.lua().globals().get("answer").unwrap();
        assert_eq!(answer, 42);
    }

    #[test]
    fn loads_precompiled_chunk() {
        let runtime = ScriptRuntime::new();
        let bytecode = runtime
            .lua()
            .load("return ...")
            .into_function()
            .unwrap()
            .dump(false);
        let bytecode: &'static [u8] = Box::leak(bytecode.into_boxed_slice());

        let chunk = runtime.load(&EmbeddedProgram::new("compiled", bytecode)).unwrap();
        let echoed: i64 = chunk.call(7).unwrap();
        assert_eq!(echoed, 7);
    }

    #[test]
    fn malformed_chunk_is_a_syntax_error() {
        let runtime = ScriptRuntime::new();
        let err = runtime
            .load(&EmbeddedProgram::new("broken", b"\x1bLua garbage"))
            .unwrap_err();

        assert!(matches!(err, LoadError::Syntax { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(!err.detail().unwrap_or_default().is_empty());
    }
}
