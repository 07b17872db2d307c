//! `inotify` module for embedded programs
//!
//! ```lua
//! local inotify = require "inotify"
//! local handle = inotify.init({ blocking = false })
//! local wd = handle:addwatch(dir, inotify.IN_CREATE | inotify.IN_DELETE)
//! for _, ev in ipairs(handle:read()) do print(ev.wd, ev.mask, ev.name) end
//! handle:close()
//! ```

use std::os::fd::AsRawFd;
use std::path::Path;

use mlua::{Lua, String as LuaString, Table, UserData, UserDataMethods};
use tinder_services::fswatch::{Inotify, WatchEvent, MASKS};

use crate::{lua_to_os_string, os_str_to_lua};
use crate::registry::CapabilityModule;

/// Module name the embedded program requires.
pub const MODULE_NAME: &str = "inotify";

pub struct InotifyModule;

impl CapabilityModule for InotifyModule {
    fn name(&self) -> &str {
        MODULE_NAME
    }

    fn open(&self, lua: &Lua) -> mlua::Result<Table> {
        let lib = lua.create_table()?;
        for (name, mask) in MASKS {
            lib.set(*name, *mask)?;
        }

        lib.set(
            "init",
            lua.create_function(|lua, options: Option<Table>| {
                let blocking = match options {
                    Some(options) => options.get::<Option<bool>>("blocking")?.unwrap_or(true),
                    None => true,
                };
                let inotify = Inotify::init(blocking).map_err(mlua::Error::external)?;
                lua.create_userdata(WatchHandle(Some(inotify)))
            })?,
        )?;

        Ok(lib)
    }
}

/// Script-side handle. `None` once closed.
struct WatchHandle(Option<Inotify>);

impl WatchHandle {
    fn get(&self) -> mlua::Result<&Inotify> {
        self.0
            .as_ref()
            .ok_or_else(|| mlua::Error::RuntimeError("inotify handle is closed".into()))
    }
}

fn event_table(lua: &Lua, event: &WatchEvent) -> mlua::Result<Table> {
    let table = lua.create_table()?;
    table.set("wd", event.wd)?;
    table.set("mask", event.mask)?;
    table.set("cookie", event.cookie)?;
    if let Some(name) = &event.name {
        table.set("name", os_str_to_lua(lua, name)?)?;
    }
    Ok(table)
}

impl UserData for WatchHandle {
    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        methods.add_method("addwatch", |_, this, (path, mask): (LuaString, u32)| {
            this.get()?
                .add_watch(Path::new(&lua_to_os_string(&path)), mask)
                .map_err(mlua::Error::external)
        });

        methods.add_method("rmwatch", |_, this, wd: i32| {
            this.get()?.remove_watch(wd).map_err(mlua::Error::external)
        });

        methods.add_method("read", |lua, this, ()| {
            let events = this.get()?.read_events().map_err(mlua::Error::external)?;
            let list = lua.create_table()?;
            for (i, event) in events.iter().enumerate() {
                list.set(i + 1, event_table(lua, event)?)?;
            }
            Ok(list)
        });

        methods.add_method("fileno", |_, this, ()| Ok(this.get()?.as_raw_fd()));

        methods.add_method_mut("close", |_, this, ()| {
            this.0.take();
            Ok(())
        });
    }
}
