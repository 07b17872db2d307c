//! Copies each launcher's program into OUT_DIR for `include_bytes!`.
//!
//! Point `TINDER_<NAME>_PROGRAM` at `luac` output to ship compiled
//! bytecode; otherwise the stand-in source under `programs/` is embedded.

use std::env;
use std::fs;
use std::path::PathBuf;

const PROGRAMS: &[(&str, &str)] = &[
    ("cheveret", "TINDER_CHEVERET_PROGRAM"),
    ("paper", "TINDER_PAPER_PROGRAM"),
];

fn main() {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));

    for (name, var) in PROGRAMS {
        println!("cargo:rerun-if-env-changed={var}");

        let source = env::var_os(var)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(format!("programs/{name}.lua")));
        println!("cargo:rerun-if-changed={}", source.display());

        let target = out_dir.join(format!("{name}.lc"));
        if let Err(err) = fs::copy(&source, &target) {
            panic!("failed to embed {}: {err}", source.display());
        }
    }
}
