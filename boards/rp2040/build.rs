//! This build script copies the `memory.x` file from the crate root into
//! a directory where the linker can always find it at build time.
//! The workspace root is the linker's working directory, so without this the
//! board's `memory.x` would not be found.
//!
//! The build script also sets the linker flags to tell it which link script to use.

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    // Put `memory.x` in our output directory and ensure it's
    // on the linker search path.
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());
    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();
    println!("cargo:rustc-link-search={}", out.display());

    // Only re-run the build script when `memory.x` is changed
    println!("cargo:rerun-if-changed=memory.x");

    // `--nmagic` is required if memory section addresses are not aligned to 0x10000,
    // for example the FLASH and RAM sections in your `memory.x`.
    // See https://github.com/rust-embedded/cortex-m-quickstart/pull/95
    println!("cargo:rustc-link-arg-bins=--nmagic");

    // Set the linker script to the one provided by cortex-m-rt.
    println!("cargo:rustc-link-arg-bins=-Tlink.x");

    // Boot2 section for RP2040
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");

    // Use defmt
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
