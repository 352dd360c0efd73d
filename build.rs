// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Build script for the nexa-rf firmware and library
//!
//! Publishes the RP2350 memory layout so `cortex-m-rt` can link the
//! `nexa-remote` firmware binary:
//! - Copies `memory.x` into the build output directory
//! - Adds that directory to the linker search path
//! - Re-runs when the layout changes
//!
//! Host builds (the library and its tests) pick up the same search path but
//! never reference `memory.x`; the `-Tlink.x` and `-Tdefmt.x` arguments are
//! only set for bare-metal ARM targets in `.cargo/config.toml`.
//!
//! # Memory Layout
//! - **FLASH**: 4MB starting at 0x10000000
//! - **RAM**: 512KB starting at 0x20000000
//! - **SRAM8** / **SRAM9**: 4KB direct-mapped banks at 0x20080000 / 0x20081000

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Build script entry point
///
/// # Panics
/// Panics if `OUT_DIR` is not set or `memory.x` cannot be written.
fn main() {
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());

    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();

    println!("cargo:rustc-link-search={}", out.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}
