//! Build script for servo-deck.
//!
//! Installs the per-target `memory.x` so the demo binaries link without any
//! extra setup in the consuming project.

use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rustc-check-cfg=cfg(rust_analyzer)");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let target = env::var("TARGET").expect("TARGET is set by cargo");

    let memory_x = if target.starts_with("thumbv6m") {
        // Pico 1 (RP2040)
        Some("memory-pico1.x")
    } else if target.starts_with("thumbv8m") {
        // Pico 2 (RP235x, ARM core)
        Some("memory-pico2.x")
    } else if target.starts_with("riscv32imac") {
        // Pico 2 (RP235x, RISC-V core)
        Some("memory-pico2-riscv.x")
    } else {
        // Host builds need no linker script.
        None
    };

    if let Some(name) = memory_x {
        let contents =
            fs::read_to_string(name).unwrap_or_else(|_| panic!("failed to read {name}"));
        fs::write(out_dir.join("memory.x"), contents).expect("failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed={name}");
    }
}
