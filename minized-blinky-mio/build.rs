// Copyright (c) 2026 ADNT Sarl <info@adnt.io>
// SPDX-License-Identifier: MIT

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let linker_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap())
        .parent()
        .unwrap()
        .join("linker_scripts");
    println!(
        "cargo:rerun-if-changed={}",
        linker_dir.join("zynq7000_ddr.x").display()
    );
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds only produce the stub binary.
    if env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("none") {
        return;
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let linker_script = fs::read_to_string(linker_dir.join("zynq7000_ddr.x"))
        .expect("Failed to read zynq7000_ddr.x");
    fs::write(out_dir.join("memory.x"), linker_script).expect("Failed to write memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg=-Tlink.x");
}
