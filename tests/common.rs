#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn legcal() -> Command {
    cargo_bin_cmd!("legcal")
}

/// Create a unique output directory path inside the system temp dir and
/// remove any leftovers from a previous run
pub fn temp_out_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_legcal_out", name));
    fs::remove_dir_all(&path).ok();
    path
}
