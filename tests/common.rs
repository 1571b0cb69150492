#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::{Path, PathBuf};

pub fn pc() -> Command {
    cargo_bin_cmd!("punchclock")
}

/// Store file path inside a temp dir (the file itself is not created).
pub fn store_in(dir: &Path) -> String {
    dir.join("store.json").to_string_lossy().to_string()
}

/// Output file path inside a temp dir.
pub fn out_in(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

/// `punchclock --store <store> --now <now> <args…>`
pub fn at(store: &str, now: &str, args: &[&str]) -> Command {
    let mut cmd = pc();
    cmd.args(["--store", store, "--now", now]).args(args);
    cmd
}

/// Four punches for a regular day: 08:00, 12:00, 13:00, 17:00.
pub fn regular_day(store: &str, day: &str) {
    for hm in ["08:00", "12:00", "13:00", "17:00"] {
        at(store, &format!("{day}T{hm}"), &["punch"])
            .assert()
            .success();
    }
}
