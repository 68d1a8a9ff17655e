#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtc() -> Command {
    cargo_bin_cmd!("rtimeclock")
}

/// Create a unique config path inside the system temp dir and remove any existing file
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeclock.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeclock_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write the default config (demo accounts maria/maria123 and joao/joao123)
pub fn init_config(cfg_path: &str) {
    rtc()
        .args(["--config", cfg_path, "init"])
        .assert()
        .success();
}

/// Run a session for maria feeding `script` on stdin.
pub fn maria_session(cfg_path: &str, script: &str) -> assert_cmd::assert::Assert {
    rtc()
        .args([
            "--config",
            cfg_path,
            "session",
            "--user",
            "maria",
            "--password",
            "maria123",
        ])
        .write_stdin(script.to_string())
        .assert()
}

/// The reference day: entry 08:00, lunch 12:00-13:00, exit 17:00.
pub const MARIA_DAY: &str = "\
punch entry --date 2024-03-01 --time 08:00:00
punch lunch_out --date 2024-03-01 --time 12:00:00
punch lunch_in --date 2024-03-01 --time 13:00:00
punch exit --date 2024-03-01 --time 17:00:00
";
