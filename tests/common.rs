#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment: HOME points into a temp dir so the real
/// configuration is never read or written.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn home(&self) -> &Path {
        self.dir.path()
    }

    pub fn log_path(&self) -> PathBuf {
        self.home().join("time_log.csv")
    }

    pub fn log_arg(&self) -> String {
        self.log_path().to_string_lossy().to_string()
    }

    /// Binary with HOME, NO_COLOR and `--log-file` preset.
    pub fn wt(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("worktime");
        cmd.env("HOME", self.home())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .args(["--log-file", self.log_arg().as_str()]);
        cmd
    }

    pub fn write_log(&self, content: &str) {
        fs::write(self.log_path(), content).expect("write log");
    }

    pub fn read_log(&self) -> String {
        fs::read_to_string(self.log_path()).expect("read log")
    }
}
