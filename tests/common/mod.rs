#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run slate commands in an isolated temp directory
pub struct SlateTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl SlateTest {
    /// An empty directory: no catalog, no config.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        SlateTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_slate").to_string(),
        }
    }

    /// A directory holding the sample catalog as `catalog.json`.
    pub fn with_sample_catalog() -> Self {
        let slate = Self::new();
        slate.write_catalog(&fixtures::sample_catalog());
        slate
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("SLATE_ROOT")
            .env_remove("SLATE_LOG")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to execute slate command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Run with `--json` appended and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let mut full: Vec<&str> = args.to_vec();
        full.push("--json");
        let stdout = self.run_success(&full);
        serde_json::from_str(&stdout).unwrap_or_else(|e| {
            panic!("Command {:?} did not print valid JSON ({e}):\n{stdout}", full)
        })
    }

    pub fn write_catalog(&self, content: &str) {
        let path = self.temp_dir.path().join("catalog.json");
        fs::write(path, content).expect("Failed to write catalog file");
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.temp_dir.path().join(".slate");
        fs::create_dir_all(&dir).expect("Failed to create .slate directory");
        fs::write(dir.join("config.yaml"), content).expect("Failed to write config file");
    }

    pub fn read_file(&self, relative_path: &str) -> Option<String> {
        fs::read_to_string(self.temp_dir.path().join(relative_path)).ok()
    }

    pub fn file_exists(&self, relative_path: &str) -> bool {
        self.temp_dir.path().join(relative_path).exists()
    }
}
