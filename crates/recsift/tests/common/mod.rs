//! Common test utilities shared across integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{Value, json};

/// Path of the recsift binary built by cargo for this test run
pub fn recsift_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_recsift"))
}

/// Run the recsift binary in the specified directory
pub fn run_recsift_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(recsift_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute recsift binary")
}

/// The three sample cities used across scenarios
pub fn sample_cities() -> Value {
    json!([
        {"number": 3, "city": "A", "region": "X"},
        {"number": 7, "city": "B", "region": "Y"},
        {"number": 9, "city": "C", "region": "X"}
    ])
}

/// Write `value` as JSON to `dir/name`
pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, value.to_string()).expect("Failed to write test input");
    path
}

/// Read and parse a JSON file
pub fn read_json(path: &Path) -> Value {
    let text = std::fs::read_to_string(path).expect("Failed to read output file");
    serde_json::from_str(&text).expect("Output file is not valid JSON")
}
