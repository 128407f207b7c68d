use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A pyproject-style manifest as the release pipeline sees it.
#[allow(unused)]
pub const PYPROJECT: &str = r#"[build-system]
requires = ["setuptools>=61"]
build-backend = "setuptools.build_meta"

[project]
name = "lambda-kit"
version = "0.1.0"
requires-python = ">=3.9"
dependencies = [
    "click>=8.1",
]

[tool.ruff]
target-version = "py39"
"#;

/// Creates a temp dir holding `pyproject.toml` with `content`.
pub fn create_manifest(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pyproject.toml");
    fs::write(&path, content).unwrap();
    (temp, path)
}

/// Runs the binary in `dir` with `version` and extra args.
pub fn run_update(dir: &Path, version: &str, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("update-version");
    cmd.arg(version)
        .args(extra_args)
        .env_remove("RUST_LOG")
        .current_dir(dir);

    cmd.assert()
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
