//! Common test utilities shared across integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub use jobfit::test_utils::fixtures::{SAMPLE_JOB, SAMPLE_RESUME, SAMPLE_TAXONOMY_JSON};

/// Write `content` into `dir` under `name` and return the full path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write test file");
    path
}

/// A jobfit command pinned to an empty config in `dir`, so a global
/// config on the host cannot leak into test behavior.
pub fn isolated_jobfit(dir: &TempDir) -> Command {
    let config = write_file(dir, "empty-config.toml", "");
    let mut cmd = Command::cargo_bin("jobfit").expect("jobfit binary");
    cmd.env("JOBFIT_CONFIG", config);
    cmd
}

/// Write the sample resume and job description into `dir`.
pub fn write_sample_inputs(dir: &TempDir) -> (PathBuf, PathBuf) {
    (
        write_file(dir, "resume.txt", SAMPLE_RESUME),
        write_file(dir, "job.txt", SAMPLE_JOB),
    )
}
