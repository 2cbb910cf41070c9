#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const GOLDEN_HEADER: &str = "planet,date,L_hat_deg,rasi";

pub struct TestEnv {
    _tmp: TempDir,
    pub golden: PathBuf,
    pub manifests: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let manifests = tmp.path().join("manifests");
        fs::create_dir_all(&manifests).expect("create manifest dir");
        let golden = tmp.path().join("golden.csv");
        Self {
            _tmp: tmp,
            golden,
            manifests,
        }
    }

    pub fn write_golden(&self, rows: &[&str]) {
        let mut body = String::from(GOLDEN_HEADER);
        body.push('\n');
        for r in rows {
            body.push_str(r);
            body.push('\n');
        }
        fs::write(&self.golden, body).expect("write golden");
    }

    pub fn write_raw_golden(&self, raw: &str) {
        fs::write(&self.golden, raw).expect("write golden");
    }

    pub fn write_manifest(&self, file_name: &str, manifest: Value) {
        fs::write(
            self.manifests.join(file_name),
            serde_json::to_string_pretty(&manifest).expect("serialize manifest"),
        )
        .expect("write manifest");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("ephem-golden");
        cmd.env_remove("EPHEM_GOLDEN")
            .env_remove("EPHEM_MANIFESTS")
            .env_remove("EPHEM_TOL")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn check_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("check")
            .arg("--golden")
            .arg(&self.golden)
            .arg("--manifests")
            .arg(&self.manifests);
        cmd
    }

    /// Runs `--json check` and returns the parsed envelope, asserting the exit code.
    pub fn check_json(&self, expected_code: i32) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("check")
            .arg("--golden")
            .arg(&self.golden)
            .arg("--manifests")
            .arg(&self.manifests)
            .assert()
            .code(expected_code)
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn rahu_flat() -> Value {
    serde_json::json!({
        "planet": "Rahu",
        "t0": "2024-01-01",
        "a0_deg": 15.0,
        "n_deg_per_day": -0.05
    })
}
