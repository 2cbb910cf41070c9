use crate::error::CliExitCode;
use crate::services::output::{print_one, render_report};
use crate::services::validation::{run_validation, RunConfig};
use std::path::Path;

pub fn handle_check(
    json: bool,
    golden: &Path,
    manifests: &Path,
    tolerance_deg: f64,
) -> anyhow::Result<CliExitCode> {
    let config = RunConfig {
        golden,
        manifests,
        tolerance_deg,
    };
    let report = run_validation(&config)?;
    let passed = report.passed();
    print_one(json, passed, report, render_report)?;
    Ok(CliExitCode::from_pass(passed))
}
