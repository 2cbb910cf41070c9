use crate::error::{BodyError, CliExitCode};
use crate::services::calendar::parse_iso_date;
use crate::services::normalizer::{normalize, HarmonicEncoding};
use crate::services::output::{print_one, render_model, render_point};
use crate::services::storage::{load_manifest, load_manifest_catalog};
use crate::services::validation::evaluate_point;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct FailureOut {
    target: String,
    error: String,
}

pub fn handle_show(json: bool, manifest: &Path) -> anyhow::Result<CliExitCode> {
    let doc = load_manifest(manifest)?;
    match normalize(&doc.content) {
        Ok(model) => {
            let layout = doc
                .content
                .as_object()
                .map(|o| HarmonicEncoding::detect(o).name())
                .unwrap_or("none");
            print_one(json, true, model, |m| {
                format!("{}\nlayout: {}\nsha256: {}", render_model(m), layout, doc.sha256)
            })?;
            Ok(CliExitCode::Pass)
        }
        Err(e) => {
            report_failure(json, &doc.file_name, &BodyError::from(e))?;
            Ok(CliExitCode::ValidationFailure)
        }
    }
}

pub fn handle_eval(
    json: bool,
    manifests: &Path,
    body: &str,
    date: &str,
) -> anyhow::Result<CliExitCode> {
    let date = parse_iso_date(date).ok_or_else(|| anyhow::anyhow!("invalid date: {}", date))?;
    let catalog = load_manifest_catalog(manifests)?;
    match evaluate_point(&catalog, body, date) {
        Ok(point) => {
            print_one(json, true, point, render_point)?;
            Ok(CliExitCode::Pass)
        }
        Err(e) => {
            report_failure(json, body, &e)?;
            Ok(CliExitCode::ValidationFailure)
        }
    }
}

fn report_failure(json: bool, target: &str, err: &BodyError) -> anyhow::Result<()> {
    let out = FailureOut {
        target: target.to_string(),
        error: err.to_string(),
    };
    print_one(json, false, out, |f| format!("{:<8} | FAIL: {}", f.target, f.error))
}
