use crate::domain::constants::NODE_FALLBACK_OFFSET_DEG;
use crate::domain::models::{GoldenRow, PointEvaluation, RunReport};
use crate::error::{BodyError, StructuralError};
use crate::services::calendar::days_since;
use crate::services::comparator::compare_body;
use crate::services::evaluator::evaluate_record;
use crate::services::normalizer::normalize;
use crate::services::report::ReportAggregator;
use crate::services::selector::ManifestCatalog;
use crate::services::storage::{load_golden, load_manifest_catalog};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct RunConfig<'a> {
    pub golden: &'a Path,
    pub manifests: &'a Path,
    pub tolerance_deg: f64,
}

pub fn group_by_body(rows: Vec<GoldenRow>) -> BTreeMap<String, Vec<GoldenRow>> {
    let mut out: BTreeMap<String, Vec<GoldenRow>> = BTreeMap::new();
    for row in rows {
        out.entry(row.body.clone()).or_default().push(row);
    }
    out
}

/// Loads inputs, then runs the in-memory pass. Only input problems are errors;
/// per-body failures land in the report.
pub fn run_validation(config: &RunConfig<'_>) -> Result<RunReport, StructuralError> {
    let rows = load_golden(config.golden)?;
    let catalog = load_manifest_catalog(config.manifests)?;
    let report = validate_rows(rows, &catalog, config.tolerance_deg).finish(
        config.golden.display().to_string(),
        config.manifests.display().to_string(),
        config.tolerance_deg,
    );
    info!(
        bodies = report.bodies.len(),
        result = report.result.as_str(),
        "validation finished"
    );
    Ok(report)
}

pub fn validate_rows(
    rows: Vec<GoldenRow>,
    catalog: &ManifestCatalog,
    tolerance_deg: f64,
) -> ReportAggregator {
    let mut aggregator = ReportAggregator::default();
    for (body, rows) in group_by_body(rows) {
        let selection = match catalog.select(&body) {
            Ok(s) => s,
            Err(e) => {
                warn!(body = %body, "no manifest for body");
                aggregator.record_failure(&body, rows.len(), None, &BodyError::from(e));
                continue;
            }
        };
        if selection.node_fallback {
            info!(body = %body, manifest = %selection.document.file_name, "using opposite node manifest");
        } else {
            debug!(body = %body, manifest = %selection.document.file_name, "selected manifest");
        }
        let model = match normalize(&selection.document.content) {
            Ok(m) => m,
            Err(e) => {
                warn!(body = %body, manifest = %selection.document.file_name, error = %e, "manifest load error");
                aggregator.record_failure(&body, rows.len(), Some(&selection), &BodyError::from(e));
                continue;
            }
        };
        let comparison = compare_body(&model, &rows, selection.node_fallback, tolerance_deg);
        debug!(
            body = %body,
            rows = comparison.rows,
            mismatches = comparison.mismatches,
            max_abs_err_deg = comparison.max_abs_err_deg,
            "compared body"
        );
        aggregator.record_comparison(&body, &selection, &comparison);
    }
    aggregator
}

/// Evaluates one body on one date, using the same manifest selection as a run.
pub fn evaluate_point(
    catalog: &ManifestCatalog,
    body: &str,
    date: NaiveDate,
) -> Result<PointEvaluation, BodyError> {
    let selection = catalog.select(body)?;
    let model = normalize(&selection.document.content)?;
    let offset = if selection.node_fallback {
        NODE_FALLBACK_OFFSET_DEG
    } else {
        0.0
    };
    let record = evaluate_record(&model, date, offset);
    Ok(PointEvaluation {
        body: body.to_string(),
        manifest: selection.document.file_name.clone(),
        node_fallback: selection.node_fallback,
        date,
        days_since_epoch: days_since(date, model.epoch),
        angle_deg: record.angle_deg,
        rasi: record.rasi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ManifestDocument, Status};
    use serde_json::json;
    use std::path::PathBuf;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn doc(name: &str, content: serde_json::Value) -> ManifestDocument {
        ManifestDocument {
            file_name: name.to_string(),
            path: PathBuf::from(name),
            content,
            sha256: String::new(),
        }
    }

    fn row(body: &str, date: NaiveDate, angle: f64, rasi: i64) -> GoldenRow {
        GoldenRow {
            body: body.to_string(),
            date,
            angle_deg: angle,
            rasi,
        }
    }

    fn rahu_manifest() -> ManifestDocument {
        doc(
            "rahu.json",
            json!({"planet": "Rahu", "t0": "2024-01-01", "a0_deg": 15.0, "n_deg_per_day": -0.05}),
        )
    }

    fn finish(agg: ReportAggregator) -> RunReport {
        agg.finish(String::new(), String::new(), 1e-5)
    }

    #[test]
    fn ketu_rows_use_rahu_manifest_shifted() {
        let catalog = ManifestCatalog::new(vec![rahu_manifest()]);
        let rows = vec![
            row("Rahu", ymd(2024, 1, 1), 15.0, 0),
            row("Rahu", ymd(2024, 1, 31), 13.5, 0),
            row("Ketu", ymd(2024, 1, 1), 195.0, 6),
            row("Ketu", ymd(2024, 1, 31), 193.5, 6),
        ];
        let report = finish(validate_rows(rows, &catalog, 1e-5));
        assert_eq!(report.result, Status::Pass);
        let ketu = &report.bodies[0];
        assert_eq!(ketu.body, "Ketu");
        assert!(ketu.node_fallback);
        assert_eq!(ketu.mismatches, 0);
        let nodes = report.nodes.unwrap();
        assert_eq!(nodes.shared_dates, 2);
        assert!(nodes.max_deviation_deg < 1e-9);
    }

    #[test]
    fn broken_manifest_fails_only_its_body() {
        let catalog = ManifestCatalog::new(vec![
            rahu_manifest(),
            doc("sun.json", json!({"planet": "Sun", "a0_deg": 1.0})),
        ]);
        let rows = vec![
            row("Sun", ymd(2024, 1, 1), 1.0, 0),
            row("Rahu", ymd(2024, 1, 1), 15.0, 0),
        ];
        let report = finish(validate_rows(rows, &catalog, 1e-5));
        assert_eq!(report.result, Status::Fail);
        let rahu = report.bodies.iter().find(|b| b.body == "Rahu").unwrap();
        assert_eq!(rahu.status, Status::Pass);
        let sun = report.bodies.iter().find(|b| b.body == "Sun").unwrap();
        assert_eq!(sun.status, Status::Fail);
        assert_eq!(sun.manifest.as_deref(), Some("sun.json"));
        assert!(sun.error.as_deref().unwrap().starts_with("load error"));
    }

    #[test]
    fn unknown_body_is_reported_not_found() {
        let catalog = ManifestCatalog::new(vec![rahu_manifest()]);
        let report = finish(validate_rows(vec![row("Venus", ymd(2024, 1, 1), 1.0, 0)], &catalog, 1e-5));
        assert_eq!(report.bodies[0].error.as_deref(), Some("manifest not found"));
        assert_eq!(report.result, Status::Fail);
    }

    #[test]
    fn point_evaluation_reports_offset_days() {
        let catalog = ManifestCatalog::new(vec![rahu_manifest()]);
        let point = evaluate_point(&catalog, "ketu", ymd(2024, 1, 31)).unwrap();
        assert!(point.node_fallback);
        assert_eq!(point.days_since_epoch, 30);
        assert!((point.angle_deg - 193.5).abs() < 1e-9);
        assert_eq!(point.rasi, 6);
    }
}
