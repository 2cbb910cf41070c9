use crate::domain::models::{BodyOutcome, ManifestSelection, RunReport, Status};
use crate::error::BodyError;
use crate::services::comparator::BodyComparison;
use crate::services::node_identity::NodeIdentityChecker;
use std::collections::BTreeMap;

/// Run-owned accumulator. Outcomes are keyed by body name so the report order
/// does not depend on evaluation order.
#[derive(Debug, Default)]
pub struct ReportAggregator {
    bodies: BTreeMap<String, BodyOutcome>,
    nodes: NodeIdentityChecker,
}

impl ReportAggregator {
    pub fn record_comparison(
        &mut self,
        body: &str,
        selection: &ManifestSelection<'_>,
        comparison: &BodyComparison,
    ) {
        for record in &comparison.records {
            self.nodes.observe(record);
        }
        self.bodies.insert(
            body.to_string(),
            BodyOutcome {
                body: body.to_string(),
                rows: comparison.rows,
                mismatches: comparison.mismatches,
                max_abs_err_deg: comparison.max_abs_err_deg,
                manifest: Some(selection.document.file_name.clone()),
                manifest_sha256: Some(selection.document.sha256.clone()),
                node_fallback: selection.node_fallback,
                error: None,
                status: Status::from_pass(comparison.passed()),
            },
        );
    }

    /// A body whose manifest could not be found or normalized.
    pub fn record_failure(
        &mut self,
        body: &str,
        rows: usize,
        selection: Option<&ManifestSelection<'_>>,
        err: &BodyError,
    ) {
        self.bodies.insert(
            body.to_string(),
            BodyOutcome {
                body: body.to_string(),
                rows,
                mismatches: 0,
                max_abs_err_deg: 0.0,
                manifest: selection.map(|s| s.document.file_name.clone()),
                manifest_sha256: selection.map(|s| s.document.sha256.clone()),
                node_fallback: selection.map(|s| s.node_fallback).unwrap_or(false),
                error: Some(err.to_string()),
                status: Status::Fail,
            },
        );
    }

    pub fn finish(self, golden: String, manifests: String, tolerance_deg: f64) -> RunReport {
        let nodes = self.nodes.outcome();
        let bodies_ok = self.bodies.values().all(|b| b.status == Status::Pass);
        let nodes_ok = nodes
            .as_ref()
            .map(|n| n.status == Status::Pass)
            .unwrap_or(true);
        RunReport {
            golden,
            manifests,
            tolerance_deg,
            bodies: self.bodies.into_values().collect(),
            nodes,
            result: Status::from_pass(bodies_ok && nodes_ok),
        }
    }
}
