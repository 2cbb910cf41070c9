use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One sinusoidal correction: `c·sin(ω·t) + d·cos(ω·t)` with `t` in days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HarmonicTerm {
    pub omega_rad_per_day: f64,
    pub sin_coeff: f64,
    pub cos_coeff: f64,
}

/// Harmonic longitude model after normalization. Shape-independent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalModel {
    pub body: String,
    pub epoch: NaiveDate,
    pub a0_deg: f64,
    pub rate_deg_per_day: f64,
    pub terms: Vec<HarmonicTerm>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoldenRow {
    pub body: String,
    pub date: NaiveDate,
    pub angle_deg: f64,
    pub rasi: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRecord {
    pub body: String,
    pub date: NaiveDate,
    pub angle_deg: f64,
    pub rasi: u32,
}

/// A manifest file held in memory for the duration of a run.
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    pub file_name: String,
    pub path: PathBuf,
    pub content: serde_json::Value,
    pub sha256: String,
}

impl ManifestDocument {
    /// Declared body name, trimmed. `None` when `planet` is absent or not a string.
    pub fn declared_body(&self) -> Option<&str> {
        self.content
            .get("planet")
            .and_then(|p| p.as_str())
            .map(str::trim)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ManifestSelection<'a> {
    pub document: &'a ManifestDocument,
    /// Set when the second node is served from the first node's manifest.
    pub node_fallback: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    pub fn from_pass(pass: bool) -> Self {
        if pass {
            Status::Pass
        } else {
            Status::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyOutcome {
    pub body: String,
    pub rows: usize,
    pub mismatches: usize,
    pub max_abs_err_deg: f64,
    pub manifest: Option<String>,
    pub manifest_sha256: Option<String>,
    pub node_fallback: bool,
    /// Why the body could not be evaluated at all.
    pub error: Option<String>,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeIdentityOutcome {
    pub shared_dates: usize,
    pub max_deviation_deg: f64,
    pub violations: usize,
    pub status: Status,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub golden: String,
    pub manifests: String,
    pub tolerance_deg: f64,
    pub bodies: Vec<BodyOutcome>,
    pub nodes: Option<NodeIdentityOutcome>,
    pub result: Status,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        self.result == Status::Pass
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PointEvaluation {
    pub body: String,
    pub manifest: String,
    pub node_fallback: bool,
    pub date: NaiveDate,
    pub days_since_epoch: i64,
    pub angle_deg: f64,
    pub rasi: u32,
}
