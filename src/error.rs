//! Error taxonomy and process exit codes.
//!
//! Exit codes:
//! - 0: every check passed
//! - 1: validation failure (mismatch, missing/broken manifest, node identity)
//! - 2: structural or IO error, run aborted

use std::path::PathBuf;
use std::process::ExitCode;

/// Fatal input problems. These abort the whole run.
#[derive(thiserror::Error, Debug)]
pub enum StructuralError {
    #[error("golden CSV not found: {}", .0.display())]
    GoldenNotFound(PathBuf),
    #[error("manifests folder not found: {}", .0.display())]
    ManifestDirNotFound(PathBuf),
    #[error("golden missing columns: {} (headers: {})", missing.join(", "), headers.join(", "))]
    MissingColumns {
        missing: Vec<String>,
        headers: Vec<String>,
    },
    #[error("golden row {line}: invalid {column} value {value:?}")]
    InvalidGoldenValue {
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("failed to read golden CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A manifest that was found but cannot be normalized into a model.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ManifestError {
    #[error("manifest is not a JSON object")]
    NotAnObject,
    #[error("cannot determine n_deg_per_day")]
    RateUndeterminable,
    #[error("missing t0/t0_ISO")]
    MissingEpoch,
    #[error("invalid epoch date {0:?}")]
    InvalidEpoch(String),
    #[error("missing field {0}")]
    MissingField(String),
    #[error("field {field} is not numeric: {value}")]
    InvalidNumber { field: String, value: String },
    #[error("{list}[{index}] is not an object")]
    MalformedTerm { list: &'static str, index: usize },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("manifest not found")]
    ManifestNotFound(String),
}

/// Per-body failures. Recorded in the report, never fatal.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("load error: {0}")]
    Configuration(#[from] ManifestError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    Pass = 0,
    ValidationFailure = 1,
    Structural = 2,
}

impl CliExitCode {
    pub fn from_pass(pass: bool) -> Self {
        if pass {
            CliExitCode::Pass
        } else {
            CliExitCode::ValidationFailure
        }
    }
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

