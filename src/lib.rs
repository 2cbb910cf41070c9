//! Golden-dataset validation for harmonic longitude manifests.
//!
//! ## Layers
//! - `domain/`: data-only types and constants.
//! - `services/`: normalization, evaluation, comparison, aggregation, I/O.
//! - `commands/`: CLI handlers returning an exit code.

pub mod cli;
pub mod commands;
pub mod domain;
pub mod error;
pub mod services;

pub use domain::models::{CanonicalModel, GoldenRow, HarmonicTerm, RunReport, Status};
pub use error::{BodyError, CliExitCode, LookupError, ManifestError, StructuralError};
