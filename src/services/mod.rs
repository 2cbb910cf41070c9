//! Service layer containing the validation engine and its I/O helpers.
//!
//! ## Service map
//! - `normalizer.rs`: manifest layouts → `CanonicalModel`.
//! - `selector.rs`: in-memory manifest catalog and body lookup with node fallback.
//! - `evaluator.rs`: harmonic model evaluation at a date.
//! - `rasi.rs`: 30° sector classification with boundary tie-break.
//! - `comparator.rs`: per-row and per-body golden comparison.
//! - `node_identity.rs`: opposition check for the two lunar nodes.
//! - `report.rs`: run-owned aggregation and final status.
//! - `validation.rs`: end-to-end pass wiring the above together.
//! - `storage.rs`: golden CSV and manifest directory loading.
//! - `angles.rs`, `calendar.rs`: wrap and date arithmetic.
//! - `output.rs`: JSON/text output helpers.
//!
//! ## Conventions
//! - Evaluation code is pure; all file access lives in `storage.rs`.
//! - Keep command handlers thin; delegate to services.

pub mod angles;
pub mod calendar;
pub mod comparator;
pub mod evaluator;
pub mod node_identity;
pub mod normalizer;
pub mod output;
pub mod rasi;
pub mod report;
pub mod selector;
pub mod storage;
pub mod validation;
