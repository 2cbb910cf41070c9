//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs`: canonical model, golden rows, per-body and run reports.
//! - `constants.rs`: tolerances, node names, golden columns, omega suffix table.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `RunReport` and friends are the `--json` output. Schema-impacting changes
//! must stay in sync with `docs/contracts/report.schema.json`.

pub mod constants;
pub mod models;
