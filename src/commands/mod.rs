//! Command handler layer.
//!
//! ## Files
//! - `check.rs`: full golden validation run.
//! - `inspect.rs`: `show` (normalized model) and `eval` (single date).
//!
//! ## Principles
//! - Handlers return the exit code; only structural problems become errors.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod check;
pub mod inspect;

pub use check::handle_check;
pub use inspect::{handle_eval, handle_show};
