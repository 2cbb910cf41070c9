//! Stable constants shared by the validation engine.

/// Default angular tolerance for golden comparisons, in degrees.
pub const DEFAULT_TOLERANCE_DEG: f64 = 1e-5;

/// Maximum allowed deviation of the node pair from exact opposition, in degrees.
pub const NODE_IDENTITY_TOLERANCE_DEG: f64 = 1e-6;

/// Distance from a 30° multiple at which an angle counts as sitting on the boundary.
pub const RASI_TIE_EPSILON_DEG: f64 = 5e-12;

pub const RASI_WIDTH_DEG: f64 = 30.0;
pub const RASI_COUNT: u32 = 12;

/// First lunar node. Its manifest doubles as the source for the second node.
pub const FIRST_NODE: &str = "Rahu";
pub const SECOND_NODE: &str = "Ketu";

/// Offset applied when the second node is evaluated from the first node's manifest.
pub const NODE_FALLBACK_OFFSET_DEG: f64 = 180.0;

pub const MANIFEST_EXTENSION: &str = "json";

/// Golden CSV columns, in the order they are reported when missing.
pub const GOLDEN_BODY_COLUMN: &str = "planet";
pub const GOLDEN_DATE_COLUMN: &str = "date";
pub const GOLDEN_ANGLE_COLUMN: &str = "L_hat_deg";
pub const GOLDEN_RASI_COLUMN: &str = "rasi";
pub const GOLDEN_REQUIRED_COLUMNS: [&str; 4] = [
    GOLDEN_BODY_COLUMN,
    GOLDEN_DATE_COLUMN,
    GOLDEN_ANGLE_COLUMN,
    GOLDEN_RASI_COLUMN,
];

/// Coefficient suffix paired with the frequency key in the `omegas` table.
///
/// Order is primary, secondary, tertiary, solar, elongation, apsidal, draconic.
pub const OMEGA_SUFFIXES: [(&str, &str); 7] = [
    ("1", "w1"),
    ("2", "w2"),
    ("3", "w3"),
    ("S", "wS"),
    ("E", "nE"),
    ("A", "wA"),
    ("D", "wD"),
];
