use crate::domain::constants::{
    GOLDEN_ANGLE_COLUMN, GOLDEN_BODY_COLUMN, GOLDEN_DATE_COLUMN, GOLDEN_RASI_COLUMN,
    GOLDEN_REQUIRED_COLUMNS, MANIFEST_EXTENSION,
};
use crate::domain::models::{GoldenRow, ManifestDocument};
use crate::error::StructuralError;
use crate::services::calendar::parse_iso_date;
use crate::services::selector::ManifestCatalog;
use anyhow::Context;
use csv::ReaderBuilder;
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::{debug, warn};

pub fn load_golden(path: &Path) -> Result<Vec<GoldenRow>, StructuralError> {
    if !path.is_file() {
        return Err(StructuralError::GoldenNotFound(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path)?;
    let rows = parse_golden(&raw)?;
    debug!(path = %path.display(), rows = rows.len(), "loaded golden rows");
    Ok(rows)
}

/// Parses golden CSV text. Extra columns are ignored; a leading BOM is dropped.
pub fn parse_golden(raw: &str) -> Result<Vec<GoldenRow>, StructuralError> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(raw.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let missing: Vec<String> = GOLDEN_REQUIRED_COLUMNS
        .iter()
        .filter(|c| !headers.iter().any(|h| h.as_str() == **c))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(StructuralError::MissingColumns { missing, headers });
    }
    let column = |name: &str| headers.iter().position(|h| h == name).unwrap_or_default();
    let body_idx = column(GOLDEN_BODY_COLUMN);
    let date_idx = column(GOLDEN_DATE_COLUMN);
    let angle_idx = column(GOLDEN_ANGLE_COLUMN);
    let rasi_idx = column(GOLDEN_RASI_COLUMN);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let field = |idx: usize| record.get(idx).unwrap_or_default().trim();
        let invalid = |column: &'static str, value: &str| StructuralError::InvalidGoldenValue {
            line,
            column,
            value: value.to_string(),
        };

        let date_raw = field(date_idx);
        let angle_raw = field(angle_idx);
        let rasi_raw = field(rasi_idx);
        rows.push(GoldenRow {
            body: field(body_idx).to_string(),
            date: parse_iso_date(date_raw).ok_or_else(|| invalid(GOLDEN_DATE_COLUMN, date_raw))?,
            angle_deg: angle_raw
                .parse::<f64>()
                .map_err(|_| invalid(GOLDEN_ANGLE_COLUMN, angle_raw))?,
            rasi: rasi_raw
                .parse::<i64>()
                .map_err(|_| invalid(GOLDEN_RASI_COLUMN, rasi_raw))?,
        });
    }
    Ok(rows)
}

/// Loads every `*.json` file in `dir`. Files that cannot be read or parsed
/// are skipped with a warning; they can never be selected.
pub fn load_manifest_catalog(dir: &Path) -> Result<ManifestCatalog, StructuralError> {
    if !dir.is_dir() {
        return Err(StructuralError::ManifestDirNotFound(dir.to_path_buf()));
    }
    let mut documents = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_manifest = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(MANIFEST_EXTENSION))
            .unwrap_or(false);
        if !is_manifest || !path.is_file() {
            continue;
        }
        match load_manifest(&path) {
            Ok(doc) => documents.push(doc),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable manifest"),
        }
    }
    let catalog = ManifestCatalog::new(documents);
    debug!(dir = %dir.display(), manifests = catalog.len(), "loaded manifest catalog");
    Ok(catalog)
}

pub fn load_manifest(path: &Path) -> anyhow::Result<ManifestDocument> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let content: serde_json::Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("invalid manifest JSON in {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    Ok(ManifestDocument {
        file_name,
        path: path.to_path_buf(),
        content,
        sha256: sha256_hex(&bytes),
    })
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
