//! Manifest normalization.
//!
//! Manifests in the wild carry the same harmonic model in several layouts.
//! Every layout-specific key lives in this file; the rest of the crate only
//! sees [`CanonicalModel`].
//!
//! Field resolution, first match wins:
//! - `a0`: `beta.a0_deg`, `beta.a0`, `a0_deg`, else 0.
//! - `n`: `beta.b1_deg_per_day`, `n_deg_per_day`, `360 / P_sid_days`.
//! - epoch: `t0`, else the date part of `t0_ISO`.
//! - terms: see [`HarmonicEncoding`].

use crate::domain::constants::OMEGA_SUFFIXES;
use crate::domain::models::{CanonicalModel, HarmonicTerm};
use crate::error::ManifestError;
use crate::services::calendar::parse_iso_date;
use serde_json::{Map, Value};

type Object = Map<String, Value>;

/// Recognized term layouts, in the priority they are tried.
#[derive(Debug, Clone, Copy)]
pub enum HarmonicEncoding<'a> {
    /// `terms: [{w_rad_per_day, c_sin, d_cos}]`, all fields required.
    TermList(&'a [Value]),
    /// `omegas: {w1, w2, ...}` paired with `beta: {c1, d1, ...}`.
    OmegaTables {
        omegas: &'a Object,
        beta: Option<&'a Object>,
    },
    /// `harmonics: [...]` with missing fields read as 0.
    HarmonicsList(&'a [Value]),
    Absent,
}

impl<'a> HarmonicEncoding<'a> {
    pub fn detect(doc: &'a Object) -> Self {
        if let Some(list) = non_empty_array(doc, "terms") {
            return HarmonicEncoding::TermList(list);
        }
        if let Some(omegas) = doc.get("omegas").and_then(Value::as_object) {
            if !omegas.is_empty() {
                return HarmonicEncoding::OmegaTables {
                    omegas,
                    beta: beta(doc),
                };
            }
        }
        if let Some(list) = non_empty_array(doc, "harmonics") {
            return HarmonicEncoding::HarmonicsList(list);
        }
        HarmonicEncoding::Absent
    }

    pub fn name(&self) -> &'static str {
        match self {
            HarmonicEncoding::TermList(_) => "terms",
            HarmonicEncoding::OmegaTables { .. } => "omegas",
            HarmonicEncoding::HarmonicsList(_) => "harmonics",
            HarmonicEncoding::Absent => "none",
        }
    }

    pub fn terms(&self) -> Result<Vec<HarmonicTerm>, ManifestError> {
        match *self {
            HarmonicEncoding::TermList(list) => list
                .iter()
                .enumerate()
                .map(|(index, raw)| {
                    let term = term_object(raw, "terms", index)?;
                    Ok(HarmonicTerm {
                        omega_rad_per_day: required(term, "w_rad_per_day")?,
                        sin_coeff: required(term, "c_sin")?,
                        cos_coeff: required(term, "d_cos")?,
                    })
                })
                .collect(),
            HarmonicEncoding::OmegaTables { omegas, beta } => {
                let Some(beta) = beta else {
                    return Ok(Vec::new());
                };
                let mut out = Vec::new();
                for (suffix, wkey) in OMEGA_SUFFIXES {
                    let c_key = format!("c{suffix}");
                    let d_key = format!("d{suffix}");
                    if !(omegas.contains_key(wkey)
                        && beta.contains_key(&c_key)
                        && beta.contains_key(&d_key))
                    {
                        continue;
                    }
                    out.push(HarmonicTerm {
                        omega_rad_per_day: required(omegas, wkey)?,
                        sin_coeff: required(beta, &c_key)?,
                        cos_coeff: required(beta, &d_key)?,
                    });
                }
                Ok(out)
            }
            HarmonicEncoding::HarmonicsList(list) => list
                .iter()
                .enumerate()
                .map(|(index, raw)| {
                    let term = term_object(raw, "harmonics", index)?;
                    Ok(HarmonicTerm {
                        omega_rad_per_day: optional(term, "w_rad_per_day")?.unwrap_or(0.0),
                        sin_coeff: optional(term, "c_sin")?.unwrap_or(0.0),
                        cos_coeff: optional(term, "d_cos")?.unwrap_or(0.0),
                    })
                })
                .collect(),
            HarmonicEncoding::Absent => Ok(Vec::new()),
        }
    }
}

pub fn normalize(raw: &Value) -> Result<CanonicalModel, ManifestError> {
    let doc = raw.as_object().ok_or(ManifestError::NotAnObject)?;
    let body = doc
        .get("planet")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    let a0_deg = base_angle(doc)?;
    let rate_deg_per_day = mean_rate(doc)?;
    let epoch = epoch(doc)?;
    let terms = HarmonicEncoding::detect(doc).terms()?;

    Ok(CanonicalModel {
        body,
        epoch,
        a0_deg,
        rate_deg_per_day,
        terms,
    })
}

fn base_angle(doc: &Object) -> Result<f64, ManifestError> {
    if let Some(b) = beta(doc) {
        if let Some(v) = optional(b, "a0_deg")? {
            return Ok(v);
        }
        if let Some(v) = optional(b, "a0")? {
            return Ok(v);
        }
    }
    Ok(optional(doc, "a0_deg")?.unwrap_or(0.0))
}

fn mean_rate(doc: &Object) -> Result<f64, ManifestError> {
    if let Some(b) = beta(doc) {
        if b.contains_key("b1_deg_per_day") {
            return required(b, "b1_deg_per_day");
        }
    }
    if doc.contains_key("n_deg_per_day") {
        return required(doc, "n_deg_per_day");
    }
    match optional(doc, "P_sid_days")? {
        Some(period) if period != 0.0 => Ok(360.0 / period),
        _ => Err(ManifestError::RateUndeterminable),
    }
}

fn epoch(doc: &Object) -> Result<chrono::NaiveDate, ManifestError> {
    let raw = match doc.get("t0") {
        Some(Value::Null) | None => {
            let iso = doc
                .get("t0_ISO")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .ok_or(ManifestError::MissingEpoch)?;
            iso.split('T').next().unwrap_or(iso)
        }
        Some(v) => v
            .as_str()
            .ok_or_else(|| ManifestError::InvalidEpoch(v.to_string()))?,
    };
    parse_iso_date(raw).ok_or_else(|| ManifestError::InvalidEpoch(raw.to_string()))
}

fn beta(doc: &Object) -> Option<&Object> {
    doc.get("beta").and_then(Value::as_object)
}

fn non_empty_array<'a>(doc: &'a Object, key: &str) -> Option<&'a [Value]> {
    doc.get(key)
        .and_then(Value::as_array)
        .filter(|list| !list.is_empty())
        .map(Vec::as_slice)
}

fn term_object<'a>(
    raw: &'a Value,
    list: &'static str,
    index: usize,
) -> Result<&'a Object, ManifestError> {
    raw.as_object()
        .ok_or(ManifestError::MalformedTerm { list, index })
}

/// Numbers and numeric strings both count; `null` reads as absent.
fn optional(obj: &Object, key: &str) -> Result<Option<f64>, ManifestError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_f64().map(Some).ok_or_else(|| invalid(key, n)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| invalid(key, s)),
        Some(other) => Err(invalid(key, other)),
    }
}

fn required(obj: &Object, key: &str) -> Result<f64, ManifestError> {
    optional(obj, key)?.ok_or_else(|| ManifestError::MissingField(key.to_string()))
}

fn invalid(key: &str, value: impl ToString) -> ManifestError {
    ManifestError::InvalidNumber {
        field: key.to_string(),
        value: value.to_string(),
    }
}
