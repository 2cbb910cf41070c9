use crate::domain::models::{CanonicalModel, EvaluationRecord};
use crate::services::angles::wrap360;
use crate::services::calendar::days_since;
use crate::services::rasi::rasi_from_deg;
use chrono::NaiveDate;

/// Longitude of the model at `date`, wrapped to [0, 360).
pub fn evaluate(model: &CanonicalModel, date: NaiveDate) -> f64 {
    let t = days_since(date, model.epoch) as f64;
    let mut y = model.a0_deg + model.rate_deg_per_day * t;
    for term in &model.terms {
        let phase = term.omega_rad_per_day * t;
        y += term.sin_coeff * phase.sin() + term.cos_coeff * phase.cos();
    }
    wrap360(y)
}

/// Evaluates and classifies, optionally shifting by a fixed offset first.
pub fn evaluate_record(model: &CanonicalModel, date: NaiveDate, offset_deg: f64) -> EvaluationRecord {
    let mut angle_deg = evaluate(model, date);
    if offset_deg != 0.0 {
        angle_deg = wrap360(angle_deg + offset_deg);
    }
    EvaluationRecord {
        body: model.body.clone(),
        date,
        angle_deg,
        rasi: rasi_from_deg(angle_deg),
    }
}
