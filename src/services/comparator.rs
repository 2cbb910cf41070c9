use crate::domain::constants::NODE_FALLBACK_OFFSET_DEG;
use crate::domain::models::{CanonicalModel, EvaluationRecord, GoldenRow};
use crate::services::angles::angular_distance;
use crate::services::evaluator::evaluate_record;

#[derive(Debug, Clone, PartialEq)]
pub struct RowCheck {
    pub record: EvaluationRecord,
    pub abs_err_deg: f64,
    pub angle_ok: bool,
    pub rasi_ok: bool,
}

impl RowCheck {
    pub fn is_mismatch(&self) -> bool {
        !(self.angle_ok && self.rasi_ok)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyComparison {
    pub rows: usize,
    pub mismatches: usize,
    pub max_abs_err_deg: f64,
    pub records: Vec<EvaluationRecord>,
}

impl BodyComparison {
    pub fn passed(&self) -> bool {
        self.mismatches == 0
    }
}

/// Angle and sector are checked independently; either failing is a mismatch.
pub fn compare_row(
    model: &CanonicalModel,
    row: &GoldenRow,
    node_fallback: bool,
    tolerance_deg: f64,
) -> RowCheck {
    let offset = if node_fallback {
        NODE_FALLBACK_OFFSET_DEG
    } else {
        0.0
    };
    let mut record = evaluate_record(model, row.date, offset);
    record.body = row.body.clone();
    let abs_err_deg = angular_distance(record.angle_deg, row.angle_deg);
    RowCheck {
        angle_ok: abs_err_deg <= tolerance_deg,
        rasi_ok: i64::from(record.rasi) == row.rasi,
        abs_err_deg,
        record,
    }
}

pub fn compare_body(
    model: &CanonicalModel,
    rows: &[GoldenRow],
    node_fallback: bool,
    tolerance_deg: f64,
) -> BodyComparison {
    let mut out = BodyComparison::default();
    for row in rows {
        let check = compare_row(model, row, node_fallback, tolerance_deg);
        out.rows += 1;
        if check.abs_err_deg > out.max_abs_err_deg {
            out.max_abs_err_deg = check.abs_err_deg;
        }
        if check.is_mismatch() {
            out.mismatches += 1;
        }
        out.records.push(check.record);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn model(a0: f64, n: f64) -> CanonicalModel {
        CanonicalModel {
            body: "Rahu".to_string(),
            epoch: ymd(2024, 1, 1),
            a0_deg: a0,
            rate_deg_per_day: n,
            terms: vec![],
        }
    }

    fn row(body: &str, date: NaiveDate, angle: f64, rasi: i64) -> GoldenRow {
        GoldenRow {
            body: body.to_string(),
            date,
            angle_deg: angle,
            rasi,
        }
    }

    #[test]
    fn exact_match_at_epoch() {
        let check = compare_row(&model(15.0, 0.0), &row("Rahu", ymd(2024, 1, 1), 15.0, 0), false, 1e-5);
        assert_eq!(check.record.angle_deg, 15.0);
        assert_eq!(check.record.rasi, 0);
        assert!(!check.is_mismatch());
    }

    #[test]
    fn drift_within_tolerance() {
        let check = compare_row(
            &model(15.0, -0.05),
            &row("Rahu", ymd(2024, 1, 31), 13.5, 0),
            false,
            1e-5,
        );
        assert!((check.record.angle_deg - 13.5).abs() < 1e-12);
        assert!(!check.is_mismatch());
    }

    #[test]
    fn wrong_sector_with_exact_angle_is_a_mismatch() {
        let check = compare_row(&model(15.0, 0.0), &row("Rahu", ymd(2024, 1, 1), 15.0, 1), false, 1e-5);
        assert!(check.angle_ok);
        assert!(!check.rasi_ok);
        assert!(check.is_mismatch());
    }

    #[test]
    fn angle_error_across_zero_is_short_arc() {
        let check = compare_row(&model(359.99, 0.0), &row("Sun", ymd(2024, 1, 1), 0.01, 11), false, 1e-5);
        assert!((check.abs_err_deg - 0.02).abs() < 1e-9);
        assert!(!check.angle_ok);
        assert!(check.rasi_ok);
    }

    #[test]
    fn fallback_shifts_by_half_turn_and_keeps_golden_body() {
        let check = compare_row(&model(15.0, 0.0), &row("Ketu", ymd(2024, 1, 1), 195.0, 6), true, 1e-5);
        assert_eq!(check.record.body, "Ketu");
        assert_eq!(check.record.angle_deg, 195.0);
        assert!(!check.is_mismatch());
    }

    #[test]
    fn body_totals() {
        let rows = vec![
            row("Rahu", ymd(2024, 1, 1), 15.0, 0),
            row("Rahu", ymd(2024, 1, 2), 15.5, 0),
            row("Rahu", ymd(2024, 1, 3), 15.0, 3),
        ];
        let cmp = compare_body(&model(15.0, 0.0), &rows, false, 1e-5);
        assert_eq!(cmp.rows, 3);
        assert_eq!(cmp.mismatches, 2);
        assert!((cmp.max_abs_err_deg - 0.5).abs() < 1e-12);
        assert_eq!(cmp.records.len(), 3);
        assert!(!cmp.passed());
    }
}
