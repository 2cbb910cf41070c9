use crate::domain::constants::{FIRST_NODE, NODE_IDENTITY_TOLERANCE_DEG, SECOND_NODE};
use crate::domain::models::{EvaluationRecord, NodeIdentityOutcome, Status};
use crate::services::angles::wrap360;
use crate::services::selector::same_body;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Collects node evaluations by date and checks they stay in exact opposition.
#[derive(Debug, Default)]
pub struct NodeIdentityChecker {
    first: BTreeMap<NaiveDate, f64>,
    second: BTreeMap<NaiveDate, f64>,
}

impl NodeIdentityChecker {
    /// Records an evaluation if it belongs to one of the nodes. A repeated
    /// date overwrites the earlier value.
    pub fn observe(&mut self, record: &EvaluationRecord) {
        if same_body(&record.body, FIRST_NODE) {
            self.first.insert(record.date, record.angle_deg);
        } else if same_body(&record.body, SECOND_NODE) {
            self.second.insert(record.date, record.angle_deg);
        }
    }

    /// `None` when the nodes share no dates.
    pub fn outcome(&self) -> Option<NodeIdentityOutcome> {
        let mut shared_dates = 0usize;
        let mut max_deviation_deg = 0.0f64;
        let mut violations = 0usize;
        for (date, first) in &self.first {
            let Some(second) = self.second.get(date) else {
                continue;
            };
            shared_dates += 1;
            let dev = opposition_deviation(*first, *second);
            if dev > max_deviation_deg {
                max_deviation_deg = dev;
            }
            if dev > NODE_IDENTITY_TOLERANCE_DEG {
                violations += 1;
            }
        }
        if shared_dates == 0 {
            return None;
        }
        Some(NodeIdentityOutcome {
            shared_dates,
            max_deviation_deg,
            violations,
            status: Status::from_pass(violations == 0),
        })
    }
}

/// `|wrap360(second - first) - 180|`
pub fn opposition_deviation(first_deg: f64, second_deg: f64) -> f64 {
    (wrap360(second_deg - first_deg) - 180.0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CanonicalModel;
    use crate::domain::models::HarmonicTerm;
    use crate::services::evaluator::evaluate_record;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rec(body: &str, date: NaiveDate, angle: f64) -> EvaluationRecord {
        EvaluationRecord {
            body: body.to_string(),
            date,
            angle_deg: angle,
            rasi: 0,
        }
    }

    #[test]
    fn no_shared_dates_is_not_applicable() {
        let mut checker = NodeIdentityChecker::default();
        checker.observe(&rec("Rahu", ymd(2024, 1, 1), 10.0));
        checker.observe(&rec("Ketu", ymd(2024, 1, 2), 190.0));
        assert!(checker.outcome().is_none());
    }

    #[test]
    fn opposition_across_zero_passes() {
        let mut checker = NodeIdentityChecker::default();
        checker.observe(&rec("rahu", ymd(2024, 1, 1), 350.0));
        checker.observe(&rec("KETU", ymd(2024, 1, 1), 170.0));
        let out = checker.outcome().unwrap();
        assert_eq!(out.shared_dates, 1);
        assert_eq!(out.violations, 0);
        assert_eq!(out.status, Status::Pass);
    }

    #[test]
    fn deviation_beyond_threshold_fails() {
        let mut checker = NodeIdentityChecker::default();
        checker.observe(&rec("Rahu", ymd(2024, 1, 1), 10.0));
        checker.observe(&rec("Ketu", ymd(2024, 1, 1), 190.0));
        checker.observe(&rec("Rahu", ymd(2024, 1, 2), 10.0));
        checker.observe(&rec("Ketu", ymd(2024, 1, 2), 190.00001));
        let out = checker.outcome().unwrap();
        assert_eq!(out.shared_dates, 2);
        assert_eq!(out.violations, 1);
        assert!(out.max_deviation_deg > 9e-6);
        assert_eq!(out.status, Status::Fail);
    }

    #[test]
    fn other_bodies_are_ignored() {
        let mut checker = NodeIdentityChecker::default();
        checker.observe(&rec("Sun", ymd(2024, 1, 1), 10.0));
        checker.observe(&rec("Moon", ymd(2024, 1, 1), 10.0));
        assert!(checker.outcome().is_none());
    }

    #[test]
    fn shifted_model_has_zero_deviation() {
        let first = CanonicalModel {
            body: "Rahu".to_string(),
            epoch: ymd(2024, 1, 1),
            a0_deg: 123.4,
            rate_deg_per_day: -0.0529539,
            terms: vec![HarmonicTerm {
                omega_rad_per_day: 0.017,
                sin_coeff: 1.5,
                cos_coeff: -0.3,
            }],
        };
        let second = CanonicalModel {
            body: "Ketu".to_string(),
            a0_deg: first.a0_deg + 180.0,
            ..first.clone()
        };
        let mut checker = NodeIdentityChecker::default();
        for day in 0..400 {
            let date = ymd(2024, 1, 1) + chrono::Duration::days(day - 200);
            checker.observe(&evaluate_record(&first, date, 0.0));
            checker.observe(&evaluate_record(&second, date, 0.0));
        }
        let out = checker.outcome().unwrap();
        assert_eq!(out.shared_dates, 400);
        assert!(out.max_deviation_deg < 1e-9);
        assert_eq!(out.status, Status::Pass);
    }
}
