use chrono::NaiveDate;

/// Parses `Y-M-D` with integer fields, so `2024-1-5` is accepted.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.trim().split('-');
    let y = parts.next()?.trim().parse::<i32>().ok()?;
    let m = parts.next()?.trim().parse::<u32>().ok()?;
    let d = parts.next()?.trim().parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(y, m, d)
}

/// Whole days from `epoch` to `date`; negative before the epoch.
pub fn days_since(date: NaiveDate, epoch: NaiveDate) -> i64 {
    date.signed_duration_since(epoch).num_days()
}
