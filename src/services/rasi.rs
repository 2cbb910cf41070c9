use crate::domain::constants::{RASI_COUNT, RASI_TIE_EPSILON_DEG, RASI_WIDTH_DEG};
use crate::services::angles::{emod, wrap360};

/// Sector index 0-11 for an angle in degrees.
///
/// Angles within `RASI_TIE_EPSILON_DEG` of a 30° multiple belong to the sector
/// that starts there, so 30.0 is sector 1 and 360.0 is sector 0. Golden data
/// depends on this exact rule.
pub fn rasi_from_deg(angle_deg: f64) -> u32 {
    let wrapped = wrap360(angle_deg);
    let k = (wrapped / RASI_WIDTH_DEG).round();
    if (wrapped - RASI_WIDTH_DEG * k).abs() <= RASI_TIE_EPSILON_DEG {
        return (k as u32) % RASI_COUNT;
    }
    let sector = (emod(wrapped, 360.0) / RASI_WIDTH_DEG).floor() as u32;
    sector.min(RASI_COUNT - 1)
}
