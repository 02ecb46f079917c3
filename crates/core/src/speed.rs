//! Drop-speed function.
//!
//! Pure mapping from (score, soft-drop flag) to the fall interval. Stateless,
//! safe to call every tick.

use blockdrop_types::{BASE_INTERVAL_MS, MIN_INTERVAL_MS, SOFT_DROP_INTERVAL_MS};

/// Fall interval in milliseconds.
///
/// Soft drop is a fixed fast constant. Otherwise the base interval shrinks
/// by 0.5% for every 10 points of score, with a hard floor, so the function
/// is monotonically non-increasing in score.
pub fn interval_ms(score: u32, soft_drop: bool) -> u32 {
    if soft_drop {
        return SOFT_DROP_INTERVAL_MS;
    }
    let steps = (score / 10) as i32;
    let base = f64::from(BASE_INTERVAL_MS) * 0.995f64.powi(steps);
    (base.round() as u32).max(MIN_INTERVAL_MS)
}
