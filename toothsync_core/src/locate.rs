//! The localization ("locate") step.
//!
//! Every hypothesis is re-evaluated against the same interval pair: if the
//! wheel were at tooth `i` now, the previous interval covered
//! `gap_before(i)` positions and the current one covered `gap(i)`. A
//! hypothesis whose implied acceleration is plausible is rewarded, the
//! rest are penalized, then the distribution is renormalized.

use crate::accel::calc_accel;
use crate::belief::{Belief, NormalizationMode};
use crate::geometry::ToothMap;

#[allow(clippy::too_many_arguments)]
pub fn locate(
    belief: &mut Belief,
    map: &ToothMap,
    max_accel: f32,
    interval_ticks: u32,
    prev_interval_ticks: u32,
    tick_hz: u32,
    error_rate: f32,
    mode: NormalizationMode,
) {
    let total = map.total_positions();
    let values = belief.values_mut();
    for (i, v) in values.iter_mut().enumerate() {
        let accel = calc_accel(
            tick_hz,
            total,
            prev_interval_ticks,
            map.gap_before(i),
            interval_ticks,
            map.gap(i),
        );
        *v *= if accel.is_plausible(max_accel) {
            1.0 - error_rate
        } else {
            error_rate
        };
    }
    belief.normalize(mode);
}
