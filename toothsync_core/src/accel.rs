//! Angular-acceleration estimation from two adjacent inter-tooth intervals.

use std::f32::consts::TAU;

/// Outcome of an acceleration estimate.
///
/// Degenerate intervals are tagged rather than encoded as extreme float
/// sentinels, so plausibility checks compare structure instead of
/// magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accel {
    /// Zero previous interval: no deceleration can be inferred from it, so
    /// the estimate is treated as negligibly small and always plausible.
    Negligible,
    /// Zero current interval: the interval is unmeasurable and never
    /// plausible.
    Unmeasurable,
    /// A measured estimate in rad/s².
    Value(f32),
}

impl Accel {
    /// Whether the estimate falls within the configured plausibility bound.
    #[inline]
    pub fn is_plausible(self, max_accel: f32) -> bool {
        match self {
            Accel::Negligible => true,
            Accel::Unmeasurable => false,
            Accel::Value(a) => a.abs() <= max_accel,
        }
    }

    /// Finite numeric view for reporting. The degenerate tags map to the
    /// smallest and largest finite magnitudes so that orderings against
    /// any real bound still hold; never NaN or infinite.
    #[inline]
    pub fn rad_s2(self) -> f32 {
        match self {
            Accel::Negligible => f32::MIN_POSITIVE,
            Accel::Unmeasurable => f32::MAX,
            Accel::Value(a) => a,
        }
    }
}

/// Discrete second derivative of angular position over two adjacent
/// inter-tooth intervals.
///
/// `d0` position units were crossed in `t0` ticks, then `d1` units in `t1`
/// ticks. Distances are fractions of a revolution (`d / total_positions`)
/// and ticks convert to seconds via `tick_hz`, which gives
///
/// ```text
/// a = 2π·f² · ( d1 / (P·t1²) − d0 / (P·t1·t0) )
/// ```
pub fn calc_accel(
    tick_hz: u32,
    total_positions: u32,
    t0_ticks: u32,
    t0_teeth: u16,
    t1_ticks: u32,
    t1_teeth: u16,
) -> Accel {
    if t0_ticks == 0 {
        return Accel::Negligible;
    }
    if t1_ticks == 0 {
        return Accel::Unmeasurable;
    }

    let posns = total_positions as f32;
    let t0 = t0_ticks as f32;
    let t1 = t1_ticks as f32;
    let unit = TAU * (tick_hz as f32) * (tick_hz as f32);

    let curr = f32::from(t1_teeth) / (posns * t1 * t1);
    let prev = f32::from(t0_teeth) / (posns * t1 * t0);
    Accel::Value(unit * (curr - prev))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_speed_is_zero_accel() {
        // Gap of 2 in 200 ticks followed by gap of 1 in 100 ticks: same
        // angular velocity on both sides.
        let a = calc_accel(20_000, 4, 200, 2, 100, 1);
        match a {
            Accel::Value(v) => assert!(v.abs() < 1e-3, "got {v}"),
            other => panic!("expected a measured value, got {other:?}"),
        }
    }

    #[test]
    fn speedup_is_positive() {
        let a = calc_accel(20_000, 4, 100, 1, 100, 2);
        match a {
            Accel::Value(v) => {
                // 2π·f² · (2 − 1) / (4·100²) = 2π·10⁴
                let expected = core::f32::consts::TAU * 1e4;
                assert!((v - expected).abs() / expected < 1e-4, "got {v}");
            }
            other => panic!("expected a measured value, got {other:?}"),
        }
    }

    #[test]
    fn degenerate_intervals_are_tagged() {
        assert_eq!(calc_accel(20_000, 4, 0, 2, 100, 1), Accel::Negligible);
        assert_eq!(calc_accel(20_000, 4, 100, 2, 0, 1), Accel::Unmeasurable);
        // t0 wins when both are zero, matching the check order.
        assert_eq!(calc_accel(20_000, 4, 0, 2, 0, 1), Accel::Negligible);
    }

    #[test]
    fn numeric_view_is_finite_and_ordered() {
        let max_accel = 3_000.0_f32;
        assert!(Accel::Negligible.rad_s2() <= max_accel);
        assert!(Accel::Unmeasurable.rad_s2() > max_accel);
        assert!(Accel::Negligible.rad_s2().is_finite());
        assert!(Accel::Unmeasurable.rad_s2().is_finite());
    }
}
