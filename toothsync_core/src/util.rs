//! Small unit-conversion helpers shared by the detector and its callers.

use std::f32::consts::TAU;

/// Seconds covered by `ticks` increments of a `tick_hz` timer.
#[inline]
pub fn ticks_to_secs(ticks: u32, tick_hz: u32) -> f32 {
    ticks as f32 / tick_hz.max(1) as f32
}

/// Angular width of a gap of `gap` position units on a wheel with
/// `total_positions` positions per revolution, in radians.
#[inline]
pub fn gap_radians(gap: u16, total_positions: u32) -> f32 {
    TAU * f32::from(gap) / total_positions.max(1) as f32
}

/// Convert angular velocity from rad/s to revolutions per minute.
#[inline]
pub fn rad_s_to_rpm(rad_s: f32) -> f32 {
    rad_s * 60.0 / TAU
}
