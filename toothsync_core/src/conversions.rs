//! `From` implementations bridging `toothsync_config` types to core types.
//!
//! These keep the CLI free of field-by-field mapping.

use crate::belief::NormalizationMode;
use crate::detector::DetectorCfg;

// ── NormalizationMode ────────────────────────────────────────────────────────

impl From<toothsync_config::NormalizationMode> for NormalizationMode {
    fn from(m: toothsync_config::NormalizationMode) -> Self {
        match m {
            toothsync_config::NormalizationMode::Linear => Self::Linear,
            toothsync_config::NormalizationMode::Softmax => Self::Softmax,
        }
    }
}

// ── DetectorCfg ──────────────────────────────────────────────────────────────

impl From<&toothsync_config::Config> for DetectorCfg {
    fn from(c: &toothsync_config::Config) -> Self {
        Self {
            tick_hz: c.timing.tick_hz,
            max_accel: c.detection.max_accel_rad_s2,
            error_rate: c.detection.error_rate,
            normalization: c.detection.normalization.into(),
        }
    }
}
