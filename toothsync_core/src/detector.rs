//! The detector: persistent belief plus scalar state, updated in place
//! once per tooth event.

use crate::accel::{Accel, calc_accel};
use crate::belief::{Belief, NormalizationMode};
use crate::error::{BuildError, Result};
use crate::geometry::ToothMap;
use crate::locate::locate;
use crate::sync::{SyncState, next_sync_state};

/// Static detector configuration, validated at build time.
#[derive(Debug, Clone)]
pub struct DetectorCfg {
    /// Capture timer frequency in Hz.
    pub tick_hz: u32,
    /// Acceleration magnitude (rad/s²) above which the engine cannot
    /// possibly accelerate; measurements beyond it are treated as sensor
    /// error.
    pub max_accel: f32,
    /// Sensor error probability in (0, 1). Empirically chosen, not adapted
    /// at runtime: a live estimate can decay low enough that sync is never
    /// regained.
    pub error_rate: f32,
    /// Posterior normalization scheme.
    pub normalization: NormalizationMode,
}

impl Default for DetectorCfg {
    fn default() -> Self {
        Self {
            tick_hz: 20_000,
            max_accel: 3_000.0,
            error_rate: 0.02,
            normalization: NormalizationMode::Linear,
        }
    }
}

/// Read-only view of the detector after an update, for polling consumers.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub tooth: usize,
    pub synced: bool,
    pub confidence: f32,
    pub velocity_rad_s: f32,
    pub accel_rad_s2: f32,
    pub events: u64,
}

/// Recursive Bayesian estimator of wheel position over tooth-gap
/// hypotheses.
///
/// One instance per sensor; owned by the caller and passed by exclusive
/// reference into each update. The caller serializes events: an update
/// runs to completion and must not be re-entered.
#[derive(Debug)]
pub struct Detector {
    map: ToothMap,
    cfg: DetectorCfg,
    belief: Belief,
    current_tooth: usize,
    sync: SyncState,
    confidence: f32,
    velocity: f32,
    last_accel: Accel,
    previous_ticks: u32,
    events: u64,
}

impl Detector {
    pub fn builder() -> DetectorBuilder {
        DetectorBuilder::default()
    }

    /// Process one tooth event. `interval_ticks` is the captured timer
    /// count for the interval since the previous event.
    pub fn on_tooth_event(&mut self, interval_ticks: u32) {
        let previous_tooth = self.current_tooth;

        self.belief.diffuse(self.cfg.error_rate);
        locate(
            &mut self.belief,
            &self.map,
            self.cfg.max_accel,
            interval_ticks,
            self.previous_ticks,
            self.cfg.tick_hz,
            self.cfg.error_rate,
            self.cfg.normalization,
        );

        match self.belief.find_max() {
            Some((confidence, tooth)) => {
                self.confidence = confidence;
                self.current_tooth = tooth;
            }
            None => {
                // Degenerate all-zero posterior: keep the previous tooth
                // estimate and report it as untrustworthy.
                self.confidence = 0.0;
                tracing::warn!(event = self.events, "posterior has no positive mass");
            }
        }

        self.last_accel = calc_accel(
            self.cfg.tick_hz,
            self.map.total_positions(),
            self.previous_ticks,
            self.map.gap(previous_tooth),
            interval_ticks,
            self.map.gap(self.current_tooth),
        );

        if interval_ticks > 0 {
            let gap_rads =
                crate::util::gap_radians(self.map.gap(self.current_tooth), self.map.total_positions());
            self.velocity = gap_rads / crate::util::ticks_to_secs(interval_ticks, self.cfg.tick_hz);
        }
        // interval_ticks == 0 keeps the previous velocity; the acceleration
        // tag already marks this event unmeasurable.

        let next = next_sync_state(
            self.sync,
            self.confidence,
            self.last_accel,
            self.cfg.max_accel,
        );
        if next != self.sync {
            tracing::debug!(
                from = ?self.sync,
                to = ?next,
                confidence = self.confidence,
                "sync state changed"
            );
        }
        self.sync = next;

        self.previous_ticks = interval_ticks;
        self.events += 1;

        tracing::trace!(
            event = self.events,
            interval_ticks,
            tooth = self.current_tooth,
            confidence = self.confidence,
            synced = self.sync.is_synced(),
            "tooth event processed"
        );
    }

    /// Ring index of the tooth-gap hypothesis with the highest belief.
    #[inline]
    pub fn current_tooth(&self) -> usize {
        self.current_tooth
    }

    /// Whether the estimate is currently trusted.
    #[inline]
    pub fn has_sync(&self) -> bool {
        self.sync.is_synced()
    }

    #[inline]
    pub fn sync_state(&self) -> SyncState {
        self.sync
    }

    /// Maximum value of the current belief distribution.
    #[inline]
    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    /// Angular velocity over the last measurable interval, rad/s.
    #[inline]
    pub fn velocity_rad_s(&self) -> f32 {
        self.velocity
    }

    /// Acceleration implied by the last event's tooth transition.
    #[inline]
    pub fn last_accel(&self) -> Accel {
        self.last_accel
    }

    /// Number of tooth events processed so far.
    #[inline]
    pub fn events(&self) -> u64 {
        self.events
    }

    #[inline]
    pub fn tooth_map(&self) -> &ToothMap {
        &self.map
    }

    #[inline]
    pub fn belief(&self) -> &Belief {
        &self.belief
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tooth: self.current_tooth,
            synced: self.sync.is_synced(),
            confidence: self.confidence,
            velocity_rad_s: self.velocity,
            accel_rad_s2: self.last_accel.rad_s2(),
            events: self.events,
        }
    }
}

/// Builder for `Detector`. All fields are validated on `build()`.
#[derive(Debug, Default)]
pub struct DetectorBuilder {
    map: Option<ToothMap>,
    cfg: DetectorCfg,
}

impl DetectorBuilder {
    pub fn with_tooth_map(mut self, map: ToothMap) -> Self {
        self.map = Some(map);
        self
    }

    /// Replace the whole configuration block.
    pub fn with_cfg(mut self, cfg: DetectorCfg) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn with_tick_hz(mut self, tick_hz: u32) -> Self {
        self.cfg.tick_hz = tick_hz;
        self
    }

    pub fn with_max_accel(mut self, max_accel: f32) -> Self {
        self.cfg.max_accel = max_accel;
        self
    }

    pub fn with_error_rate(mut self, error_rate: f32) -> Self {
        self.cfg.error_rate = error_rate;
        self
    }

    pub fn with_normalization(mut self, mode: NormalizationMode) -> Self {
        self.cfg.normalization = mode;
        self
    }

    pub fn build(self) -> Result<Detector> {
        let map = self
            .map
            .ok_or_else(|| eyre::Report::new(BuildError::MissingToothMap))?;
        let cfg = self.cfg;

        if cfg.tick_hz == 0 {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "tick_hz must be > 0",
            )));
        }
        if !cfg.max_accel.is_finite() || cfg.max_accel <= 0.0 {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "max_accel must be finite and > 0",
            )));
        }
        if !(cfg.error_rate > 0.0 && cfg.error_rate < 1.0) {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "error_rate must be in (0, 1)",
            )));
        }

        let belief = Belief::uniform(map.len());
        Ok(Detector {
            map,
            cfg,
            belief,
            current_tooth: 0,
            sync: SyncState::Unsynced,
            confidence: 0.0,
            velocity: 0.0,
            last_accel: Accel::Negligible,
            previous_ticks: 0,
            events: 0,
        })
    }
}
