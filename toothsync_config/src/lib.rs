#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schemas and trace parsing for the tooth-sync detector.
//!
//! - `Config` and sub-structs are deserialized from TOML and validated.
//! - The trace CSV loader enforces a strict header and rejects empty
//!   traces, so a malformed capture file fails before the simulation
//!   starts.

use eyre::WrapErr;
use serde::Deserialize;

/// Wheel geometry.
#[derive(Debug, Deserialize)]
pub struct WheelCfg {
    /// Gap distances in position units, e.g. `[2, 1, 1]` for a
    /// four-position wheel with one missing tooth. Entry `i` is the gap
    /// crossed when tooth `i` passes the sensor.
    pub tooth_map: Vec<u16>,
}

/// Capture timer parameters.
#[derive(Debug, Deserialize)]
pub struct TimingCfg {
    /// Timer frequency in Hz (ticks per second).
    pub tick_hz: u32,
}

/// Posterior normalization scheme. Softmax is markedly more expensive and
/// only worth selecting for offline analysis.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationMode {
    #[default]
    Linear,
    Softmax,
}

/// Filter tuning.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DetectionCfg {
    /// Acceleration magnitude (rad/s²) above which a measurement is
    /// treated as sensor error.
    pub max_accel_rad_s2: f32,
    /// Sensor error probability in (0, 1); empirically chosen, fixed at
    /// runtime.
    pub error_rate: f32,
    pub normalization: NormalizationMode,
}

impl Default for DetectionCfg {
    fn default() -> Self {
        Self {
            max_accel_rad_s2: 3_000.0,
            error_rate: 0.02,
            normalization: NormalizationMode::Linear,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    /// Optional log file path (JSON lines when --json is set).
    pub file: Option<String>,
    /// "error" | "warn" | "info" | "debug" | "trace"
    pub level: Option<String>,
}

/// Synthetic-trace defaults for the simulator.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SimCfg {
    /// Ticks per position unit at the simulated constant speed.
    pub ticks_per_position: u32,
    /// Number of tooth events to generate when no trace file is given.
    pub events: u64,
}

impl Default for SimCfg {
    fn default() -> Self {
        Self {
            ticks_per_position: 150,
            events: 32,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub wheel: WheelCfg,
    pub timing: TimingCfg,
    #[serde(default)]
    pub detection: DetectionCfg,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub sim: SimCfg,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

impl Config {
    /// Field-by-field validation with exact messages; malformed static
    /// configuration fails here, before any detector exists.
    pub fn validate(&self) -> eyre::Result<()> {
        if self.wheel.tooth_map.is_empty() {
            eyre::bail!("wheel.tooth_map must not be empty");
        }
        if self.wheel.tooth_map.iter().any(|&g| g == 0) {
            eyre::bail!("wheel.tooth_map entries must be >= 1");
        }
        if self.timing.tick_hz == 0 {
            eyre::bail!("timing.tick_hz must be > 0");
        }
        if !self.detection.max_accel_rad_s2.is_finite() || self.detection.max_accel_rad_s2 <= 0.0 {
            eyre::bail!("detection.max_accel_rad_s2 must be finite and > 0");
        }
        if !(self.detection.error_rate > 0.0 && self.detection.error_rate < 1.0) {
            eyre::bail!("detection.error_rate must be in (0, 1)");
        }
        if self.sim.ticks_per_position == 0 {
            eyre::bail!("sim.ticks_per_position must be > 0");
        }
        if self.sim.events == 0 {
            eyre::bail!("sim.events must be > 0");
        }
        Ok(())
    }
}

/// Recorded capture trace schema.
///
/// Expected header:
/// interval_ticks
///
/// Example:
/// interval_ticks
/// 300
/// 150
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct TraceRow {
    pub interval_ticks: u32,
}

/// Load a recorded interval trace from CSV, enforcing the exact header.
pub fn read_trace<R: std::io::Read>(reader: R) -> eyre::Result<Vec<u32>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers().wrap_err("reading trace CSV header")?.clone();
    if headers.len() != 1 || headers.get(0) != Some("interval_ticks") {
        eyre::bail!(
            "trace CSV must have exactly the header `interval_ticks`, got {:?}",
            headers
        );
    }
    let mut out = Vec::new();
    for (i, row) in rdr.deserialize::<TraceRow>().enumerate() {
        let row = row.wrap_err_with(|| format!("trace CSV row {}", i + 1))?;
        out.push(row.interval_ticks);
    }
    if out.is_empty() {
        eyre::bail!("trace CSV contains no rows");
    }
    Ok(out)
}
