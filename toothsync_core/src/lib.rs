#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Tooth-sync estimation for a toothed rotating wheel (hardware-agnostic).
//!
//! Recursive Bayesian filtering over irregularly spaced timing pulses from
//! a proximity sensor: which tooth just passed, how fast the wheel turns,
//! and whether the estimate can be trusted. The non-uniform tooth pattern
//! breaks rotational symmetry; the filter exploits it by scoring the
//! acceleration each tooth hypothesis would imply.
//!
//! ## Architecture
//!
//! - **Geometry**: the fixed tooth map (`geometry`)
//! - **Belief**: distribution init, diffusion, normalization, max
//!   extraction (`belief`)
//! - **Acceleration**: interval pair → rad/s² with tagged degenerate
//!   cases (`accel`)
//! - **Localization**: per-hypothesis plausibility reweighting (`locate`)
//! - **Sync**: the two-state trust machine (`sync`)
//! - **Detector**: per-event orchestration and published state (`detector`)
//!
//! Per-event work is allocation-free and bounded by the tooth count; the
//! single detector instance is owned by its caller and updated through an
//! exclusive reference, one event at a time.

pub mod accel;
pub mod belief;
pub mod conversions;
pub mod detector;
pub mod error;
pub mod geometry;
pub mod locate;
pub mod mocks;
pub mod runner;
pub mod source;
pub mod sync;
pub mod util;

pub use accel::{Accel, calc_accel};
pub use belief::{Belief, NormalizationMode};
pub use detector::{Detector, DetectorBuilder, DetectorCfg, Snapshot};
pub use error::{BuildError, Result};
pub use geometry::ToothMap;
pub use source::TickSource;
pub use sync::{SYNC_CONFIDENCE_THRESHOLD, SyncState, next_sync_state};
