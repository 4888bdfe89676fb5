//! Trust state for the tooth estimate.

use crate::accel::Accel;

/// Confidence above which the estimate is trusted unconditionally.
pub const SYNC_CONFIDENCE_THRESHOLD: f32 = 0.98;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Unsynced,
    Synced,
}

impl SyncState {
    #[inline]
    pub fn is_synced(self) -> bool {
        matches!(self, SyncState::Synced)
    }
}

/// One transition of the sync machine, applied once per tooth event.
///
/// High confidence always promotes. Below the threshold the state is held:
/// confidence decays under repeated diffusion even when every measurement
/// is consistent, so only an implausible measurement demotes.
pub fn next_sync_state(
    current: SyncState,
    confidence: f32,
    accel: Accel,
    max_accel: f32,
) -> SyncState {
    if confidence > SYNC_CONFIDENCE_THRESHOLD {
        SyncState::Synced
    } else if !accel.is_plausible(max_accel) {
        SyncState::Unsynced
    } else {
        current
    }
}
