//! Drive a tick source through a detector.

use crate::detector::{Detector, Snapshot};
use crate::source::TickSource;

/// Per-run statistics returned by [`run`].
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    /// Events consumed from the source.
    pub events: u64,
    /// 1-based event index at which sync was first reported, if ever.
    pub first_sync_event: Option<u64>,
    pub final_snapshot: Snapshot,
}

/// Feed every interval from `source` into `detector`, calling `observe`
/// after each update.
pub fn run<S: TickSource + ?Sized>(
    detector: &mut Detector,
    source: &mut S,
    mut observe: impl FnMut(&Detector),
) -> RunReport {
    let mut events = 0_u64;
    let mut first_sync_event = None;
    while let Some(ticks) = source.next_interval() {
        detector.on_tooth_event(ticks);
        events += 1;
        if detector.has_sync() && first_sync_event.is_none() {
            first_sync_event = Some(events);
        }
        observe(detector);
    }
    RunReport {
        events,
        first_sync_event,
        final_snapshot: detector.snapshot(),
    }
}

/// Consume intervals until the detector first reports sync or the source
/// ends. Returns the 1-based event count at sync.
pub fn run_until_sync<S: TickSource + ?Sized>(
    detector: &mut Detector,
    source: &mut S,
) -> Option<u64> {
    let mut events = 0_u64;
    while let Some(ticks) = source.next_interval() {
        detector.on_tooth_event(ticks);
        events += 1;
        if detector.has_sync() {
            return Some(events);
        }
    }
    None
}
