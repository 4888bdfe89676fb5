//! Human-readable and JSON renderings of detector state.

use toothsync_core::Snapshot;
use toothsync_core::util::rad_s_to_rpm;

/// One-character sync marker, one per event ("+" synced, "." not).
pub fn marker(snap: &Snapshot) -> char {
    if snap.synced { '+' } else { '.' }
}

pub fn human_line(snap: &Snapshot) -> String {
    format!(
        "event {:>4}  tooth {:>2}  conf {:.3}  {}  {:8.1} rad/s ({:6.0} rpm)  accel {:>12.1} rad/s²",
        snap.events,
        snap.tooth,
        snap.confidence,
        if snap.synced { "sync  " } else { "nosync" },
        snap.velocity_rad_s,
        rad_s_to_rpm(snap.velocity_rad_s),
        snap.accel_rad_s2,
    )
}

/// Belief distribution as a bracketed list of fixed-precision values.
pub fn belief_line(belief: &[f32]) -> String {
    let cells: Vec<String> = belief.iter().map(|v| format!("{v:.3}")).collect();
    format!("  belief = [{}]", cells.join(", "))
}

pub fn json_event(snap: &Snapshot) -> serde_json::Value {
    serde_json::json!({
        "event": snap.events,
        "tooth": snap.tooth,
        "synced": snap.synced,
        "confidence": snap.confidence,
        "velocity_rad_s": snap.velocity_rad_s,
        "accel_rad_s2": snap.accel_rad_s2,
    })
}

/// Map an `eyre::Report` to a what-happened / how-to-fix explanation.
pub fn humanize(err: &eyre::Report) -> String {
    use toothsync_core::BuildError;

    if let Some(be) = err.downcast_ref::<BuildError>() {
        return match be {
            BuildError::MissingToothMap => {
                "What happened: No tooth map was provided to the detector.\nLikely causes: The [wheel] section is missing from the config.\nHow to fix: Add `tooth_map = [2, 1, 1]` (or your wheel's pattern) under [wheel].".to_string()
            }
            BuildError::InvalidConfig(msg) => format!(
                "What happened: Invalid configuration ({msg}).\nLikely causes: Missing or out-of-range values in the TOML.\nHow to fix: Edit the config file, then rerun. `toothsync check-config` shows the first problem."
            ),
        };
    }

    format!(
        "What happened: {err:#}.\nHow to fix: Re-run with --log-level=debug or set RUST_LOG for more detail."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(synced: bool) -> Snapshot {
        Snapshot {
            tooth: 1,
            synced,
            confidence: 0.9987,
            velocity_rad_s: 209.4,
            accel_rad_s2: 0.0,
            events: 3,
        }
    }

    #[test]
    fn markers_follow_sync() {
        assert_eq!(marker(&snap(true)), '+');
        assert_eq!(marker(&snap(false)), '.');
    }

    #[test]
    fn json_event_round_trips() {
        let v = json_event(&snap(true));
        assert_eq!(v["tooth"], 1);
        assert_eq!(v["synced"], true);
        assert_eq!(v["event"], 3);
    }

    #[test]
    fn humanize_names_the_invalid_field() {
        let err = eyre::Report::new(toothsync_core::BuildError::InvalidConfig(
            "error_rate must be in (0, 1)",
        ));
        let text = humanize(&err);
        assert!(text.contains("error_rate"));
        assert!(text.contains("How to fix"));
    }
}
