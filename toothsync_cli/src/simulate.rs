//! Simulation driver: feed a tick sequence through a detector and report
//! each event.

use std::fs::File;
use std::path::PathBuf;

use eyre::{Result, WrapErr};
use toothsync_core::mocks::{ConstantSpeed, ScriptedTicks};
use toothsync_core::source::TickSource;
use toothsync_core::{Detector, ToothMap, runner};

use crate::report;

pub struct SimulateArgs {
    pub trace: Option<PathBuf>,
    pub events: Option<u64>,
    pub show_belief: bool,
    pub json: bool,
}

pub fn run(cfg: &toothsync_config::Config, args: &SimulateArgs) -> Result<()> {
    let map = ToothMap::new(cfg.wheel.tooth_map.clone())?;
    let mut detector = Detector::builder()
        .with_tooth_map(map)
        .with_cfg(cfg.into())
        .build()?;

    let mut source: Box<dyn TickSource> = match &args.trace {
        Some(path) => {
            let file = File::open(path)
                .wrap_err_with(|| format!("failed to open trace {}", path.display()))?;
            let ticks = toothsync_config::read_trace(file)
                .wrap_err_with(|| format!("failed to parse trace {}", path.display()))?;
            tracing::info!(events = ticks.len(), path = %path.display(), "replaying recorded trace");
            Box::new(ScriptedTicks::new(ticks))
        }
        None => {
            let events = args.events.unwrap_or(cfg.sim.events);
            tracing::info!(
                events,
                ticks_per_position = cfg.sim.ticks_per_position,
                "generating constant-speed trace"
            );
            Box::new(ConstantSpeed::new(
                detector.tooth_map(),
                cfg.sim.ticks_per_position,
                events,
            ))
        }
    };

    let mut markers = String::new();
    let summary = runner::run(&mut detector, source.as_mut(), |d| {
        let snap = d.snapshot();
        markers.push(report::marker(&snap));
        if args.json {
            println!("{}", report::json_event(&snap));
        } else {
            println!("{}", report::human_line(&snap));
            if args.show_belief {
                println!("{}", report::belief_line(d.belief().as_slice()));
            }
        }
    });

    if !args.json {
        println!("{markers}");
    }

    match summary.first_sync_event {
        Some(n) => {
            tracing::info!(event = n, "first sync");
            if !args.json {
                println!(
                    "sync after {n} events; final tooth {} at {:.1} rad/s (confidence {:.3})",
                    summary.final_snapshot.tooth,
                    summary.final_snapshot.velocity_rad_s,
                    summary.final_snapshot.confidence,
                );
            }
            Ok(())
        }
        None => eyre::bail!("no sync within {} events", summary.events),
    }
}
