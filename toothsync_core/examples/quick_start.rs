//! Quick start: build a detector for a four-position wheel and drive it
//! with a synthetic constant-speed trace.
//!
//! Run with `cargo run --example quick_start -p toothsync_core`.

use toothsync_core::mocks::{ConstantSpeed, four_position_wheel};
use toothsync_core::{Detector, runner};

fn main() -> Result<(), eyre::Report> {
    let mut detector = Detector::builder()
        .with_tooth_map(four_position_wheel())
        .with_tick_hz(20_000)
        .with_max_accel(3_000.0)
        .with_error_rate(0.02)
        .build()?;

    // one position takes 150 ticks, so the wheel spins at ~209 rad/s
    let mut trace = ConstantSpeed::new(detector.tooth_map(), 150, 32);

    let report = runner::run(&mut detector, &mut trace, |d| {
        println!(
            "event {:>2}: tooth {} conf {:.3} {}",
            d.events(),
            d.current_tooth(),
            d.confidence(),
            if d.has_sync() { "sync" } else { "-" },
        );
    });

    match report.first_sync_event {
        Some(n) => println!(
            "synced after {n} events at {:.1} rad/s",
            report.final_snapshot.velocity_rad_s
        ),
        None => println!("never synced"),
    }
    Ok(())
}
