mod cli;
mod report;
mod simulate;

use clap::Parser;
use eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::simulate::SimulateArgs;

fn init_logging(cli: &Cli, logging: &toothsync_config::Logging) {
    // RUST_LOG takes precedence over --log-level, which takes precedence
    // over logging.level from the config.
    let level = cli
        .log_level
        .clone()
        .or_else(|| logging.level.clone())
        .unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Some(file) = &logging.file {
        let path = std::path::Path::new(file);
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        let name = path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("toothsync.log"));
        let appender = tracing_appender::rolling::never(
            dir.unwrap_or_else(|| std::path::Path::new(".")),
            name,
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = cli::FILE_GUARD.set(guard);
        if cli.json {
            fmt.json().with_writer(non_blocking).init();
        } else {
            fmt.with_writer(non_blocking).init();
        }
    } else if cli.json {
        fmt.json().init();
    } else {
        fmt.init();
    }
}

fn dispatch(cli: &Cli) -> Result<()> {
    let text = std::fs::read_to_string(&cli.config)
        .wrap_err_with(|| format!("failed to read config {}", cli.config.display()))?;
    let cfg = toothsync_config::load_toml(&text).wrap_err("failed to parse config TOML")?;
    cfg.validate().wrap_err("invalid config")?;

    init_logging(cli, &cfg.logging);

    match &cli.cmd {
        Commands::CheckConfig => {
            println!(
                "config ok: {} gaps, {} positions/rev, tick_hz {}",
                cfg.wheel.tooth_map.len(),
                cfg.wheel.tooth_map.iter().map(|&g| u32::from(g)).sum::<u32>(),
                cfg.timing.tick_hz,
            );
            Ok(())
        }
        Commands::Simulate {
            trace,
            events,
            belief,
        } => simulate::run(
            &cfg,
            &SimulateArgs {
                trace: trace.clone(),
                events: *events,
                show_belief: *belief,
                json: cli.json,
            },
        ),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Err(err) = dispatch(&cli) {
        eprintln!("{}", report::humanize(&err));
        std::process::exit(1);
    }
    Ok(())
}
