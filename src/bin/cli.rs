//! `aps-schedule`: plan and display a parallel-machine schedule.
//!
//! Usage:
//!   aps-schedule                                      # stock demo plan
//!   aps-schedule --machines 3 --class A=10x2.5 --class B=4x8
//!   aps-schedule --config plan.json --export-csv schedule.csv
//!
//! Configuration is resolved in layers: built-in defaults, then an
//! optional plan document (`--config`), then individual flag overrides.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;

use aps_schedule::config::{parse_horizon, DurationClass, PlanConfig};
use aps_schedule::io::{csv, json};
use aps_schedule::render::{render_summary, render_timeline, RenderOptions};
use aps_schedule::scheduler::{self, ScheduleKpi};

/// Parallel-machine production scheduler.
#[derive(Parser, Debug)]
#[command(
    name = "aps-schedule",
    version,
    about = "Schedule work orders onto identical parallel machines with the LPT heuristic"
)]
struct Cli {
    /// Plan document (JSON) to import as the base configuration.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of identical machines.
    #[arg(long, value_name = "N")]
    machines: Option<i32>,

    /// Duration class as NAME=COUNTxHOURS, e.g. A=33x2.5. Repeatable;
    /// when given, replaces the whole class list.
    #[arg(long = "class", value_name = "NAME=COUNTxHOURS", value_parser = parse_class_spec)]
    classes: Vec<DurationClass>,

    /// Horizon start as RFC 3339 with offset, e.g. 2025-08-09T08:00:00+08:00.
    #[arg(long, value_name = "TIMESTAMP")]
    start: Option<String>,

    /// Timezone label shown alongside the horizon.
    #[arg(long, value_name = "NAME")]
    timezone: Option<String>,

    /// Write the effective configuration as a plan document.
    #[arg(long = "export-config", value_name = "FILE")]
    export_config: Option<PathBuf>,

    /// Write the schedule as CSV.
    #[arg(long = "export-csv", value_name = "FILE")]
    export_csv: Option<PathBuf>,

    /// Timeline width in columns.
    #[arg(long, default_value_t = 64, value_name = "COLS")]
    width: usize,

    /// Disable ANSI colors.
    #[arg(long)]
    plain: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Resolve configuration: defaults, then file, then flag overrides.
    let mut config = match &cli.config {
        Some(path) => json::import_config_file(path)
            .with_context(|| format!("failed to import {}", path.display()))?,
        None => PlanConfig::default(),
    };
    if let Some(machines) = cli.machines {
        config.machines = machines;
    }
    if !cli.classes.is_empty() {
        config.classes = cli.classes.clone();
    }
    if let Some(start) = &cli.start {
        config.horizon_start = parse_horizon(start).context("invalid --start timestamp")?;
    }
    if let Some(timezone) = &cli.timezone {
        config.timezone = timezone.clone();
    }

    let schedule = scheduler::schedule_plan(&config)?;
    let kpi = ScheduleKpi::calculate(&schedule);

    let marker = if cli.plain {
        "▸".to_string()
    } else {
        "▸".bright_green().to_string()
    };

    println!(
        "{marker} {} orders across {} classes on {} machines ({})",
        schedule.task_count(),
        config.classes.len(),
        config.machines,
        config.timezone
    );

    let opts = RenderOptions::new()
        .with_width(cli.width)
        .with_color(!cli.plain)
        .with_classes(&config.classes);
    print!("{}", render_timeline(&schedule, &kpi, &opts));
    print!("{}", render_summary(&kpi));

    if let Some(path) = &cli.export_config {
        json::export_config_file(&config, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("{marker} wrote plan document to {}", path.display());
    }
    if let Some(path) = &cli.export_csv {
        csv::export_schedule_csv(&schedule, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("{marker} wrote schedule CSV to {}", path.display());
    }

    Ok(())
}

/// Parses `NAME=COUNTxHOURS`, e.g. `A=33x2` or `B=4x2.5`.
fn parse_class_spec(spec: &str) -> Result<DurationClass, String> {
    let (name, rest) = spec
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=COUNTxHOURS, got '{spec}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("class name must not be empty in '{spec}'"));
    }

    let (count, hours) = rest
        .split_once(|c| c == 'x' || c == 'X')
        .ok_or_else(|| format!("expected COUNTxHOURS after '=', got '{rest}'"))?;
    let count: i32 = count
        .trim()
        .parse()
        .map_err(|_| format!("invalid order count '{}'", count.trim()))?;
    let hours: f64 = hours
        .trim()
        .parse()
        .map_err(|_| format!("invalid duration hours '{}'", hours.trim()))?;

    Ok(DurationClass::new(name, hours, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_class_spec() {
        let class = parse_class_spec("A=33x2").unwrap();
        assert_eq!(class.name, "A");
        assert_eq!(class.count, 33);
        assert!((class.duration_hours - 2.0).abs() < 1e-10);
        assert!(class.color.is_none());
    }

    #[test]
    fn test_parse_class_spec_fractional_and_spaces() {
        let class = parse_class_spec("rush = 4 X 2.5").unwrap();
        assert_eq!(class.name, "rush");
        assert_eq!(class.count, 4);
        assert!((class.duration_hours - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_parse_class_spec_rejects_malformed() {
        assert!(parse_class_spec("A33x2").is_err());
        assert!(parse_class_spec("A=33").is_err());
        assert!(parse_class_spec("A=manyx2").is_err());
        assert!(parse_class_spec("A=33xlots").is_err());
        assert!(parse_class_spec("=33x2").is_err());
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
