//! LPT scheduling and KPI evaluation.
//!
//! # Algorithm
//!
//! [`lpt`] implements Longest-Processing-Time-first list scheduling, the
//! standard greedy baseline for identical parallel machines. It is not
//! optimal, but carries a proven 4/3 worst-case makespan ratio.
//!
//! # KPI
//!
//! [`ScheduleKpi`] computes makespan and per-machine busy time, span,
//! and utilization from a completed schedule.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod kpi;
pub mod lpt;

pub use kpi::{MachineKpi, ScheduleKpi};

use tracing::info;

use crate::config::PlanConfig;
use crate::error::{Error, Result};
use crate::models::Schedule;
use crate::validation::validate_config;

/// Validates a configuration, generates its orders, and schedules them.
///
/// The one-call path from configuration to schedule, used by the CLI
/// and by import round-trips.
///
/// # Errors
/// Returns [`Error::InvalidConfig`] when the configuration fails
/// validation; nothing is generated or scheduled in that case.
pub fn schedule_plan(config: &PlanConfig) -> Result<Schedule> {
    validate_config(config).map_err(Error::InvalidConfig)?;
    let orders = config.generate_orders();
    let schedule = lpt::schedule(&orders, config.machines as usize, config.horizon_start)?;
    info!(
        orders = schedule.task_count(),
        machines = config.machines,
        makespan_ms = schedule.makespan_ms(),
        "plan scheduled"
    );
    Ok(schedule)
}
