//! Parallel-machine production scheduling.
//!
//! Generates work orders from duration classes, assigns them to
//! identical machines with the LPT (Longest Processing Time first)
//! heuristic, computes makespan and utilization KPIs, and renders the
//! result as a terminal timeline. Plans round-trip through JSON
//! documents; finished schedules export one-way to CSV.
//!
//! # Modules
//!
//! - **`config`**: `PlanConfig`, `DurationClass`, deterministic order generation
//! - **`models`**: Domain types (`Order`, `Machine`, `Schedule`, `ScheduledTask`)
//! - **`scheduler`**: LPT list scheduling and `ScheduleKpi` metrics
//! - **`render`**: Gantt-style terminal timeline and KPI summary
//! - **`io`**: JSON plan document round-trip, CSV schedule export
//! - **`validation`**: Configuration integrity checks
//!
//! # Pipeline
//!
//! Data flows one way: configuration → orders → schedule → KPIs →
//! rendered view and exports. Every step is a pure function of its
//! inputs, so identical configurations always produce identical plans.
//!
//! # Example
//!
//! ```
//! use aps_schedule::config::PlanConfig;
//! use aps_schedule::scheduler::{self, ScheduleKpi};
//!
//! let config = PlanConfig::default();
//! let schedule = scheduler::schedule_plan(&config).unwrap();
//! let kpi = ScheduleKpi::calculate(&schedule);
//! assert_eq!(kpi.order_count, 100);
//! ```
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
