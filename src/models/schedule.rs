//! Schedule (solution) model.
//!
//! A schedule is a complete assignment of orders to machines and time
//! intervals over a shared horizon. Intervals are millisecond offsets
//! from the horizon start; calendar timestamps are derived on demand.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};

use super::order::{ms_to_hours, Order};

/// An order-machine-time assignment.
///
/// Records that a specific order runs on a specific machine during a
/// specific interval, measured as offsets from the schedule's horizon
/// start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Assigned order ID.
    pub order_id: String,
    /// Duration class of the order (denormalized for display and export).
    pub class: String,
    /// Assigned machine index.
    pub machine: usize,
    /// Start offset (ms).
    pub start_ms: i64,
    /// End offset (ms).
    pub end_ms: i64,
}

impl ScheduledTask {
    /// Creates an assignment for `order` starting at `start_ms` on `machine`.
    pub fn new(order: &Order, machine: usize, start_ms: i64) -> Self {
        Self {
            order_id: order.id.clone(),
            class: order.class.clone(),
            machine,
            start_ms,
            end_ms: start_ms + order.duration_ms,
        }
    }

    /// Total duration (end - start) in ms.
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Duration in fractional hours.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        ms_to_hours(self.duration_ms())
    }
}

/// A complete schedule over identical parallel machines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Calendar time of offset zero.
    pub horizon_start: DateTime<FixedOffset>,
    /// Number of machines; indices run `0..machines`.
    pub machines: usize,
    /// Order assignments, in placement order.
    pub tasks: Vec<ScheduledTask>,
}

impl Schedule {
    /// Creates an empty schedule over `machines` machines.
    pub fn new(horizon_start: DateTime<FixedOffset>, machines: usize) -> Self {
        Self {
            horizon_start,
            machines,
            tasks: Vec::new(),
        }
    }

    /// Adds an assignment.
    pub fn add_task(&mut self, task: ScheduledTask) {
        self.tasks.push(task);
    }

    /// Makespan: latest end offset across all tasks (ms). Zero when empty.
    pub fn makespan_ms(&self) -> i64 {
        self.tasks.iter().map(|t| t.end_ms).max().unwrap_or(0)
    }

    /// Makespan in fractional hours.
    pub fn makespan_hours(&self) -> f64 {
        ms_to_hours(self.makespan_ms())
    }

    /// Finds the assignment for a given order.
    pub fn task_for_order(&self, order_id: &str) -> Option<&ScheduledTask> {
        self.tasks.iter().find(|t| t.order_id == order_id)
    }

    /// Returns all assignments on a given machine, in placement order.
    pub fn tasks_for_machine(&self, machine: usize) -> Vec<&ScheduledTask> {
        self.tasks.iter().filter(|t| t.machine == machine).collect()
    }

    /// Total processing time assigned to a machine (ms).
    pub fn machine_busy_ms(&self, machine: usize) -> i64 {
        self.tasks
            .iter()
            .filter(|t| t.machine == machine)
            .map(|t| t.duration_ms())
            .sum()
    }

    /// Total processing time across all machines (ms).
    pub fn total_busy_ms(&self) -> i64 {
        self.tasks.iter().map(|t| t.duration_ms()).sum()
    }

    /// Number of scheduled tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Calendar start of a task.
    pub fn start_time(&self, task: &ScheduledTask) -> DateTime<FixedOffset> {
        self.horizon_start + Duration::milliseconds(task.start_ms)
    }

    /// Calendar end of a task.
    pub fn end_time(&self, task: &ScheduledTask) -> DateTime<FixedOffset> {
        self.horizon_start + Duration::milliseconds(task.end_ms)
    }

    /// Calendar time at which the last task finishes. Equals the
    /// horizon start when the schedule is empty.
    pub fn makespan_end(&self) -> DateTime<FixedOffset> {
        self.horizon_start + Duration::milliseconds(self.makespan_ms())
    }
}
