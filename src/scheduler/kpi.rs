//! Schedule quality metrics (KPIs).
//!
//! Computes standard parallel-machine performance indicators from a
//! completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion offset |
//! | Busy time | Total processing time per machine |
//! | Span | First start to last end per machine |
//! | Utilization | Busy time / makespan |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use crate::models::{ms_to_hours, Schedule};

/// Per-machine performance indicators.
///
/// All time values are in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct MachineKpi {
    /// Machine index.
    pub machine: usize,
    /// Number of orders assigned.
    pub order_count: usize,
    /// Total processing time (ms).
    pub busy_ms: i64,
    /// First start to last end (ms). Zero for an idle machine.
    pub span_ms: i64,
    /// Busy time over schedule makespan (0.0..1.0). Zero when the
    /// schedule is empty.
    pub utilization: f64,
}

/// Schedule performance indicators.
///
/// Covers every machine in the schedule, idle ones included, in
/// machine-index order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Makespan: latest completion offset (ms).
    pub makespan_ms: i64,
    /// Total processing time across all machines (ms).
    pub total_busy_ms: i64,
    /// Number of scheduled orders.
    pub order_count: usize,
    /// Per-machine indicators, indexed by machine.
    pub machines: Vec<MachineKpi>,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let makespan = schedule.makespan_ms();

        let mut machines: Vec<MachineKpi> = (0..schedule.machines)
            .map(|m| MachineKpi {
                machine: m,
                order_count: 0,
                busy_ms: 0,
                span_ms: 0,
                utilization: 0.0,
            })
            .collect();
        let mut first_start = vec![i64::MAX; schedule.machines];
        let mut last_end = vec![0i64; schedule.machines];

        for task in &schedule.tasks {
            if let Some(kpi) = machines.get_mut(task.machine) {
                kpi.order_count += 1;
                kpi.busy_ms += task.duration_ms();
                first_start[task.machine] = first_start[task.machine].min(task.start_ms);
                last_end[task.machine] = last_end[task.machine].max(task.end_ms);
            }
        }

        for kpi in &mut machines {
            if kpi.order_count > 0 {
                kpi.span_ms = last_end[kpi.machine] - first_start[kpi.machine];
            }
            if makespan > 0 {
                kpi.utilization = kpi.busy_ms as f64 / makespan as f64;
            }
        }

        Self {
            makespan_ms: makespan,
            total_busy_ms: machines.iter().map(|k| k.busy_ms).sum(),
            order_count: schedule.task_count(),
            machines,
        }
    }

    /// Makespan in fractional hours.
    pub fn makespan_hours(&self) -> f64 {
        ms_to_hours(self.makespan_ms)
    }

    /// Mean utilization across all machines, idle ones included.
    pub fn average_utilization(&self) -> f64 {
        if self.machines.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.machines.iter().map(|k| k.utilization).sum();
        sum / self.machines.len() as f64
    }
}
