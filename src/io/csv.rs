//! Schedule CSV export.
//!
//! One-way export for spreadsheet review and downstream reporting: one
//! row per scheduled order with calendar timestamps. There is no CSV
//! import; the JSON plan document is the only machine-readable input.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Schedule;

/// Column header of the schedule CSV.
pub const CSV_HEADER: &str =
    "order_id,machine_id,duration_class,start_timestamp,end_timestamp,duration_hours";

/// Renders a schedule as CSV with RFC 3339 timestamps.
///
/// Rows appear in assignment order. Fields containing commas, quotes,
/// or line breaks are quoted per RFC 4180.
pub fn schedule_to_csv(schedule: &Schedule) -> String {
    let mut out = String::with_capacity(64 * (schedule.task_count() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');

    for task in &schedule.tasks {
        let row = [
            escape(&task.order_id),
            format!("M{}", task.machine),
            escape(&task.class),
            schedule.start_time(task).to_rfc3339(),
            schedule.end_time(task).to_rfc3339(),
            format!("{}", task.duration_hours()),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Writes the schedule CSV to a file.
pub fn export_schedule_csv(schedule: &Schedule, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, schedule_to_csv(schedule))?;
    Ok(())
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Order, ScheduledTask};
    use crate::scheduler::lpt;
    use chrono::{DateTime, FixedOffset};

    fn sample_start() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2025-08-09T08:00:00+08:00").unwrap()
    }

    fn two_machine_schedule() -> Schedule {
        let orders = vec![
            Order::from_hours("WO1", "C", 6.0),
            Order::from_hours("WO2", "B", 5.0),
            Order::from_hours("WO3", "B", 5.0),
            Order::from_hours("WO4", "A", 2.0),
        ];
        lpt::schedule(&orders, 2, sample_start()).unwrap()
    }

    #[test]
    fn test_header_row() {
        let csv = schedule_to_csv(&Schedule::new(sample_start(), 2));
        assert_eq!(
            csv,
            "order_id,machine_id,duration_class,start_timestamp,end_timestamp,duration_hours\n"
        );
    }

    #[test]
    fn test_rows_carry_calendar_timestamps() {
        let csv = schedule_to_csv(&two_machine_schedule());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[1],
            "WO1,M0,C,2025-08-09T08:00:00+08:00,2025-08-09T14:00:00+08:00,6"
        );
        assert_eq!(
            lines[2],
            "WO2,M1,B,2025-08-09T08:00:00+08:00,2025-08-09T13:00:00+08:00,5"
        );
        assert_eq!(
            lines[3],
            "WO3,M1,B,2025-08-09T13:00:00+08:00,2025-08-09T18:00:00+08:00,5"
        );
        assert_eq!(
            lines[4],
            "WO4,M0,A,2025-08-09T14:00:00+08:00,2025-08-09T16:00:00+08:00,2"
        );
    }

    #[test]
    fn test_fractional_hours() {
        let mut schedule = Schedule::new(sample_start(), 1);
        schedule.add_task(ScheduledTask::new(&Order::from_hours("WO1", "A", 2.5), 0, 0));
        let csv = schedule_to_csv(&schedule);
        assert!(csv.lines().nth(1).unwrap().ends_with(",2.5"));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut schedule = Schedule::new(sample_start(), 1);
        let order = Order::from_hours("WO1", "rush, \"hot\"", 1.0);
        schedule.add_task(ScheduledTask::new(&order, 0, 0));

        let csv = schedule_to_csv(&schedule);
        assert!(csv.contains("\"rush, \"\"hot\"\"\""));
    }

    #[test]
    fn test_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.csv");

        let schedule = two_machine_schedule();
        export_schedule_csv(&schedule, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, schedule_to_csv(&schedule));
    }
}
