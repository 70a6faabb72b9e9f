//! Scheduling domain models.
//!
//! Core data types for parallel-machine production planning: orders
//! (indivisible units of work), identical machines, and the schedule
//! that assigns one to the other over a calendar horizon.
//!
//! All scheduling arithmetic happens in integer millisecond offsets;
//! calendar timestamps appear only at the horizon anchor and in
//! derived views.

mod machine;
mod order;
mod schedule;

pub use machine::Machine;
pub use order::{hours_to_ms, ms_to_hours, Order, MS_PER_HOUR};
pub use schedule::{Schedule, ScheduledTask};
