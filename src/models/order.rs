//! Production order model.
//!
//! An order is one indivisible unit of work: it occupies exactly one
//! machine for its full duration, with no preemption and no precedence
//! between orders. Durations are stored in integer milliseconds so
//! scheduling arithmetic stays exact; fractional hours are converted
//! once, at order creation.

use serde::{Deserialize, Serialize};

/// Milliseconds per hour.
pub const MS_PER_HOUR: f64 = 3_600_000.0;

/// Converts fractional hours to whole milliseconds, rounding to the
/// nearest millisecond.
#[inline]
pub fn hours_to_ms(hours: f64) -> i64 {
    (hours * MS_PER_HOUR).round() as i64
}

/// Converts milliseconds back to fractional hours.
#[inline]
pub fn ms_to_hours(ms: i64) -> f64 {
    ms as f64 / MS_PER_HOUR
}

/// A production order awaiting assignment to a machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID (e.g. "WO17").
    pub id: String,
    /// Name of the duration class this order belongs to.
    pub class: String,
    /// Processing duration (ms).
    pub duration_ms: i64,
}

impl Order {
    /// Creates a new order.
    pub fn new(id: impl Into<String>, class: impl Into<String>, duration_ms: i64) -> Self {
        Self {
            id: id.into(),
            class: class.into(),
            duration_ms,
        }
    }

    /// Creates an order from a duration in fractional hours.
    pub fn from_hours(id: impl Into<String>, class: impl Into<String>, hours: f64) -> Self {
        Self::new(id, class, hours_to_ms(hours))
    }

    /// Duration in fractional hours.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        ms_to_hours(self.duration_ms)
    }
}
