//! Plan configuration and order generation.
//!
//! A plan is described by a machine count, a horizon start, and a set
//! of duration classes; the concrete order list is always derived from
//! the classes, never stored as primary data. Generation is
//! deterministic: classes are expanded in declaration order and order
//! IDs are numbered sequentially across classes, so the same
//! configuration always yields the same orders.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{hours_to_ms, Order};

/// Default machine count.
pub const DEFAULT_MACHINES: i32 = 5;

/// Default horizon start (RFC 3339, UTC+8).
pub const DEFAULT_HORIZON_START: &str = "2025-08-09T08:00:00+08:00";

/// Default timezone label shown alongside the horizon.
pub const DEFAULT_TIMEZONE: &str = "Asia/Makassar";

/// A named group of orders sharing one processing duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationClass {
    /// Class name (e.g. "A").
    pub name: String,
    /// Processing duration of every order in this class (fractional hours).
    pub duration_hours: f64,
    /// How many orders to generate for this class.
    pub count: i32,
    /// Display color as a hex string (e.g. "#10b981"). Presentation
    /// only; never affects scheduling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DurationClass {
    /// Creates a duration class.
    pub fn new(name: impl Into<String>, duration_hours: f64, count: i32) -> Self {
        Self {
            name: name.into(),
            duration_hours,
            count,
            color: None,
        }
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Processing duration in whole milliseconds.
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        hours_to_ms(self.duration_hours)
    }
}

/// Configuration for one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Number of identical machines.
    pub machines: i32,
    /// Timezone label carried for display and round-tripping. The
    /// horizon start's fixed offset is authoritative for arithmetic.
    pub timezone: String,
    /// Calendar time at which every machine becomes available.
    pub horizon_start: DateTime<FixedOffset>,
    /// Duration classes, expanded in declaration order.
    pub classes: Vec<DurationClass>,
}

impl PlanConfig {
    /// Creates a configuration with no classes.
    pub fn new(
        machines: i32,
        timezone: impl Into<String>,
        horizon_start: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            machines,
            timezone: timezone.into(),
            horizon_start,
            classes: Vec::new(),
        }
    }

    /// Adds a duration class.
    pub fn with_class(mut self, class: DurationClass) -> Self {
        self.classes.push(class);
        self
    }

    /// Total number of orders this configuration generates.
    pub fn total_orders(&self) -> usize {
        self.classes.iter().map(|c| c.count.max(0) as usize).sum()
    }

    /// Expands the duration classes into a concrete order list.
    ///
    /// Orders are emitted class by class in declaration order, with IDs
    /// "WO1", "WO2", ... numbered sequentially across all classes. Every
    /// order in a class gets the identical millisecond duration.
    pub fn generate_orders(&self) -> Vec<Order> {
        let mut orders = Vec::with_capacity(self.total_orders());
        let mut next_id = 1u32;
        for class in &self.classes {
            let duration_ms = class.duration_ms();
            for _ in 0..class.count {
                orders.push(Order::new(
                    format!("WO{next_id}"),
                    class.name.clone(),
                    duration_ms,
                ));
                next_id += 1;
            }
        }
        orders
    }
}

impl Default for PlanConfig {
    /// The stock demo plan: 100 orders in three classes on five machines.
    fn default() -> Self {
        Self::new(
            DEFAULT_MACHINES,
            DEFAULT_TIMEZONE,
            DateTime::parse_from_rfc3339(DEFAULT_HORIZON_START)
                .expect("default horizon is valid RFC 3339"),
        )
        .with_class(DurationClass::new("A", 2.0, 33).with_color("#10b981"))
        .with_class(DurationClass::new("B", 5.0, 33).with_color("#f59e0b"))
        .with_class(DurationClass::new("C", 6.0, 34).with_color("#ef4444"))
    }
}

/// Parses an RFC 3339 timestamp with explicit offset into a horizon start.
pub fn parse_horizon(s: &str) -> Result<DateTime<FixedOffset>> {
    Ok(DateTime::parse_from_rfc3339(s)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlanConfig::default();
        assert_eq!(config.machines, 5);
        assert_eq!(config.timezone, "Asia/Makassar");
        assert_eq!(config.classes.len(), 3);
        assert_eq!(config.total_orders(), 100);
        assert_eq!(
            config.horizon_start.to_rfc3339(),
            "2025-08-09T08:00:00+08:00"
        );
    }

    #[test]
    fn test_generate_orders_class_major() {
        let config = PlanConfig::new(
            2,
            "UTC",
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00+00:00").unwrap(),
        )
        .with_class(DurationClass::new("A", 2.0, 2))
        .with_class(DurationClass::new("B", 5.0, 3));

        let orders = config.generate_orders();
        assert_eq!(orders.len(), 5);

        let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["WO1", "WO2", "WO3", "WO4", "WO5"]);

        let classes: Vec<&str> = orders.iter().map(|o| o.class.as_str()).collect();
        assert_eq!(classes, ["A", "A", "B", "B", "B"]);

        assert!(orders[..2].iter().all(|o| o.duration_ms == 7_200_000));
        assert!(orders[2..].iter().all(|o| o.duration_ms == 18_000_000));
    }

    #[test]
    fn test_generate_orders_skips_zero_count() {
        let config = PlanConfig::new(
            1,
            "UTC",
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00+00:00").unwrap(),
        )
        .with_class(DurationClass::new("A", 2.0, 1))
        .with_class(DurationClass::new("B", 5.0, 0))
        .with_class(DurationClass::new("C", 6.0, 2));

        let orders = config.generate_orders();
        let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["WO1", "WO2", "WO3"]);
        assert_eq!(orders[1].class, "C");
    }

    #[test]
    fn test_generate_orders_is_deterministic() {
        let config = PlanConfig::default();
        assert_eq!(config.generate_orders(), config.generate_orders());
    }

    #[test]
    fn test_default_config_generates_demo_orders() {
        let orders = PlanConfig::default().generate_orders();
        assert_eq!(orders.len(), 100);
        assert_eq!(orders[0].id, "WO1");
        assert_eq!(orders[0].class, "A");
        assert_eq!(orders[32].class, "A");
        assert_eq!(orders[33].class, "B");
        assert_eq!(orders[65].class, "B");
        assert_eq!(orders[66].class, "C");
        assert_eq!(orders[99].id, "WO100");
    }

    #[test]
    fn test_class_color_omitted_when_absent() {
        let class = DurationClass::new("A", 2.0, 1);
        let json = serde_json::to_string(&class).unwrap();
        assert!(!json.contains("color"));

        let colored = class.with_color("#10b981");
        let json = serde_json::to_string(&colored).unwrap();
        assert!(json.contains("#10b981"));
    }

    #[test]
    fn test_parse_horizon() {
        let dt = parse_horizon("2025-08-09T08:00:00+08:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-08-09T08:00:00+08:00");
        assert!(parse_horizon("not a timestamp").is_err());
        assert!(parse_horizon("2025-08-09 08:00").is_err());
    }
}
