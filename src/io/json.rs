//! JSON plan document import and export.
//!
//! A plan document is the complete round-trippable description of a
//! planning run: machine count, timezone label, horizon start, the
//! duration classes, and the order list derived from them. The order
//! list is included for human inspection; on import it is cross-checked
//! against regeneration from the classes, and any disagreement rejects
//! the whole document. Import never returns a partially loaded
//! configuration.

use std::fs;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{DurationClass, PlanConfig};
use crate::error::{Error, Result};
use crate::models::{hours_to_ms, Order};
use crate::validation::validate_config;

/// Serialized form of one generated order.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OrderRecord {
    id: String,
    class: String,
    duration_hours: f64,
}

impl OrderRecord {
    fn from_order(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            class: order.class.clone(),
            duration_hours: order.duration_hours(),
        }
    }

    fn matches(&self, order: &Order) -> bool {
        self.id == order.id
            && self.class == order.class
            && hours_to_ms(self.duration_hours) == order.duration_ms
    }
}

/// On-disk plan document: configuration plus its derived orders.
#[derive(Debug, Serialize, Deserialize)]
struct PlanDocument {
    machines: i32,
    timezone: String,
    horizon_start: DateTime<FixedOffset>,
    classes: Vec<DurationClass>,
    orders: Vec<OrderRecord>,
}

/// Serializes a configuration as a pretty-printed plan document.
///
/// The configuration is validated first so that every exported document
/// is guaranteed to re-import.
pub fn export_config(config: &PlanConfig) -> Result<String> {
    validate_config(config).map_err(Error::InvalidConfig)?;

    let document = PlanDocument {
        machines: config.machines,
        timezone: config.timezone.clone(),
        horizon_start: config.horizon_start,
        classes: config.classes.clone(),
        orders: config
            .generate_orders()
            .iter()
            .map(OrderRecord::from_order)
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parses and verifies a plan document.
///
/// The returned configuration has passed validation and its embedded
/// order list has been confirmed to match regeneration. Any failure
/// (malformed JSON, missing fields, bad timestamps, validation errors,
/// or an order-list mismatch) rejects the document as a whole.
pub fn import_config(text: &str) -> Result<PlanConfig> {
    let document: PlanDocument = serde_json::from_str(text)?;

    let config = PlanConfig {
        machines: document.machines,
        timezone: document.timezone,
        horizon_start: document.horizon_start,
        classes: document.classes,
    };
    validate_config(&config).map_err(Error::InvalidConfig)?;

    let expected = config.generate_orders();
    if document.orders.len() != expected.len() {
        return Err(Error::OrderListMismatch(format!(
            "expected {} orders, found {}",
            expected.len(),
            document.orders.len()
        )));
    }
    for (idx, (record, order)) in document.orders.iter().zip(&expected).enumerate() {
        if !record.matches(order) {
            return Err(Error::OrderListMismatch(format!(
                "order {idx}: expected '{}' ({}, {} h), found '{}' ({}, {} h)",
                order.id,
                order.class,
                order.duration_hours(),
                record.id,
                record.class,
                record.duration_hours
            )));
        }
    }

    debug!(
        orders = expected.len(),
        machines = config.machines,
        "plan document verified"
    );
    Ok(config)
}

/// Writes a plan document to a file, with a trailing newline.
pub fn export_config_file(config: &PlanConfig, path: impl AsRef<Path>) -> Result<()> {
    let json = export_config(config)?;
    fs::write(path, json + "\n")?;
    Ok(())
}

/// Reads and verifies a plan document from a file.
pub fn import_config_file(path: impl AsRef<Path>) -> Result<PlanConfig> {
    let text = fs::read_to_string(path)?;
    import_config(&text)
}
