//! Plan and schedule serialization.
//!
//! JSON plan documents round-trip the full configuration, orders
//! included; CSV schedule export is one-way, for spreadsheets and
//! downstream reporting.

pub mod csv;
pub mod json;
