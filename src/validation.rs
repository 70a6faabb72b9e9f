//! Plan configuration validation.
//!
//! Checks a [`PlanConfig`](crate::config::PlanConfig) before any orders
//! are generated or scheduled. Detects:
//! - Machine counts below one
//! - Non-positive or non-finite class durations
//! - Negative order counts
//! - Duplicate or empty class names
//! - Total planned load running past the supported calendar range
//!
//! All checks run to completion so callers see every problem at once,
//! not just the first.

use chrono::Duration;

use crate::config::PlanConfig;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Fewer than one machine.
    InvalidMachineCount,
    /// A class duration is zero, negative, or not a finite number.
    InvalidDuration,
    /// A class order count is negative.
    InvalidOrderCount,
    /// Two duration classes share the same name.
    DuplicateClass,
    /// A duration class has an empty name.
    EmptyClassName,
    /// The timezone label is empty.
    EmptyTimezone,
    /// The total planned load runs past the supported calendar range.
    HorizonOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a plan configuration.
///
/// Checks:
/// 1. Machine count is at least 1
/// 2. Timezone label is non-empty
/// 3. Every class has a non-empty name
/// 4. Every class duration is finite and strictly positive
/// 5. Every class order count is non-negative
/// 6. No two classes share a name
/// 7. The total planned load, laid end to end from the horizon start,
///    stays within the supported calendar range
///
/// An empty class list is allowed; it simply generates no orders.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &PlanConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.machines < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidMachineCount,
            format!("Machine count must be at least 1, got {}", config.machines),
        ));
    }

    if config.timezone.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTimezone,
            "Timezone label must not be empty",
        ));
    }

    let mut names = HashSet::new();
    for (idx, class) in config.classes.iter().enumerate() {
        if class.name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyClassName,
                format!("Duration class at position {idx} has an empty name"),
            ));
        } else if !names.insert(class.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateClass,
                format!("Duplicate class name: {}", class.name),
            ));
        }

        if !class.duration_hours.is_finite() || class.duration_hours <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!(
                    "Class '{}' duration must be a positive number of hours, got {}",
                    class.name, class.duration_hours
                ),
            ));
        }

        if class.count < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidOrderCount,
                format!(
                    "Class '{}' order count must be non-negative, got {}",
                    class.name, class.count
                ),
            ));
        }
    }

    // No task offset can exceed the total load, so one end-of-plan
    // check covers every later timestamp conversion.
    let mut total_load_ms: Option<i64> = Some(0);
    for class in &config.classes {
        if class.count > 0 && class.duration_hours.is_finite() && class.duration_hours > 0.0 {
            total_load_ms = total_load_ms.and_then(|total| {
                class
                    .duration_ms()
                    .checked_mul(i64::from(class.count))
                    .and_then(|load| total.checked_add(load))
            });
        }
    }
    let fits = match total_load_ms {
        Some(total) => config
            .horizon_start
            .checked_add_signed(Duration::milliseconds(total))
            .is_some(),
        None => false,
    };
    if !fits {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            format!(
                "Total planned load starting {} runs past the supported calendar range",
                config.horizon_start.to_rfc3339()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
