//! Input validation for event layouts.
//!
//! The layout accepts any input and never fails, so malformed events show
//! up as odd geometry rather than errors. Run these checks first when the
//! input comes from an untrusted source. Detects:
//! - Duplicate IDs
//! - Non-finite coordinates (NaN, ±inf)
//! - Inverted intervals (`start > end`)
//!
//! Zero-length events (`start == end`) are valid.

use crate::models::Event;
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
    /// Two events share the same ID.
    DuplicateId,
    /// A start or end coordinate is NaN or infinite.
    NonFiniteCoordinate,
    /// An event ends before it starts.
    InvertedInterval,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates events before layout.
///
/// Checks:
/// 1. No duplicate event IDs
/// 2. Start and end are finite
/// 3. Start does not exceed end
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_events(events: &[Event]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for event in events {
        if !ids.insert(event.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate event ID: {}", event.id),
            ));
        }

        if !event.start.is_finite() || !event.end.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteCoordinate,
                format!(
                    "Event '{}' has non-finite interval [{}, {})",
                    event.id, event.start, event.end
                ),
            ));
        } else if event.start > event.end {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedInterval,
                format!(
                    "Event '{}' ends ({}) before it starts ({})",
                    event.id, event.end, event.start
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
