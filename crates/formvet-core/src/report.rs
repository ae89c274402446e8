//! Validation reports.
//!
//! A failing rule is data, not a fault: each failure becomes a `RuleError`
//! and reports aggregate them per field and per form, in rule order.

use std::fmt;

use serde::Serialize;

/// A single rule failure for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleError {
    pub rule: String,
    pub message: String,
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule, self.message)
    }
}

/// All failures for one field, in rule-string order. Duplicate rule names
/// that fail twice produce two entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct FieldReport {
    pub field: String,
    pub errors: Vec<RuleError>,
}

impl FieldReport {
    /// Empty (passing) report for the named field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            errors: Vec::new(),
        }
    }

    /// Record a rule failure.
    pub fn add(&mut self, rule: impl Into<String>, message: impl Into<String>) {
        self.errors.push(RuleError {
            rule: rule.into(),
            message: message.into(),
        });
    }

    /// True when no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failures, the quantity the presentation policy compares
    /// against the host's previously rendered count.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

impl fmt::Display for FieldReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Reports for every tracked field of a form, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct FormReport {
    pub fields: Vec<FieldReport>,
}

impl FormReport {
    /// True when every field report is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(FieldReport::is_valid)
    }

    /// Report for the first field with the given name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldReport> {
        self.fields.iter().find(|report| report.field == name)
    }
}
