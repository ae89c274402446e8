//! Engine configuration.
//!
//! A `Config` is built once by merging caller `Overrides` onto the built-in
//! defaults and is immutable afterwards. Scalar display flags replace
//! wholesale; the message, pattern, and custom-check tables merge per key,
//! so untouched defaults always survive a partial override.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// A caller-registered check: `(value, param)` in, failure message out.
/// `None` means the value passed.
pub type CustomCheck = Arc<dyn Fn(&str, &str) -> Option<String> + Send + Sync>;

/// Default message table, one entry per built-in rule.
const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("required", "This field cannot be empty"),
    ("alphaNumeric", "This field requires an alphanumeric value"),
    (
        "alphaNumericSpecial",
        "This field must include at least 1 number, 1 letter and 1 special character",
    ),
    ("numeric", "This field requires a numeric value"),
    ("decimal", "This field requires a numeric decimal value"),
    ("min", "This field has a minimum length of "),
    ("max", "This field has a maximum length of "),
    ("exact", "This field must be the exact length of "),
    ("email", "A valid email address is required"),
    ("phoneNumber", "A valid phone number is required"),
    ("idNumber", "A valid ID number is required"),
    ("match", "This field value must match the value of "),
    ("date", "A valid date format is expected (YYYY-MM-DD)"),
    ("datetime", "A valid date format is expected (YYYY-MM-DD HH:MM:SS)"),
];

/// Month 01-12, day 01-31; a loose bound, not calendar-aware.
const DEFAULT_DATE_PATTERN: &str = r"^\d{4}-(1[0-2]|0[1-9])-(3[01]|[12][0-9]|0\d)$";

/// Date prefix plus `H:MM:SS` with a loose 0-29 hour bound.
const DEFAULT_DATETIME_PATTERN: &str =
    r"^\d{4}-(1[0-2]|0[1-9])-(3[01]|[12][0-9]|0\d)\s[0-2]?[0-9]:[0-5][0-9]:[0-5][0-9]$";

/// Merged engine configuration: message table, named patterns, custom
/// checks, and display flags.
#[derive(Clone)]
pub struct Config {
    pub messages: BTreeMap<String, String>,
    pub patterns: BTreeMap<String, Regex>,
    pub custom_checks: BTreeMap<String, CustomCheck>,
    pub display_styling: bool,
    pub display_text: bool,
}

impl Default for Config {
    fn default() -> Self {
        let messages = DEFAULT_MESSAGES
            .iter()
            .map(|(name, text)| (name.to_string(), text.to_string()))
            .collect();
        let mut patterns = BTreeMap::new();
        for (name, pattern) in [
            ("date", DEFAULT_DATE_PATTERN),
            ("datetime", DEFAULT_DATETIME_PATTERN),
        ] {
            if let Ok(re) = Regex::new(pattern) {
                patterns.insert(name.to_string(), re);
            }
        }
        Self {
            messages,
            patterns,
            custom_checks: BTreeMap::new(),
            display_styling: true,
            display_text: true,
        }
    }
}

impl Config {
    /// Merge caller overrides onto the defaults.
    ///
    /// Map entries replace per key and novel keys are inserted, so overrides
    /// can both reword built-in messages and carry messages or patterns for
    /// rules that have no default entry. Pattern overrides are compiled here;
    /// a malformed pattern is the only way construction can fail.
    pub fn merge(overrides: Overrides) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        for (name, text) in overrides.messages {
            cfg.messages.insert(name, text);
        }
        for (name, pattern) in overrides.patterns {
            let re = Regex::new(&pattern).map_err(|source| ConfigError::Pattern {
                name: name.clone(),
                source,
            })?;
            cfg.patterns.insert(name, re);
        }
        for (name, check) in overrides.custom_checks {
            cfg.custom_checks.insert(name, check);
        }
        if let Some(value) = overrides.display_styling {
            cfg.display_styling = value;
        }
        if let Some(value) = overrides.display_text {
            cfg.display_text = value;
        }
        Ok(cfg)
    }

    /// Message template for a rule name; empty when no entry exists.
    #[must_use]
    pub fn message(&self, rule: &str) -> &str {
        self.messages.get(rule).map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("messages", &self.messages)
            .field("patterns", &self.patterns)
            .field("custom_checks", &self.custom_checks.keys().collect::<Vec<_>>())
            .field("display_styling", &self.display_styling)
            .field("display_text", &self.display_text)
            .finish()
    }
}

/// Caller-supplied partial configuration. Every field is optional; absent
/// entries leave the corresponding default untouched.
///
/// Custom checks are registered through code, never deserialized, so the
/// struct can still be read straight out of a host's config document.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Overrides {
    pub messages: BTreeMap<String, String>,
    pub patterns: BTreeMap<String, String>,
    #[serde(skip)]
    pub custom_checks: BTreeMap<String, CustomCheck>,
    pub display_styling: Option<bool>,
    pub display_text: Option<bool>,
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overrides")
            .field("messages", &self.messages)
            .field("patterns", &self.patterns)
            .field("custom_checks", &self.custom_checks.keys().collect::<Vec<_>>())
            .field("display_styling", &self.display_styling)
            .field("display_text", &self.display_text)
            .finish()
    }
}

/// Configuration construction failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A pattern override did not compile.
    #[error("invalid pattern override for rule {name:?}: {source}")]
    Pattern {
        name: String,
        source: regex::Error,
    },
}
