//! Rule-name resolution.
//!
//! Built-ins resolve first, then the configuration's custom-check table, so
//! a built-in name always shadows a custom entry. Unknown names resolve to
//! nothing and the rule is skipped at dispatch — a typo in a rule string is
//! silent, never an error.

use std::fmt;

use crate::checks::BuiltinCheck;
use crate::config::{Config, CustomCheck};

/// A resolved check, ready to run against a value.
pub enum ResolvedCheck<'a> {
    Builtin(BuiltinCheck),
    Custom(&'a CustomCheck),
}

impl fmt::Debug for ResolvedCheck<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(check) => write!(f, "Builtin({})", check.name()),
            Self::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// Look up a rule name: built-in table first, then custom checks.
#[must_use]
pub fn resolve<'a>(name: &str, config: &'a Config) -> Option<ResolvedCheck<'a>> {
    if let Some(builtin) = BuiltinCheck::from_name(name) {
        return Some(ResolvedCheck::Builtin(builtin));
    }
    config.custom_checks.get(name).map(ResolvedCheck::Custom)
}
