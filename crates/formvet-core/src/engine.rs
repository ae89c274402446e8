//! The validation engine.
//!
//! Explicitly constructed, any number per process; an engine holds the
//! merged configuration and nothing else. Each validation pass is pure and
//! re-entrant: hosts call in from whatever change signal they wire up, and
//! the engine retains nothing between passes.

use crate::checks::CheckContext;
use crate::config::{Config, ConfigError, Overrides};
use crate::form::{Field, Form, PeerValues};
use crate::presentation::{self, Presentation};
use crate::registry::{self, ResolvedCheck};
use crate::report::{FieldReport, FormReport};
use crate::rules::parse_rule_list;

/// Host hooks for the submission lifecycle. Every hook defaults to a no-op
/// so hosts implement only what they observe.
pub trait SubmitHooks {
    /// Fired after validation, before the outcome is acted on.
    fn on_submitting(&mut self) {}

    /// Every field passed; the host performs the actual submission.
    fn on_submitted(&mut self) {}

    /// At least one field failed; the host suppresses submission.
    fn on_invalid(&mut self, _report: &FormReport) {}
}

/// The validation engine: a merged configuration plus the dispatch logic.
#[derive(Debug, Clone)]
pub struct Engine {
    config: Config,
}

impl Engine {
    /// Build an engine by merging `overrides` onto the default
    /// configuration. Fails only when a pattern override does not compile.
    pub fn new(overrides: Overrides) -> Result<Self, ConfigError> {
        Ok(Self {
            config: Config::merge(overrides)?,
        })
    }

    /// Engine with the stock configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            config: Config::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate one raw value against a rule string.
    ///
    /// Rules run in rule-string order and failures collect in that order.
    /// Unknown rule names are skipped. A rule listed twice that fails twice
    /// produces two entries.
    pub fn validate_value(
        &self,
        field: &str,
        value: &str,
        rules: &str,
        peers: &dyn PeerValues,
    ) -> FieldReport {
        let mut report = FieldReport::new(field);
        let ctx = CheckContext {
            config: &self.config,
            peers,
        };
        for spec in parse_rule_list(rules) {
            let failure = match registry::resolve(&spec.method, &self.config) {
                Some(ResolvedCheck::Builtin(check)) => check.run(value, &spec.param, &ctx),
                Some(ResolvedCheck::Custom(check)) => check.as_ref()(value, &spec.param),
                None => None,
            };
            if let Some(message) = failure {
                report.add(spec.method, message);
            }
        }
        report
    }

    /// Validate a tracked field. Disabled fields and fields without rules
    /// pass through untouched: empty report, no checks run.
    pub fn validate_field(&self, field: &Field, peers: &dyn PeerValues) -> FieldReport {
        if field.disabled || field.rules.is_empty() {
            return FieldReport::new(field.name.clone());
        }
        self.validate_value(&field.name, &field.value, &field.rules, peers)
    }

    /// Validate every tracked field, with the form itself as the peer
    /// lookup. No short-circuit: every field is evaluated so every field's
    /// error display can update, whatever earlier fields did.
    pub fn validate_form(&self, form: &Form) -> FormReport {
        let fields = form
            .fields
            .iter()
            .map(|field| self.validate_field(field, form))
            .collect();
        FormReport { fields }
    }

    /// Run the submission gate: validate everything, fire the lifecycle
    /// hooks, and hand back the report. The host submits on `on_submitted`
    /// and suppresses on `on_invalid`.
    pub fn submit(&self, form: &Form, hooks: &mut dyn SubmitHooks) -> FormReport {
        let report = self.validate_form(form);
        hooks.on_submitting();
        if report.is_valid() {
            hooks.on_submitted();
        } else {
            hooks.on_invalid(&report);
        }
        report
    }

    /// Decide the error-display delta for one field's new report, given the
    /// error count the host previously rendered for it.
    #[must_use]
    pub fn presentation(
        &self,
        previous_error_count: usize,
        report: &FieldReport,
        force_error_text: bool,
    ) -> Presentation {
        presentation::decide(previous_error_count, report, force_error_text, &self.config)
    }
}
