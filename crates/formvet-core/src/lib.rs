//! formvet-core: declarative field-validation engine.
//!
//! Fields carry compact rule strings (`required|min:5|match:other`). The
//! engine parses them, dispatches each segment to a built-in or
//! caller-registered check, aggregates failures per field and per form, and
//! decides the inline error-display delta a host should apply. Rendering,
//! change detection, and animation execution stay with the host: the engine
//! is pure, stateless per call, and never watches anything.

pub mod checks;
pub mod config;
pub mod engine;
pub mod form;
pub mod presentation;
pub mod registry;
pub mod report;
pub mod rules;

pub use checks::{BuiltinCheck, CheckContext};
pub use config::{Config, ConfigError, CustomCheck, Overrides};
pub use engine::{Engine, SubmitHooks};
pub use form::{Field, Form, NoPeers, PeerValues};
pub use presentation::{Grow, PanelVisibility, Presentation};
pub use report::{FieldReport, FormReport, RuleError};
pub use rules::{parse_rule_list, RuleSpec};

/// Stable crate label used for bootstrap smoke tests.
pub fn crate_label() -> &'static str {
    "formvet-core"
}
