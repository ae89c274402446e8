//! Rule-string parsing.
//!
//! A field's rules arrive as a compact string: pipe-separated segments, each
//! an optionally colon-parameterized method name (`required|min:5|match:other`).

use serde::Serialize;

/// One parsed rule segment: a method name and its (possibly empty) parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSpec {
    pub method: String,
    pub param: String,
}

/// Parse a rule string into ordered `RuleSpec`s.
///
/// Splits on `|`, then each segment on the first `:`; a segment without `:`
/// gets an empty parameter. Method existence is not checked here — unknown
/// names are skipped at dispatch time, never rejected.
#[must_use]
pub fn parse_rule_list(raw: &str) -> Vec<RuleSpec> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split('|')
        .map(|segment| match segment.split_once(':') {
            Some((method, param)) => RuleSpec {
                method: method.to_string(),
                param: param.to_string(),
            },
            None => RuleSpec {
                method: segment.to_string(),
                param: String::new(),
            },
        })
        .collect()
}
