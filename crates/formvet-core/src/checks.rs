//! Built-in checks.
//!
//! Every check shares one shape: `(value, param, ctx)` in, failure message
//! out, `None` when the value passes. Messages come from the configured
//! message table; `min`/`max`/`exact`/`match` append their parameter to the
//! message the way the templates expect.

use regex::Regex;

use crate::config::Config;
use crate::form::PeerValues;

/// Pattern for `email`. Fixed rather than configured.
const EMAIL_PATTERN: &str = r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#;

/// The special-character class accepted by `alphaNumericSpecial`.
const SPECIAL_CHARS: &str = r"!@#$%^&*()_+[]<>\/|{}-?=,";

/// Characters besides letters and digits that may open an
/// `alphaNumericSpecial` value.
const SPECIAL_LEAD_CHARS: &str = "!@#$%^&*()_+";

/// Characters a phone number may contain.
const PHONE_CHARS: &str = "+0123456789";

/// Context handed to every check: the engine configuration plus the
/// peer-value lookup that cross-field rules resolve against.
pub struct CheckContext<'a> {
    pub config: &'a Config,
    pub peers: &'a dyn PeerValues,
}

/// The built-in checks, dispatched by rule-string name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinCheck {
    Required,
    AlphaNumeric,
    AlphaNumericSpecial,
    Numeric,
    Decimal,
    Min,
    Max,
    Exact,
    IdNumber,
    Match,
    Date,
    DateTime,
    Email,
    PhoneNumber,
}

impl BuiltinCheck {
    /// Resolve a rule-string method name to a built-in check.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "required" => Some(Self::Required),
            "alphaNumeric" => Some(Self::AlphaNumeric),
            "alphaNumericSpecial" => Some(Self::AlphaNumericSpecial),
            "numeric" => Some(Self::Numeric),
            "decimal" => Some(Self::Decimal),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "exact" => Some(Self::Exact),
            "idNumber" => Some(Self::IdNumber),
            "match" => Some(Self::Match),
            "date" => Some(Self::Date),
            "datetime" => Some(Self::DateTime),
            "email" => Some(Self::Email),
            "phoneNumber" => Some(Self::PhoneNumber),
            _ => None,
        }
    }

    /// The rule-string spelling of this check, also its message-table key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::AlphaNumeric => "alphaNumeric",
            Self::AlphaNumericSpecial => "alphaNumericSpecial",
            Self::Numeric => "numeric",
            Self::Decimal => "decimal",
            Self::Min => "min",
            Self::Max => "max",
            Self::Exact => "exact",
            Self::IdNumber => "idNumber",
            Self::Match => "match",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
        }
    }

    /// Run the check against a value; `None` means pass.
    ///
    /// `min`/`max`/`exact` with a parameter that does not parse as an
    /// integer always pass. `date`/`datetime` with no configured pattern
    /// entry always pass. Length checks count characters, not bytes.
    pub fn run(self, value: &str, param: &str, ctx: &CheckContext<'_>) -> Option<String> {
        let pass = match self {
            Self::Required => !value.is_empty(),
            Self::AlphaNumeric => has_digit(value) && has_letter(value),
            Self::AlphaNumericSpecial => {
                has_digit(value)
                    && has_letter(value)
                    && value.chars().any(|c| SPECIAL_CHARS.contains(c))
                    && value
                        .chars()
                        .next()
                        .is_some_and(|c| c.is_ascii_alphanumeric() || SPECIAL_LEAD_CHARS.contains(c))
            }
            Self::Numeric => !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()),
            Self::Decimal => is_decimal(value),
            Self::Min => match parse_limit(param) {
                Some(limit) => char_len(value) >= limit,
                None => true,
            },
            Self::Max => match parse_limit(param) {
                Some(limit) => char_len(value) <= limit,
                None => true,
            },
            Self::Exact => match parse_limit(param) {
                Some(limit) => char_len(value) == limit,
                None => true,
            },
            Self::IdNumber => char_len(value) == 13,
            Self::Match => ctx.peers.peer_value(param).is_some_and(|peer| peer == value),
            Self::Date | Self::DateTime => match ctx.config.patterns.get(self.name()) {
                Some(re) => re.is_match(value),
                None => true,
            },
            Self::Email => pattern_matches(EMAIL_PATTERN, value),
            Self::PhoneNumber => is_phone_number(value),
        };
        if pass {
            None
        } else {
            Some(self.failure_message(param, ctx.config))
        }
    }

    fn failure_message(self, param: &str, config: &Config) -> String {
        let template = config.message(self.name());
        match self {
            Self::Min | Self::Max | Self::Exact | Self::Match => format!("{template}{param}"),
            _ => template.to_string(),
        }
    }
}

fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

fn has_letter(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_alphabetic())
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn parse_limit(param: &str) -> Option<usize> {
    param.trim().parse().ok()
}

/// True when every char of `value` is in `allowed`.
fn allowed_chars(value: &str, allowed: &str) -> bool {
    value.chars().all(|c| allowed.contains(c))
}

/// Non-empty, at most one `.`, digits everywhere else. A lone `.` passes.
fn is_decimal(value: &str) -> bool {
    !value.is_empty()
        && value.chars().filter(|c| *c == '.').count() <= 1
        && value.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// At most one `+` and only as the first character, 10-14 characters total,
/// nothing but digits and `+`.
fn is_phone_number(value: &str) -> bool {
    let plus_count = value.chars().filter(|c| *c == '+').count();
    let misplaced_plus = value.char_indices().any(|(i, c)| c == '+' && i > 0);
    plus_count <= 1
        && !misplaced_plus
        && (10..=14).contains(&char_len(value))
        && allowed_chars(value, PHONE_CHARS)
}

/// Compile-and-match; a pattern that fails to compile never matches.
fn pattern_matches(pattern: &str, value: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => re.is_match(value),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::NoPeers;

    /// Single-entry peer lookup for `match` tests.
    struct OnePeer(&'static str, &'static str);

    impl PeerValues for OnePeer {
        fn peer_value(&self, name: &str) -> Option<String> {
            (name == self.0).then(|| self.1.to_string())
        }
    }

    fn run(check: BuiltinCheck, value: &str, param: &str) -> Option<String> {
        let config = Config::default();
        let ctx = CheckContext {
            config: &config,
            peers: &NoPeers,
        };
        check.run(value, param, &ctx)
    }

    fn passes(check: BuiltinCheck, value: &str, param: &str) -> bool {
        run(check, value, param).is_none()
    }

    #[test]
    fn names_round_trip() {
        for check in [
            BuiltinCheck::Required,
            BuiltinCheck::AlphaNumeric,
            BuiltinCheck::AlphaNumericSpecial,
            BuiltinCheck::Numeric,
            BuiltinCheck::Decimal,
            BuiltinCheck::Min,
            BuiltinCheck::Max,
            BuiltinCheck::Exact,
            BuiltinCheck::IdNumber,
            BuiltinCheck::Match,
            BuiltinCheck::Date,
            BuiltinCheck::DateTime,
            BuiltinCheck::Email,
            BuiltinCheck::PhoneNumber,
        ] {
            assert_eq!(BuiltinCheck::from_name(check.name()), Some(check));
        }
        assert_eq!(BuiltinCheck::from_name("bogus"), None);
    }

    #[test]
    fn required_fails_only_on_empty() {
        assert!(!passes(BuiltinCheck::Required, "", ""));
        assert!(passes(BuiltinCheck::Required, "x", ""));
        // No trimming: whitespace counts as content.
        assert!(passes(BuiltinCheck::Required, "   ", ""));
    }

    #[test]
    fn required_failure_uses_configured_message() {
        assert_eq!(
            run(BuiltinCheck::Required, "", "").as_deref(),
            Some("This field cannot be empty")
        );
    }

    #[test]
    fn alpha_numeric_needs_letter_and_digit() {
        assert!(passes(BuiltinCheck::AlphaNumeric, "a1", ""));
        assert!(passes(BuiltinCheck::AlphaNumeric, "x9y", ""));
        assert!(!passes(BuiltinCheck::AlphaNumeric, "abc", ""));
        assert!(!passes(BuiltinCheck::AlphaNumeric, "123", ""));
        assert!(!passes(BuiltinCheck::AlphaNumeric, "", ""));
    }

    #[test]
    fn alpha_numeric_special_needs_all_three_classes() {
        assert!(passes(BuiltinCheck::AlphaNumericSpecial, "a1!", ""));
        assert!(passes(BuiltinCheck::AlphaNumericSpecial, "Passw0rd!", ""));
        assert!(!passes(BuiltinCheck::AlphaNumericSpecial, "a1", ""));
        assert!(!passes(BuiltinCheck::AlphaNumericSpecial, "abc!", ""));
        assert!(!passes(BuiltinCheck::AlphaNumericSpecial, "123!", ""));
    }

    #[test]
    fn alpha_numeric_special_restricts_leading_character() {
        // `,` is in the special class but not an allowed opener.
        assert!(!passes(BuiltinCheck::AlphaNumericSpecial, ",a1!", ""));
        assert!(passes(BuiltinCheck::AlphaNumericSpecial, "!a1,", ""));
    }

    #[test]
    fn numeric_requires_digits_only() {
        assert!(passes(BuiltinCheck::Numeric, "0123456789", ""));
        assert!(!passes(BuiltinCheck::Numeric, "", ""));
        assert!(!passes(BuiltinCheck::Numeric, "12a", ""));
        assert!(!passes(BuiltinCheck::Numeric, "1.5", ""));
    }

    #[test]
    fn decimal_allows_one_dot() {
        assert!(passes(BuiltinCheck::Decimal, "1.5", ""));
        assert!(passes(BuiltinCheck::Decimal, "15", ""));
        assert!(passes(BuiltinCheck::Decimal, ".5", ""));
        assert!(passes(BuiltinCheck::Decimal, "5.", ""));
        assert!(passes(BuiltinCheck::Decimal, ".", ""));
        assert!(!passes(BuiltinCheck::Decimal, "", ""));
        assert!(!passes(BuiltinCheck::Decimal, "1.2.3", ""));
        assert!(!passes(BuiltinCheck::Decimal, "1,5", ""));
    }

    #[test]
    fn min_boundary() {
        assert!(!passes(BuiltinCheck::Min, "abcd", "5"));
        assert!(passes(BuiltinCheck::Min, "abcde", "5"));
        assert!(passes(BuiltinCheck::Min, "abcdef", "5"));
    }

    #[test]
    fn max_boundary() {
        assert!(passes(BuiltinCheck::Max, "abcde", "5"));
        assert!(!passes(BuiltinCheck::Max, "abcdef", "5"));
    }

    #[test]
    fn exact_requires_equality() {
        assert!(!passes(BuiltinCheck::Exact, "abcd", "5"));
        assert!(passes(BuiltinCheck::Exact, "abcde", "5"));
        assert!(!passes(BuiltinCheck::Exact, "abcdef", "5"));
    }

    #[test]
    fn malformed_limit_param_always_passes() {
        assert!(passes(BuiltinCheck::Min, "", "abc"));
        assert!(passes(BuiltinCheck::Max, "whatever", ""));
        assert!(passes(BuiltinCheck::Exact, "whatever", "5x"));
    }

    #[test]
    fn limit_messages_append_the_param() {
        assert_eq!(
            run(BuiltinCheck::Min, "abc", "5").as_deref(),
            Some("This field has a minimum length of 5")
        );
        assert_eq!(
            run(BuiltinCheck::Exact, "abc", "13").as_deref(),
            Some("This field must be the exact length of 13")
        );
    }

    #[test]
    fn id_number_is_exactly_thirteen_chars() {
        assert!(passes(BuiltinCheck::IdNumber, "8001015009087", ""));
        assert!(!passes(BuiltinCheck::IdNumber, "800101500908", ""));
        assert!(!passes(BuiltinCheck::IdNumber, "80010150090877", ""));
    }

    #[test]
    fn match_compares_against_peer_value() {
        let config = Config::default();
        let peers = OnePeer("password", "hunter42");
        let ctx = CheckContext {
            config: &config,
            peers: &peers,
        };
        assert_eq!(BuiltinCheck::Match.run("hunter42", "password", &ctx), None);
        assert_eq!(
            BuiltinCheck::Match.run("Hunter42", "password", &ctx).as_deref(),
            Some("This field value must match the value of password")
        );
    }

    #[test]
    fn match_fails_when_peer_is_missing() {
        assert!(!passes(BuiltinCheck::Match, "anything", "no-such-field"));
    }

    #[test]
    fn date_matches_default_pattern() {
        assert!(passes(BuiltinCheck::Date, "2026-08-05", ""));
        assert!(passes(BuiltinCheck::Date, "2026-12-31", ""));
        assert!(!passes(BuiltinCheck::Date, "2026-13-05", ""));
        assert!(!passes(BuiltinCheck::Date, "2026-00-05", ""));
        assert!(!passes(BuiltinCheck::Date, "2026-08-32", ""));
        assert!(!passes(BuiltinCheck::Date, "05-08-2026", ""));
        assert!(!passes(BuiltinCheck::Date, "2026-08-05 10:00:00", ""));
    }

    #[test]
    fn datetime_is_pattern_only() {
        assert!(passes(BuiltinCheck::DateTime, "2026-08-05 10:30:00", ""));
        assert!(passes(BuiltinCheck::DateTime, "2026-08-05 9:30:00", ""));
        assert!(!passes(BuiltinCheck::DateTime, "2026-08-05", ""));
        assert!(!passes(BuiltinCheck::DateTime, "2026-08-05 10:61:00", ""));
    }

    #[test]
    fn date_without_pattern_entry_passes() {
        let mut config = Config::default();
        config.patterns.remove("date");
        let ctx = CheckContext {
            config: &config,
            peers: &NoPeers,
        };
        assert_eq!(BuiltinCheck::Date.run("not a date", "", &ctx), None);
    }

    #[test]
    fn email_accepts_common_shapes() {
        assert!(passes(BuiltinCheck::Email, "someone@example.com", ""));
        assert!(passes(BuiltinCheck::Email, "first.last@sub.example.co.za", ""));
        assert!(passes(BuiltinCheck::Email, "user@[127.0.0.1]", ""));
    }

    #[test]
    fn email_rejects_malformed_shapes() {
        assert!(!passes(BuiltinCheck::Email, "", ""));
        assert!(!passes(BuiltinCheck::Email, "plainaddress", ""));
        assert!(!passes(BuiltinCheck::Email, "missing@tld", ""));
        assert!(!passes(BuiltinCheck::Email, "two@@example.com", ""));
        assert!(!passes(BuiltinCheck::Email, "spaces in@example.com", ""));
    }

    #[test]
    fn phone_number_rules() {
        assert!(passes(BuiltinCheck::PhoneNumber, "+27821234567", ""));
        assert!(passes(BuiltinCheck::PhoneNumber, "0821234567", ""));
        // Plus anywhere but first.
        assert!(!passes(BuiltinCheck::PhoneNumber, "27+821234567", ""));
        // Two pluses.
        assert!(!passes(BuiltinCheck::PhoneNumber, "+27+82123456", ""));
        // Too short / too long.
        assert!(!passes(BuiltinCheck::PhoneNumber, "082123456", ""));
        assert!(!passes(BuiltinCheck::PhoneNumber, "082123456789012", ""));
        // Disallowed characters.
        assert!(!passes(BuiltinCheck::PhoneNumber, "082-123-4567", ""));
    }
}
