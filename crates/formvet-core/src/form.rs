//! Form and field models.
//!
//! A `Form` is an explicit handle over its tracked fields; the engine never
//! discovers fields on its own. The form doubles as the peer-value lookup
//! that cross-field rules (`match:other`) resolve against, first matching
//! name wins.

use serde::{Deserialize, Serialize};

/// One tracked field: identity, rule string, and current raw value.
///
/// `value` carries the field's textual content. Hosts binding
/// content-bearing elements (anything that is not a plain input) must strip
/// nested child markup before handing the text over; the engine only ever
/// sees plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub rules: String,
    #[serde(default)]
    pub value: String,
    /// Disabled fields skip validation entirely and count as valid.
    #[serde(default)]
    pub disabled: bool,
    /// Show error text for this field even when the engine-wide
    /// `display_text` flag is off.
    #[serde(default)]
    pub force_error_text: bool,
}

/// Peer-value lookup used by cross-field rules.
pub trait PeerValues {
    /// Current value of the named field, if one exists.
    fn peer_value(&self, name: &str) -> Option<String>;
}

/// Lookup with no peers; `match` rules always fail against it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPeers;

impl PeerValues for NoPeers {
    fn peer_value(&self, _name: &str) -> Option<String> {
        None
    }
}

/// An ordered set of tracked fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Form {
    pub fields: Vec<Field>,
}

impl Form {
    #[must_use]
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// First field with the given name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl PeerValues for Form {
    fn peer_value(&self, name: &str) -> Option<String> {
        self.field(name).map(|field| field.value.clone())
    }
}
