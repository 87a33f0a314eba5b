//! List header field names.

use std::fmt;
use std::str::FromStr;

use crate::scan::trim_wsp;

/// One of the six RFC 2369 list header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldName {
    /// `List-Help`.
    Help,
    /// `List-Unsubscribe`.
    Unsubscribe,
    /// `List-Subscribe`.
    Subscribe,
    /// `List-Post`.
    Post,
    /// `List-Owner`.
    Owner,
    /// `List-Archive`.
    Archive,
}

impl FieldName {
    /// All fields, in the order they are serialized.
    pub const ALL: [Self; 6] = [
        Self::Help,
        Self::Unsubscribe,
        Self::Subscribe,
        Self::Post,
        Self::Owner,
        Self::Archive,
    ];

    /// Returns the field name as written on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Help => "List-Help",
            Self::Unsubscribe => "List-Unsubscribe",
            Self::Subscribe => "List-Subscribe",
            Self::Post => "List-Post",
            Self::Owner => "List-Owner",
            Self::Archive => "List-Archive",
        }
    }

    /// Looks up a field by name, ignoring ASCII case.
    #[must_use]
    pub fn from_bytes(name: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().as_bytes().eq_ignore_ascii_case(name))
    }

    /// Returns true if the field holds a list of IRIs.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::Unsubscribe | Self::Subscribe | Self::Owner)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a list header field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown list header field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(trim_wsp(s.as_bytes())).ok_or_else(|| UnknownField(s.to_string()))
    }
}
