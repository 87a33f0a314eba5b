//! `List-Post` field value.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{Error, Result};
use crate::iri::{Iri, escape_angle_brackets};
use crate::scan::{extract_iris, require_iris, trim_wsp};

/// Value of the `List-Post` field.
///
/// RFC 2369 lets a list say that posting is not allowed with the literal
/// `NO`, which has no angle brackets of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Post<I = Url> {
    /// Posting addresses, in preference order.
    Uris(Vec<I>),
    /// Posting to the list is not allowed.
    NoPosting,
}

/// Returns true if the trimmed value is the `NO` marker.
fn is_no_marker(value: &[u8]) -> bool {
    value.eq_ignore_ascii_case(b"NO")
}

impl<I> Post<I> {
    /// Returns the posting addresses, empty for [`Post::NoPosting`].
    #[must_use]
    pub fn uris(&self) -> &[I] {
        match self {
            Self::Uris(uris) => uris,
            Self::NoPosting => &[],
        }
    }

    /// Returns true if posting is not allowed.
    #[must_use]
    pub const fn is_no_posting(&self) -> bool {
        matches!(self, Self::NoPosting)
    }

    /// Returns true if serializing would produce no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Uris(uris) if uris.is_empty())
    }
}

impl<I: Iri> Post<I> {
    /// Parses a `List-Post` value.
    ///
    /// The value is trimmed, then compared against `NO` ignoring case. Any
    /// other value must contain at least one `<iri>` entry; text outside the
    /// brackets is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] for a blank value, [`Error::InvalidIri`] if a
    /// bracketed entry is not a valid IRI, and [`Error::NoUris`] if nothing
    /// was bracketed.
    pub fn parse(input: &[u8]) -> Result<Self> {
        let value = trim_wsp(input);
        if value.is_empty() {
            return Err(Error::Empty);
        }
        if is_no_marker(value) {
            return Ok(Self::NoPosting);
        }
        require_iris(value).map(Self::Uris)
    }

    /// Parses a `List-Post` value, dropping entries that are not valid IRIs.
    ///
    /// Returns `None` when the value is neither `NO` nor has a usable IRI.
    pub(crate) fn parse_lenient(input: &[u8]) -> Option<Self> {
        let value = trim_wsp(input);
        if is_no_marker(value) {
            return Some(Self::NoPosting);
        }
        let uris = extract_iris(value);
        (!uris.is_empty()).then_some(Self::Uris(uris))
    }

    /// Serializes the value as it appears after `List-Post: `.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

/// Renders `<a>, <b>, ...`.
pub(crate) fn bracket_list<I: Iri>(iris: &[I]) -> String {
    iris.iter()
        .map(|iri| format!("<{}>", escape_angle_brackets(iri.as_iri_str())))
        .collect::<Vec<_>>()
        .join(", ")
}

impl<I: Iri> fmt::Display for Post<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPosting => f.write_str("NO"),
            Self::Uris(uris) => f.write_str(&bracket_list(uris)),
        }
    }
}

impl<I: Iri> FromStr for Post<I> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}

impl<I: Iri> From<Vec<I>> for Post<I> {
    fn from(uris: Vec<I>) -> Self {
        Self::Uris(uris)
    }
}
