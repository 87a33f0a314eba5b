//! Resource identifier abstraction.
//!
//! The codec never looks inside an identifier. It only needs to validate a
//! bracketed candidate and to get the canonical text back for serialization,
//! so both operations live behind the [`Iri`] trait. [`url::Url`] is the
//! default implementation.

use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;

use url::Url;

/// A validated resource identifier usable in list header fields.
///
/// Implementations must round-trip: parsing the string returned by
/// [`as_iri_str`](Iri::as_iri_str) yields an equal value. A literal `<` or
/// `>` in that string is written as `%3C` or `%3E`, since either would end
/// the bracketed entry early.
pub trait Iri: Clone + Eq + Hash + fmt::Debug {
    /// Error returned when a string is not a valid identifier.
    type Error: fmt::Display;

    /// Parses and validates an identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` is not a valid identifier.
    fn parse_iri(s: &str) -> Result<Self, Self::Error>;

    /// Returns the canonical form written between `<` and `>`.
    fn as_iri_str(&self) -> &str;
}

impl Iri for Url {
    type Error = url::ParseError;

    /// Opaque paths such as `mailto:` keep `<` and `>` unencoded, so those
    /// are percent-encoded and the result parsed again.
    fn parse_iri(s: &str) -> Result<Self, Self::Error> {
        let url = Self::parse(s)?;
        if !url.as_str().contains(['<', '>']) {
            return Ok(url);
        }
        Self::parse(&escape_angle_brackets(url.as_str()))
    }

    fn as_iri_str(&self) -> &str {
        self.as_str()
    }
}

/// Percent-encodes `<` and `>` so the text can sit between angle brackets.
pub(crate) fn escape_angle_brackets(s: &str) -> Cow<'_, str> {
    if !s.contains(['<', '>']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace('<', "%3C").replace('>', "%3E"))
}
