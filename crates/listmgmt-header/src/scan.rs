//! Bracketed IRI scanning.
//!
//! RFC 2369 field values are lists of `<iri>` entries, optionally followed by
//! free-text comments. Everything outside the angle brackets is ignored so
//! that separators and annotations never affect the result.

use crate::error::{Error, Result};
use crate::iri::Iri;

/// Trims spaces and horizontal tabs from both ends.
///
/// Unlike `trim_ascii`, CR, LF and form feed are kept.
pub fn trim_wsp(mut bytes: &[u8]) -> &[u8] {
    while let [b' ' | b'\t', rest @ ..] = bytes {
        bytes = rest;
    }
    while let [rest @ .., b' ' | b'\t'] = bytes {
        bytes = rest;
    }
    bytes
}

/// Iterator over the non-empty contents of `<...>` pairs.
///
/// A `<` always starts a fresh candidate, so `<a<b>` yields `b`. A `>`
/// outside brackets and an unterminated trailing `<` are ignored.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    input: &'a [u8],
    pos: usize,
    open: Option<usize>,
}

impl<'a> Candidates<'a> {
    /// Creates a scanner over a field value.
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            open: None,
        }
    }
}

impl<'a> Iterator for Candidates<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&byte) = self.input.get(self.pos) {
            self.pos += 1;
            match byte {
                b'<' => self.open = Some(self.pos),
                b'>' => {
                    if let Some(start) = self.open.take() {
                        let candidate = &self.input[start..self.pos - 1];
                        if !candidate.is_empty() {
                            return Some(candidate);
                        }
                    }
                }
                _ => {}
            }
        }
        None
    }
}

/// Parses one candidate, returning the lossy text on failure.
fn parse_candidate<I: Iri>(candidate: &[u8]) -> std::result::Result<I, String> {
    let Ok(text) = std::str::from_utf8(candidate) else {
        return Err(String::from_utf8_lossy(candidate).into_owned());
    };
    I::parse_iri(text).map_err(|err| {
        tracing::trace!(candidate = text, %err, "IRI rejected");
        text.to_string()
    })
}

/// Extracts every bracketed IRI, dropping entries the IRI parser rejects.
pub fn extract_iris<I: Iri>(value: &[u8]) -> Vec<I> {
    Candidates::new(value)
        .filter_map(|candidate| match parse_candidate(candidate) {
            Ok(iri) => Some(iri),
            Err(text) => {
                tracing::debug!(candidate = %text, "dropping invalid IRI");
                None
            }
        })
        .collect()
}

/// Extracts every bracketed IRI, failing on the first rejected entry.
///
/// # Errors
///
/// Returns [`Error::InvalidIri`] with the candidate text if any bracketed
/// entry is not a valid IRI.
pub fn extract_iris_strict<I: Iri>(value: &[u8]) -> Result<Vec<I>> {
    Candidates::new(value)
        .map(|candidate| parse_candidate(candidate).map_err(Error::InvalidIri))
        .collect()
}

/// Strict extraction of a required, non-empty IRI list from a trimmed value.
///
/// # Errors
///
/// Returns [`Error::Empty`] for an empty value, [`Error::InvalidIri`] for a
/// rejected entry and [`Error::NoUris`] when nothing was bracketed.
pub fn require_iris<I: Iri>(value: &[u8]) -> Result<Vec<I>> {
    if value.is_empty() {
        return Err(Error::Empty);
    }
    let iris = extract_iris_strict(value)?;
    if iris.is_empty() {
        return Err(Error::NoUris(String::from_utf8_lossy(value).into_owned()));
    }
    Ok(iris)
}
