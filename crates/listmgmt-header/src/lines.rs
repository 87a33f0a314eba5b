//! Header line tokenizer.

use crate::scan::trim_wsp;

/// A `name: value` pair with surrounding spaces and tabs removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLine<'a> {
    /// Field name as written.
    pub name: &'a [u8],
    /// Field value, without the leading colon.
    pub value: &'a [u8],
}

impl<'a> FieldLine<'a> {
    /// Splits a line at its first colon.
    ///
    /// Returns `None` if the line has no colon.
    #[must_use]
    pub fn split(line: &'a [u8]) -> Option<Self> {
        let colon = line.iter().position(|&b| b == b':')?;
        Some(Self {
            name: trim_wsp(&line[..colon]),
            value: trim_wsp(&line[colon + 1..]),
        })
    }
}

/// Iterates over the field lines in `input`.
///
/// Either CR or LF ends a line and runs of terminators never produce empty
/// lines. Lines without a colon are skipped.
pub fn field_lines(input: &[u8]) -> impl Iterator<Item = FieldLine<'_>> {
    input
        .split(|&b| b == b'\r' || b == b'\n')
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let field = FieldLine::split(line);
            if field.is_none() {
                tracing::trace!(
                    line = %String::from_utf8_lossy(line),
                    "skipping line without colon"
                );
            }
            field
        })
}
