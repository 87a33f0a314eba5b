//! List header aggregate.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::config::{DuplicatePolicy, ParseConfig, ParseMode};
use crate::error::{Error, Result};
use crate::field::FieldName;
use crate::iri::Iri;
use crate::lines::field_lines;
use crate::post::{Post, bracket_list};
use crate::scan::{extract_iris, require_iris};

/// The RFC 2369 list header fields of one message.
///
/// Every field is optional. A list field holding an empty vector is treated
/// exactly like an absent one and is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header<I = Url> {
    /// `List-Help`: where to get help about the list.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub help: Option<I>,
    /// `List-Unsubscribe`: how to leave the list.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub unsubscribe: Option<Vec<I>>,
    /// `List-Subscribe`: how to join the list.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub subscribe: Option<Vec<I>>,
    /// `List-Post`: where to post, or `NO`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub post: Option<Post<I>>,
    /// `List-Owner`: how to reach the list owner.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub owner: Option<Vec<I>>,
    /// `List-Archive`: where the list archive lives.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub archive: Option<I>,
}

impl<I> Default for Header<I> {
    fn default() -> Self {
        Self {
            help: None,
            unsubscribe: None,
            subscribe: None,
            post: None,
            owner: None,
            archive: None,
        }
    }
}

impl<I: Iri> Header<I> {
    /// Creates a header with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `List-Help`.
    #[must_use]
    pub fn with_help(mut self, iri: I) -> Self {
        self.help = Some(iri);
        self
    }

    /// Sets `List-Unsubscribe`.
    #[must_use]
    pub fn with_unsubscribe(mut self, iris: Vec<I>) -> Self {
        self.unsubscribe = Some(iris);
        self
    }

    /// Sets `List-Subscribe`.
    #[must_use]
    pub fn with_subscribe(mut self, iris: Vec<I>) -> Self {
        self.subscribe = Some(iris);
        self
    }

    /// Sets `List-Post`.
    #[must_use]
    pub fn with_post(mut self, post: Post<I>) -> Self {
        self.post = Some(post);
        self
    }

    /// Sets `List-Owner`.
    #[must_use]
    pub fn with_owner(mut self, iris: Vec<I>) -> Self {
        self.owner = Some(iris);
        self
    }

    /// Sets `List-Archive`.
    #[must_use]
    pub fn with_archive(mut self, iri: I) -> Self {
        self.archive = Some(iri);
        self
    }

    /// Returns true if the field is set, even if it would not be serialized.
    #[must_use]
    pub const fn contains(&self, field: FieldName) -> bool {
        match field {
            FieldName::Help => self.help.is_some(),
            FieldName::Unsubscribe => self.unsubscribe.is_some(),
            FieldName::Subscribe => self.subscribe.is_some(),
            FieldName::Post => self.post.is_some(),
            FieldName::Owner => self.owner.is_some(),
            FieldName::Archive => self.archive.is_some(),
        }
    }

    /// Returns true if serializing would produce no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Renders one field's value as it appears after `Name: `.
    ///
    /// Returns `None` for absent fields and empty lists.
    #[must_use]
    pub fn value(&self, field: FieldName) -> Option<String> {
        match field {
            FieldName::Help => self
                .help
                .as_ref()
                .map(|iri| bracket_list(std::slice::from_ref(iri))),
            FieldName::Unsubscribe => render_list(self.unsubscribe.as_deref()),
            FieldName::Subscribe => render_list(self.subscribe.as_deref()),
            FieldName::Post => self
                .post
                .as_ref()
                .filter(|post| !post.is_empty())
                .map(ToString::to_string),
            FieldName::Owner => render_list(self.owner.as_deref()),
            FieldName::Archive => self
                .archive
                .as_ref()
                .map(|iri| bracket_list(std::slice::from_ref(iri))),
        }
    }

    /// Iterates over the fields that would be serialized, in wire order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, String)> + '_ {
        FieldName::ALL
            .into_iter()
            .filter_map(|field| self.value(field).map(|value| (field, value)))
    }

    /// Returns the serialized fields keyed by their wire name.
    ///
    /// Values are what the line serializer writes after `": "`.
    #[must_use]
    pub fn to_field_map(&self) -> HashMap<&'static str, String> {
        self.fields()
            .map(|(field, value)| (field.as_str(), value))
            .collect()
    }

    /// Serializes the header as CRLF-terminated lines.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Parses list header fields from raw header lines.
    ///
    /// Unknown fields, lines without a colon and invalid IRIs are skipped,
    /// so this never returns an error. Use [`Header::parse_with`] and
    /// [`ParseConfig::strict`] to reject malformed values instead.
    ///
    /// # Errors
    ///
    /// Never fails under the default configuration.
    pub fn parse(input: &[u8]) -> Result<Self> {
        Self::parse_with(input, &ParseConfig::default())
    }

    /// Parses list header fields using an explicit configuration.
    ///
    /// # Errors
    ///
    /// In [`ParseMode::Strict`], returns the first error produced by a
    /// recognized field's value.
    pub fn parse_with(input: &[u8], config: &ParseConfig) -> Result<Self> {
        let mut header = Self::new();

        for line in field_lines(input) {
            let Some(field) = FieldName::from_bytes(line.name) else {
                tracing::trace!(
                    name = %String::from_utf8_lossy(line.name),
                    "ignoring unknown field"
                );
                continue;
            };

            if config.duplicates == DuplicatePolicy::FirstWins && header.contains(field) {
                tracing::debug!(%field, "ignoring repeated field");
                continue;
            }

            header.apply(field, line.value, config.mode)?;
        }

        Ok(header)
    }

    /// Parses one field value into its slot.
    fn apply(&mut self, field: FieldName, value: &[u8], mode: ParseMode) -> Result<()> {
        match field {
            FieldName::Help => store(&mut self.help, field, first(iris(value, mode)?)),
            FieldName::Unsubscribe => {
                store(&mut self.unsubscribe, field, non_empty(iris(value, mode)?));
            }
            FieldName::Subscribe => {
                store(&mut self.subscribe, field, non_empty(iris(value, mode)?));
            }
            FieldName::Post => store(&mut self.post, field, post(value, mode)?),
            FieldName::Owner => store(&mut self.owner, field, non_empty(iris(value, mode)?)),
            FieldName::Archive => store(&mut self.archive, field, first(iris(value, mode)?)),
        }
        Ok(())
    }
}

fn render_list<I: Iri>(iris: Option<&[I]>) -> Option<String> {
    iris.filter(|iris| !iris.is_empty()).map(bracket_list)
}

fn iris<I: Iri>(value: &[u8], mode: ParseMode) -> Result<Vec<I>> {
    match mode {
        ParseMode::Tolerant => Ok(extract_iris(value)),
        ParseMode::Strict => require_iris(value),
    }
}

fn post<I: Iri>(value: &[u8], mode: ParseMode) -> Result<Option<Post<I>>> {
    match mode {
        ParseMode::Tolerant => Ok(Post::parse_lenient(value)),
        ParseMode::Strict => Post::parse(value).map(Some),
    }
}

/// Single-IRI fields keep the first entry and drop the rest.
fn first<T>(items: Vec<T>) -> Option<T> {
    items.into_iter().next()
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

/// Stores a parsed value; `None` leaves any earlier value in place.
fn store<T>(slot: &mut Option<T>, field: FieldName, value: Option<T>) {
    let Some(value) = value else {
        tracing::debug!(%field, "no usable value, leaving field unset");
        return;
    };
    if slot.replace(value).is_some() {
        tracing::debug!(%field, "repeated field replaces earlier value");
    }
}

impl<I: Iri> fmt::Display for Header<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, value) in self.fields() {
            write!(f, "{field}: {value}\r\n")?;
        }
        Ok(())
    }
}

impl<I: Iri> FromStr for Header<I> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}
