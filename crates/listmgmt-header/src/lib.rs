//! # listmgmt-header
//!
//! Parser and serializer for the RFC 2369 mailing list management header
//! fields.
//!
//! ## Features
//!
//! - **Typed fields**: `List-Help`, `List-Unsubscribe`, `List-Subscribe`,
//!   `List-Post`, `List-Owner` and `List-Archive` as one [`Header`] value
//! - **Round trips**: serialized headers parse back to an equal value
//! - **Tolerant parsing**: unknown fields, comments and broken entries are
//!   skipped; [`ParseConfig::strict`] turns them into errors
//! - **Pluggable identifiers**: fields hold any [`Iri`] type, [`url::Url`]
//!   by default
//!
//! ## Quick Start
//!
//! ### Building Headers
//!
//! ```
//! use listmgmt_header::{Header, Post, Url};
//!
//! let header = Header::new()
//!     .with_help(Url::parse("https://example.com/help")?)
//!     .with_post(Post::NoPosting);
//!
//! assert_eq!(
//!     header.to_string(),
//!     "List-Help: <https://example.com/help>\r\nList-Post: NO\r\n"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Parsing Headers
//!
//! ```
//! use listmgmt_header::Header;
//!
//! let raw = b"List-Post: <mailto:list@example.com> (Postings are Moderated)\r\n\
//!             X-Mailer: example\r\n";
//!
//! let header: Header = Header::parse(raw)?;
//! assert_eq!(header.post.map(|p| p.uris().len()), Some(1));
//! # Ok::<(), listmgmt_header::Error>(())
//! ```
//!
//! ### Strict Parsing
//!
//! ```
//! use listmgmt_header::{Error, Header, ParseConfig, Url};
//!
//! let raw = b"List-Unsubscribe: <not a url>\r\n";
//! let result = Header::<Url>::parse_with(raw, &ParseConfig::strict());
//! assert_eq!(result, Err(Error::InvalidIri("not a url".into())));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod field;
mod header;
mod iri;
mod lines;
mod post;
mod scan;

pub use config::{DuplicatePolicy, ParseConfig, ParseMode};
pub use error::{Error, Result};
pub use field::{FieldName, UnknownField};
pub use header::Header;
pub use iri::Iri;
pub use post::Post;

pub use url::Url;
