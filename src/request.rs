//! Query string builder for EAN-Search API calls.
//!
//! Free-text values (product names, search terms) go through strict RFC 3986
//! percent-encoding; fixed-vocabulary values (barcodes, page numbers, language
//! codes) are appended verbatim. Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use eansearch_sdk::QueryBuilder;
//! let query = QueryBuilder::new("product-search")
//!     .term("name", "Banana boat")
//!     .language_code(99)
//!     .page(0)
//!     .build("my-token");
//! assert_eq!(
//!     query,
//!     "op=product-search&name=Banana%20boat&language=99&page=0&token=my-token&format=json"
//! );
//! ```

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config;
use crate::models::Language;

/// Everything outside the RFC 3986 unreserved set (`A-Z a-z 0-9 - _ . ~`)
/// is percent-encoded. Notably stricter than form encoding: space is `%20`,
/// never `+`.
const TERM_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a free-text query value per RFC 3986.
///
/// Unreserved characters pass through untouched, so a value that needs no
/// escaping comes back unchanged.
pub fn encode_term(value: &str) -> String {
    utf8_percent_encode(value, TERM_ESCAPE).to_string()
}

/// Builds the query string for one API operation.
///
/// Pairs are emitted in insertion order with the operation first; the
/// authentication token and the `format=json` flag are appended to every
/// query by [`build`](QueryBuilder::build).
pub struct QueryBuilder {
    op: String,
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    /// Create a builder for the given operation (e.g. `"barcode-lookup"`).
    pub fn new(op: &str) -> Self {
        Self {
            op: op.to_string(),
            pairs: Vec::new(),
        }
    }

    /// Add a raw `key=value` pair. The value is appended verbatim, so this
    /// is only for values with no characters needing escape (barcodes,
    /// numeric ids).
    pub fn param(&mut self, key: &str, value: &str) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a free-text pair, percent-encoding the value.
    pub fn term(&mut self, key: &str, value: &str) -> &mut Self {
        self.pairs.push((key.to_string(), encode_term(value)));
        self
    }

    /// Add the `language` filter.
    pub fn language(&mut self, language: Language) -> &mut Self {
        self.language_code(language.code())
    }

    /// Add the `language` filter from a raw wire code.
    pub fn language_code(&mut self, code: u32) -> &mut Self {
        self.pairs.push(("language".to_string(), code.to_string()));
        self
    }

    /// Add the `page` index.
    pub fn page(&mut self, page: u32) -> &mut Self {
        self.pairs.push(("page".to_string(), page.to_string()));
        self
    }

    /// Build the final query string: operation first, then the added pairs
    /// in order, then the token and output format.
    pub fn build(&self, token: &str) -> String {
        let mut parts = Vec::with_capacity(self.pairs.len() + 3);
        parts.push(format!("op={}", self.op));
        for (key, value) in &self.pairs {
            parts.push(format!("{}={}", key, value));
        }
        parts.push(format!("token={}", token));
        parts.push(format!("format={}", config::OUTPUT_FORMAT));
        parts.join("&")
    }
}
