//! Paginated product searches.
//!
//! Page numbering follows the wire contract exactly: similar-product
//! search pages are 1-based, every other search is 0-based.

use crate::connection::Connection;
use crate::error::Result;
use crate::models::{Language, ProductList};
use crate::request::QueryBuilder;
use crate::response;

// ---------------------------------------------------------------------------
// SearchParams
// ---------------------------------------------------------------------------

/// Optional filters shared by all search operations.
///
/// When `None`, the operation's own default applies: language `Any` for
/// name searches, `English` for prefix search; page 1 for similar-product
/// search, page 0 otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchParams {
    pub language: Option<Language>,
    pub page: Option<u32>,
}

// ---------------------------------------------------------------------------
// SearchQuery
// ---------------------------------------------------------------------------

/// Query interface for the paginated search operations.
pub struct SearchQuery<'a> {
    conn: &'a Connection,
}

impl<'a> SearchQuery<'a> {
    /// Create a new `SearchQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Search products by name (exact-word match on the service side).
    ///
    /// Returns an empty list when the page has no results; an empty page is
    /// a successful call, not a failure.
    pub fn products(&self, name: &str, params: SearchParams) -> Result<ProductList> {
        let mut query = QueryBuilder::new("product-search");
        query
            .term("name", name)
            .language(params.language.unwrap_or(Language::Any))
            .page(params.page.unwrap_or(0));
        response::product_list(self.conn.call(&query)?)
    }

    /// Fuzzy search for products similar to the given name.
    ///
    /// Unlike the other searches, pages are 1-based.
    pub fn similar(&self, name: &str, params: SearchParams) -> Result<ProductList> {
        let mut query = QueryBuilder::new("similar-product-search");
        query
            .term("name", name)
            .language(params.language.unwrap_or(Language::Any))
            .page(params.page.unwrap_or(1));
        response::product_list(self.conn.call(&query)?)
    }

    /// Search products by name within one category.
    pub fn category(&self, category: u32, name: &str, params: SearchParams) -> Result<ProductList> {
        let mut query = QueryBuilder::new("category-search");
        query
            .param("category", &category.to_string())
            .term("name", name)
            .language(params.language.unwrap_or(Language::Any))
            .page(params.page.unwrap_or(0));
        response::product_list(self.conn.call(&query)?)
    }

    /// List all products whose barcode starts with the given prefix.
    pub fn prefix(&self, prefix: &str, params: SearchParams) -> Result<ProductList> {
        let mut query = QueryBuilder::new("barcode-prefix-search");
        query
            .param("prefix", prefix)
            .language(params.language.unwrap_or(Language::English))
            .page(params.page.unwrap_or(0));
        response::product_list(self.conn.call(&query)?)
    }
}
