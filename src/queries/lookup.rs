//! Single-identifier lookups (EAN barcode, ISBN-10).

use crate::connection::Connection;
use crate::error::Result;
use crate::models::{Language, Product};
use crate::request::QueryBuilder;
use crate::response;

/// Query interface for single-product lookups.
pub struct LookupQuery<'a> {
    conn: &'a Connection,
}

impl<'a> LookupQuery<'a> {
    /// Create a new `LookupQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Look up one product by its EAN barcode.
    ///
    /// `language` filters the result language and defaults to English.
    /// Returns `Ok(None)` when the code is unknown to the service.
    pub fn by_ean(&self, ean: &str, language: Option<Language>) -> Result<Option<Product>> {
        let mut query = QueryBuilder::new("barcode-lookup");
        query
            .param("ean", ean)
            .language(language.unwrap_or(Language::English));

        let body = self.conn.call(&query)?;
        match response::single_entry(&body)? {
            None => Ok(None),
            Some(entry) => Ok(Some(response::product(entry)?)),
        }
    }

    /// Look up one book by its 10-digit ISBN.
    pub fn by_isbn(&self, isbn: &str) -> Result<Option<Product>> {
        let mut query = QueryBuilder::new("barcode-lookup");
        query.param("isbn", isbn);

        let body = self.conn.call(&query)?;
        match response::single_entry(&body)? {
            None => Ok(None),
            Some(entry) => Ok(Some(response::product(entry)?)),
        }
    }
}
