//! Barcode utility operations: checksum verification, issuing country,
//! barcode image rendering.

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::request::QueryBuilder;
use crate::response;

/// Query interface for the per-barcode utility operations.
pub struct BarcodeQuery<'a> {
    conn: &'a Connection,
}

impl<'a> BarcodeQuery<'a> {
    /// Create a new `BarcodeQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Ask the service whether the barcode's check digit is valid.
    ///
    /// For offline validation without a network round trip, see
    /// [`checksum::validate`](crate::checksum::validate).
    pub fn verify_checksum(&self, ean: &str) -> Result<bool> {
        let mut query = QueryBuilder::new("verify-checksum");
        query.param("ean", ean);

        let body = self.conn.call(&query)?;
        match response::scalar(&body, "valid")? {
            Some(valid) => Ok(valid == "1"),
            None => Ok(false),
        }
    }

    /// Look up the country that issued the barcode's number range.
    ///
    /// Returns `Ok(None)` when the service has no answer for the code.
    pub fn issuing_country(&self, ean: &str) -> Result<Option<String>> {
        let mut query = QueryBuilder::new("issuing-country");
        query.param("ean", ean);

        let body = self.conn.call(&query)?;
        response::scalar(&body, "issuingCountry")
    }

    /// Render the barcode as a PNG image at the default size (102×50).
    ///
    /// The payload is the base64-encoded image data.
    pub fn image(&self, ean: &str) -> Result<Option<String>> {
        self.image_with_size(
            ean,
            config::DEFAULT_IMAGE_WIDTH,
            config::DEFAULT_IMAGE_HEIGHT,
        )
    }

    /// Render the barcode as a PNG image at the given pixel dimensions.
    pub fn image_with_size(&self, ean: &str, width: u32, height: u32) -> Result<Option<String>> {
        let mut query = QueryBuilder::new("barcode-image");
        query
            .param("ean", ean)
            .param("width", &width.to_string())
            .param("height", &height.to_string());

        let body = self.conn.call(&query)?;
        response::scalar(&body, "barcode")
    }
}
