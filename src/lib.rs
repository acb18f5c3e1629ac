//! EAN-Search SDK for Rust.
//!
//! Provides a blocking client for the EAN-Search barcode API: look up
//! products by EAN or ISBN, run paginated product searches, verify
//! checksums, resolve issuing countries and render barcode images.
//! Every operation is one synchronous HTTPS round trip; no state is kept
//! between calls beyond the authentication token.
//!
//! # Quick start
//!
//! ```no_run
//! use eansearch_sdk::EanSearch;
//!
//! let client = EanSearch::new("my-api-token").unwrap();
//!
//! // Look up a single barcode
//! if let Some(product) = client.lookup().by_ean("5099750442227", None).unwrap() {
//!     println!("{} is {}", product.ean, product.name);
//! }
//!
//! // Search by name
//! let hits = client.search().products("Bananaboat", Default::default()).unwrap();
//! println!("{} products found", hits.len());
//! ```

pub mod checksum;
pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod queries;
pub mod request;
mod response;

pub use connection::Connection;
pub use error::{EanSearchError, Result};
pub use models::{Language, Product, ProductList};
pub use queries::{BarcodeQuery, LookupQuery, SearchParams, SearchQuery};
pub use request::QueryBuilder;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// EanSearchBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`EanSearch`] client.
///
/// Use [`EanSearch::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](EanSearchBuilder::build) to create the client.
pub struct EanSearchBuilder {
    token: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl Default for EanSearchBuilder {
    fn default() -> Self {
        Self {
            token: None,
            base_url: config::API_BASE.to_string(),
            timeout: config::default_timeout(),
        }
    }
}

impl EanSearchBuilder {
    /// Set the API authentication token. Required.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the API endpoint URL.
    ///
    /// Defaults to the production endpoint; mainly useful for pointing the
    /// client at a test server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the connect/read timeout for each request.
    ///
    /// Defaults to 20 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client, initializing the HTTP transport.
    ///
    /// Fails if no token was supplied. No network traffic happens here;
    /// requests are only made by the individual operations.
    pub fn build(self) -> Result<EanSearch> {
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| EanSearchError::InvalidArgument("an API token is required".into()))?;
        let conn = Connection::new(token, self.base_url, self.timeout)?;
        Ok(EanSearch { conn })
    }
}

// ---------------------------------------------------------------------------
// EanSearch
// ---------------------------------------------------------------------------

/// The main entry point for the EAN-Search SDK.
///
/// Wraps a [`Connection`] (HTTP client, endpoint and token) and exposes the
/// API operation families as lightweight borrowing wrappers. Every call is
/// independent; a failed call never poisons the client.
#[derive(Debug)]
pub struct EanSearch {
    conn: Connection,
}

impl EanSearch {
    /// Create a new builder for configuring the client.
    pub fn builder() -> EanSearchBuilder {
        EanSearchBuilder::default()
    }

    /// Create a client with the given token and default settings.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder().token(token).build()
    }

    /// Create a client from the `EAN_SEARCH_API_TOKEN` environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(config::TOKEN_ENV_VAR).map_err(|_| {
            EanSearchError::InvalidArgument(format!("{} is not set", config::TOKEN_ENV_VAR))
        })?;
        Self::new(token)
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the single-identifier lookup operations (EAN, ISBN).
    pub fn lookup(&self) -> LookupQuery<'_> {
        LookupQuery::new(&self.conn)
    }

    /// Access the paginated search operations.
    pub fn search(&self) -> SearchQuery<'_> {
        SearchQuery::new(&self.conn)
    }

    /// Access the barcode utility operations (checksum, issuing country,
    /// image rendering).
    pub fn barcode(&self) -> BarcodeQuery<'_> {
        BarcodeQuery::new(&self.conn)
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for EanSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The token stays out of any printable representation.
        write!(f, "EanSearch(base_url={})", self.conn.base_url())
    }
}
