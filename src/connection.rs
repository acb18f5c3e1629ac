//! HTTP transport: one blocking GET per API call.
//!
//! Holds the `reqwest` client, the endpoint URL and the authentication
//! token. No retries and no state between calls; a failed call never
//! affects the next one.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::error::Result;
use crate::request::QueryBuilder;

/// Wraps a blocking HTTP client bound to one API endpoint and token.
#[derive(Debug)]
pub struct Connection {
    client: Client,
    base_url: String,
    token: String,
}

impl Connection {
    /// Build the underlying HTTP client with the given timeout.
    pub fn new(token: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Perform one GET request for the given query and parse the JSON body.
    ///
    /// Non-2xx statuses are transport errors; the body is only parsed on
    /// success. Shape interpretation is left to the caller.
    pub fn call(&self, query: &QueryBuilder) -> Result<Value> {
        let url = format!("{}?{}", self.base_url, query.build(&self.token));
        let body = self.client.get(&url).send()?.error_for_status()?.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// The endpoint URL this connection targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
