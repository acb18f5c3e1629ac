//! Shared test fixtures for the EAN-Search SDK integration tests.
//!
//! Provides `client_for()` which builds an `EanSearch` client pointed at a
//! mockito server standing in for the remote API. The caller must keep the
//! `ServerGuard` alive for the duration of the test.

use eansearch_sdk::EanSearch;
use std::time::Duration;

/// Token carried by every test request; asserted in query matchers.
pub const TOKEN: &str = "test-token";

/// Build a client targeting the given mock server's `/api` path.
pub fn client_for(server: &mockito::ServerGuard) -> EanSearch {
    EanSearch::builder()
        .token(TOKEN)
        .base_url(format!("{}/api", server.url()))
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}
