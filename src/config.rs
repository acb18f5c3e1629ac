use std::time::Duration;

/// Base URL of the EAN-Search API endpoint. Every operation targets this
/// one path, distinguished by its `op=` query parameter.
pub const API_BASE: &str = "https://api.ean-search.org/api";

/// Output format requested on every call. The SDK only parses JSON.
pub const OUTPUT_FORMAT: &str = "json";

/// Environment variable read by [`EanSearch::from_env`](crate::EanSearch::from_env).
pub const TOKEN_ENV_VAR: &str = "EAN_SEARCH_API_TOKEN";

/// Default barcode image dimensions in pixels.
pub const DEFAULT_IMAGE_WIDTH: u32 = 102;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 50;

pub fn default_timeout() -> Duration {
    Duration::from_secs(20)
}
