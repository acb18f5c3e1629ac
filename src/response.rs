//! Response body extraction for the three JSON shapes the API returns.
//!
//! Lookup operations return a single-element array wrapping one product
//! object; search operations return an object with a `productlist` array;
//! scalar operations return a single-element array wrapping one named field.
//! The service signals its own failures in-band with an `"error"` string
//! field, which is surfaced as [`EanSearchError::Api`].

use serde::Deserialize;
use serde_json::Value;

use crate::error::{EanSearchError, Result};
use crate::models::Product;

fn shape(msg: impl Into<String>) -> EanSearchError {
    EanSearchError::UnexpectedResponse(msg.into())
}

fn api_error(value: &Value) -> Option<EanSearchError> {
    value
        .get("error")
        .and_then(Value::as_str)
        .map(|msg| EanSearchError::Api(msg.to_string()))
}

/// Extract element 0 of a single-element array response.
///
/// Returns `Ok(None)` on an empty array (semantic not-found). A non-array
/// body is an unexpected shape; an entry carrying an `"error"` field is an
/// API error.
pub(crate) fn single_entry(body: &Value) -> Result<Option<&Value>> {
    let arr = body
        .as_array()
        .ok_or_else(|| shape("expected a JSON array"))?;
    match arr.first() {
        None => Ok(None),
        Some(entry) => {
            if let Some(err) = api_error(entry) {
                return Err(err);
            }
            Ok(Some(entry))
        }
    }
}

/// Deserialize one product object.
pub(crate) fn product(entry: &Value) -> Result<Product> {
    Ok(serde_json::from_value(entry.clone())?)
}

#[derive(Deserialize)]
struct SearchPage {
    productlist: Option<Vec<Product>>,
}

/// Deserialize a paginated search response.
///
/// `{"productlist": []}` is a successful empty page and yields an empty
/// vector; a body without `productlist` is an unexpected shape.
pub(crate) fn product_list(body: Value) -> Result<Vec<Product>> {
    if let Some(err) = api_error(&body) {
        return Err(err);
    }
    let page: SearchPage = serde_json::from_value(body)?;
    page.productlist
        .ok_or_else(|| shape("missing `productlist` field"))
}

/// Extract one named string field from element 0 of a single-element array.
///
/// Returns `Ok(None)` on an empty array; a present entry missing the field
/// is an unexpected shape.
pub(crate) fn scalar(body: &Value, field: &str) -> Result<Option<String>> {
    match single_entry(body)? {
        None => Ok(None),
        Some(entry) => {
            let value = entry
                .get(field)
                .and_then(Value::as_str)
                .ok_or_else(|| shape(format!("missing `{}` field", field)))?;
            Ok(Some(value.to_string()))
        }
    }
}
