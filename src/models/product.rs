use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Product — the primary result model
// ---------------------------------------------------------------------------

/// A product record returned by lookup and search operations.
///
/// The API transmits every field as a JSON string, including the numeric
/// category ids, so those fields parse numeric strings on receipt. The
/// secondary classification (`google_category_id`) is only present on some
/// responses; its absence just means the record has no secondary category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The barcode (EAN/GTIN) identifying the product.
    pub ean: String,
    pub name: String,
    #[serde(deserialize_with = "numeric_string")]
    pub category_id: i64,
    pub category_name: String,
    pub issuing_country: String,
    #[serde(default, deserialize_with = "opt_numeric_string")]
    pub google_category_id: Option<i64>,
}

/// An ordered page of products from a search operation. Caller-owned.
pub type ProductList = Vec<Product>;

// ---------------------------------------------------------------------------
// Numeric-string deserializers
// ---------------------------------------------------------------------------

/// Accept an integer transmitted either as a JSON string (the API's usual
/// form) or as a genuine JSON number.
fn numeric_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("non-numeric id string `{}`", s))),
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| serde::de::Error::custom("non-integer id")),
        other => Err(serde::de::Error::custom(format!(
            "expected a numeric string, got {}",
            other
        ))),
    }
}

fn opt_numeric_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("non-numeric id string `{}`", s))),
        Value::Number(n) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("non-integer id")),
        other => Err(serde::de::Error::custom(format!(
            "expected a numeric string, got {}",
            other
        ))),
    }
}
