//! Query modules for the EAN-Search SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes one family of
//! API operations, each performing exactly one network round trip.

pub mod barcode;
pub mod lookup;
pub mod search;

pub use barcode::BarcodeQuery;
pub use lookup::LookupQuery;
pub use search::{SearchParams, SearchQuery};
