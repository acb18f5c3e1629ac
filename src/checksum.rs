//! Offline GS1 check-digit validation.
//!
//! The standard weighted modulo-10 sum shared by EAN-8, UPC-A (12 digits),
//! EAN-13 and GTIN-14: working right-to-left from the digit next to the
//! check digit, digits are weighted 3, 1, 3, 1, …; the check digit brings
//! the total to a multiple of 10.
//!
//! This is a local complement to the remote
//! [`verify_checksum`](crate::queries::barcode::BarcodeQuery::verify_checksum)
//! operation; no network round trip.

/// Validate the check digit of an 8, 12, 13 or 14 digit code.
///
/// Returns `false` for any other length or for non-digit input.
pub fn validate(code: &str) -> bool {
    if !matches!(code.len(), 8 | 12 | 13 | 14) {
        return false;
    }
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = code.bytes().map(|b| u32::from(b - b'0')).collect();
    let check = digits[digits.len() - 1];

    let sum: u32 = digits[..digits.len() - 1]
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d * 3 } else { *d })
        .sum();

    (10 - sum % 10) % 10 == check
}
