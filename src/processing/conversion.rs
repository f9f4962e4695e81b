//! Integer to binary / hexadecimal digit strings.

use crate::types::ConversionRow;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Render `n` in `radix` (2..=16) by repeated division, with a leading `-` for negatives.
///
/// # Panics
///
/// Panics if `radix` is outside `2..=16`.
pub fn to_radix_string(n: i64, radix: u32) -> String {
    assert!((2..=16).contains(&radix), "radix must be in 2..=16, got {radix}");
    if n == 0 {
        return "0".to_string();
    }

    let radix = u64::from(radix);
    let mut magnitude = n.unsigned_abs();
    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push(DIGITS[(magnitude % radix) as usize]);
        magnitude /= radix;
    }
    if n < 0 {
        digits.push(b'-');
    }
    digits.iter().rev().map(|&b| char::from(b)).collect()
}

/// Binary representation, e.g. `5 -> "101"`, `-5 -> "-101"`.
pub fn decimal_to_binary(n: i64) -> String {
    to_radix_string(n, 2)
}

/// Uppercase hexadecimal representation, e.g. `255 -> "FF"`, `-255 -> "-FF"`.
pub fn decimal_to_hexadecimal(n: i64) -> String {
    to_radix_string(n, 16)
}

impl ConversionRow {
    /// Build the report row for `n`.
    pub fn from_value(n: i64) -> Self {
        Self {
            decimal: n,
            binary: decimal_to_binary(n),
            hexadecimal: decimal_to_hexadecimal(n),
        }
    }
}
