use num_bigint::BigUint;
use num_traits::Zero;

use crate::{MIN_BASE, ShamirError};

/// Decode `digits` as an unsigned integer written in positional `base`
/// notation, most significant digit first.
///
/// Digits are case-insensitive alphanumerics: '0'..'9' map to 0..9 and
/// 'a'..'z' to 10..35. Any base greater than 1 is accepted; bases above 36
/// simply cannot express their upper digit values in this alphabet. The
/// result is exact and unbounded.
pub fn decode_radix(digits: &str, base: u32) -> Result<BigUint, ShamirError> {
    if base < MIN_BASE {
        return Err(ShamirError::InvalidBase(base));
    }
    if digits.is_empty() {
        return Err(ShamirError::EmptyDigits);
    }

    let big_base = BigUint::from(base);
    let mut value = BigUint::zero();
    for ch in digits.chars() {
        let digit = match digit_value(ch) {
            Some(digit) if digit < base => digit,
            _ => return Err(ShamirError::InvalidDigit { digit: ch, base }),
        };
        value = value * &big_base + digit;
    }
    Ok(value)
}

fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(ch as u32 - '0' as u32),
        'a'..='z' => Some(ch as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(ch as u32 - 'A' as u32 + 10),
        _ => None,
    }
}
