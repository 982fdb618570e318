use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::error::{ReconstructError, Result};

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;
const HEX_SPAN: u32 = 16;

/// '0'-'9' -> 0-9, 'a'-'z' / 'A'-'Z' -> 10-35. Anything else has no value.
pub fn digit_value(c: char) -> Option<u32> {
    c.to_digit(MAX_BASE)
}

/// Symbols recognised for `base`: the hex digits up to base 16, the full
/// 0-9a-z set above it. A recognised symbol can still be too large for the
/// base ('f' in base 10), which is a range error rather than a bad character.
fn alphabet_span(base: u32) -> u32 {
    if base <= HEX_SPAN {
        HEX_SPAN
    } else {
        MAX_BASE
    }
}

fn check_base(base: u32) -> Result<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(ReconstructError::InvalidBase(base))
    }
}

/// Decode an unsigned digit string written in `base`.
///
/// Digits are read most-significant first (`acc = acc * base + d`). There is
/// no whitespace trimming and no sign; the empty string decodes to zero.
pub fn decode(digits: &str, base: u32) -> Result<BigInt> {
    check_base(base)?;

    let span = alphabet_span(base);
    let mut acc = BigUint::zero();
    for (position, character) in digits.chars().enumerate() {
        let digit = digit_value(character)
            .filter(|&d| d < span)
            .ok_or(ReconstructError::InvalidCharacter {
                character,
                position,
            })?;
        if digit >= base {
            return Err(ReconstructError::DigitOutOfRange { digit, base });
        }
        acc *= base;
        acc += digit;
    }
    Ok(BigInt::from(acc))
}

/// Positional formatter, inverse of [`decode`] for non-negative values.
/// Lower-case digits; negative values get a leading '-'.
pub fn encode(value: &BigInt, base: u32) -> Result<String> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}
