//! Parsing of `#RGB` and `#RRGGBB` hex colors.

use crate::{Error, Result, Rgb};

/// Split a hex color into its three channels.
///
/// The leading `#` is optional. A 3-digit color duplicates each digit, so
/// `"F00"` is read as `"FF0000"`. Anything else is rejected.
pub fn split_hex(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let invalid = || Error::InvalidColorFormat(hex.to_string());

    let nibbles = digits
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(invalid)?;

    match nibbles[..] {
        [r, g, b] => Ok(Rgb::new(r * 17, g * 17, b * 17)),
        [r1, r0, g1, g0, b1, b0] => Ok(Rgb::new((r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0)),
        _ => Err(invalid()),
    }
}
