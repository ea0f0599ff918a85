//! Options that control rounding and the handling of edge cases in the color
//! model.

use serde::{Deserialize, Serialize};

/// Number of decimals handed to [`format_float`](crate::format_float) when
/// rounding HSL components and deltas.
pub const DEFAULT_DECIMALS: u32 = 4;

/// Largest accepted [`Options::decimals`]. An `f64` holds no more than about
/// 15 significant decimal digits.
pub const MAX_DECIMALS: u32 = 15;

/// Options for a [`ColorModel`](crate::ColorModel).
///
/// Every field has a default, so a partial JSON document such as
/// `{"decimals": 2}` deserializes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Decimals passed to the float formatter. The stored values carry one
    /// more decimal place than this. At most [`MAX_DECIMALS`].
    pub decimals: u32,
    /// When set, a hue of exactly 0 converts to black regardless of
    /// saturation and lightness.
    pub zero_hue_is_black: bool,
    /// When set, the negative hues produced in the red sector are moved into
    /// `[0, 360)`. Otherwise the raw signed value is kept.
    pub wrap_negative_hue: bool,
}

impl Options {
    /// Options that keep the legacy edge cases: a hue of 0 is black and
    /// red sector hues may be negative.
    pub const fn legacy() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            zero_hue_is_black: true,
            wrap_negative_hue: false,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            zero_hue_is_black: false,
            wrap_negative_hue: true,
        }
    }
}
