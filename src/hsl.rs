//! Model a color with the HSL notation.

use crate::Component;

hueshift_macros::gen_model! {
    /// A color specified with the HSL notation. The hue is in degrees,
    /// saturation and lightness are fractions in `[0, 1]`.
    pub struct Hsl {
        /// The hue component of the color.
        #[serde(rename = "h")]
        hue: Component,
        /// The saturation component of the color.
        #[serde(rename = "s")]
        saturation: Component,
        /// The lightness component of the color.
        #[serde(rename = "l")]
        lightness: Component,
    }
}

hueshift_macros::gen_model! {
    /// The per-axis difference between two [`Hsl`] colors. The hue delta is
    /// not wrapped, `+350` and `-10` stay distinct.
    pub struct HslDelta {
        /// Difference of the hues, in degrees.
        #[serde(rename = "h")]
        hue: Component,
        /// Difference of the saturations.
        #[serde(rename = "s")]
        saturation: Component,
        /// Difference of the lightnesses.
        #[serde(rename = "l")]
        lightness: Component,
    }
}

impl Hsl {
    /// Return `other - self` for each axis.
    pub fn delta_to(&self, other: &Hsl) -> HslDelta {
        HslDelta::new(
            other.hue - self.hue,
            other.saturation - self.saturation,
            other.lightness - self.lightness,
        )
    }
}
