//! A [`ColorValue`] holds one color in both the RGB and the HSL notation, a
//! [`Difference`] holds the delta between two of them.

use bitflags::bitflags;
use serde::Serialize;

use crate::{Hsl, HslDelta, Rgb, RgbDelta};

/// A 64-bit floating point value that all real components are stored as.
pub type Component = f64;

/// A color resolved into both RGB and HSL.
///
/// The hex form is derived from the RGB channels when the value is built and
/// can not be set on its own.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorValue {
    #[serde(flatten)]
    rgb: Rgb,
    #[serde(flatten)]
    hsl: Hsl,
    hex: String,
}

impl ColorValue {
    pub(crate) fn new(rgb: Rgb, hsl: Hsl) -> Self {
        Self {
            rgb,
            hsl,
            hex: rgb.to_hex(),
        }
    }

    /// The RGB channels.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The HSL components.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// The red channel.
    pub fn r(&self) -> u8 {
        self.rgb.red
    }

    /// The green channel.
    pub fn g(&self) -> u8 {
        self.rgb.green
    }

    /// The blue channel.
    pub fn b(&self) -> u8 {
        self.rgb.blue
    }

    /// The hue in degrees.
    pub fn h(&self) -> Component {
        self.hsl.hue
    }

    /// The saturation in `[0, 1]`.
    pub fn s(&self) -> Component {
        self.hsl.saturation
    }

    /// The lightness in `[0, 1]`.
    pub fn l(&self) -> Component {
        self.hsl.lightness
    }

    /// The color as an uppercase `#RRGGBB` string.
    pub fn hex(&self) -> &str {
        &self.hex
    }
}

bitflags! {
    /// Marks which channels and axes of a [`Difference`] are non-zero.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Changes : u8 {
        /// The red channels differ.
        const RED = 1 << 0;
        /// The green channels differ.
        const GREEN = 1 << 1;
        /// The blue channels differ.
        const BLUE = 1 << 2;
        /// The hues differ.
        const HUE = 1 << 3;
        /// The saturations differ.
        const SATURATION = 1 << 4;
        /// The lightnesses differ.
        const LIGHTNESS = 1 << 5;
        /// Any of the RGB channels differ.
        const RGB = Self::RED.bits() | Self::GREEN.bits() | Self::BLUE.bits();
        /// Any of the HSL axes differ.
        const HSL = Self::HUE.bits() | Self::SATURATION.bits() | Self::LIGHTNESS.bits();
    }
}

/// The per-channel and per-axis difference `B - A` between two colors.
///
/// A difference is not a color, so it has no hex form.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Difference {
    #[serde(flatten)]
    rgb: RgbDelta,
    #[serde(flatten)]
    hsl: HslDelta,
}

impl Difference {
    pub(crate) fn new(rgb: RgbDelta, hsl: HslDelta) -> Self {
        Self { rgb, hsl }
    }

    /// The RGB channel deltas.
    pub fn rgb(&self) -> RgbDelta {
        self.rgb
    }

    /// The HSL axis deltas.
    pub fn hsl(&self) -> HslDelta {
        self.hsl
    }

    /// Delta of the red channels.
    pub fn r(&self) -> i16 {
        self.rgb.red
    }

    /// Delta of the green channels.
    pub fn g(&self) -> i16 {
        self.rgb.green
    }

    /// Delta of the blue channels.
    pub fn b(&self) -> i16 {
        self.rgb.blue
    }

    /// Delta of the hues in degrees, not wrapped.
    pub fn h(&self) -> Component {
        self.hsl.hue
    }

    /// Delta of the saturations.
    pub fn s(&self) -> Component {
        self.hsl.saturation
    }

    /// Delta of the lightnesses.
    pub fn l(&self) -> Component {
        self.hsl.lightness
    }

    /// Always empty, a difference has no hex encoding.
    pub fn hex(&self) -> &'static str {
        ""
    }

    /// Return which channels and axes are non-zero.
    pub fn changes(&self) -> Changes {
        let mut changes = Changes::empty();
        changes.set(Changes::RED, self.rgb.red != 0);
        changes.set(Changes::GREEN, self.rgb.green != 0);
        changes.set(Changes::BLUE, self.rgb.blue != 0);
        changes.set(Changes::HUE, self.hsl.hue != 0.0);
        changes.set(Changes::SATURATION, self.hsl.saturation != 0.0);
        changes.set(Changes::LIGHTNESS, self.hsl.lightness != 0.0);
        changes
    }

    /// True when both colors were the same.
    pub fn is_identity(&self) -> bool {
        self.changes().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_follows_rgb() {
        let c = ColorValue::new(Rgb::new(255, 0, 128), Hsl::new(329.88, 1.0, 0.5));
        assert_eq!(c.hex(), "#FF0080");
        assert_eq!((c.r(), c.g(), c.b()), (255, 0, 128));
        assert_eq!((c.h(), c.s(), c.l()), (329.88, 1.0, 0.5));
    }

    #[test]
    fn changes_track_non_zero_fields() {
        let d = Difference::new(RgbDelta::new(0, 3, 0), HslDelta::new(0.0, 0.0, -0.1));
        assert_eq!(d.changes(), Changes::GREEN | Changes::LIGHTNESS);
        assert!(d.changes().intersects(Changes::RGB));
        assert!(!d.changes().contains(Changes::HSL));
        assert!(!d.is_identity());

        let d = Difference::new(RgbDelta::default(), HslDelta::default());
        assert!(d.is_identity());
        assert_eq!(d.hex(), "");
    }

    #[test]
    fn serializes_flat() {
        let c = ColorValue::new(Rgb::new(255, 0, 0), Hsl::new(0.0, 1.0, 0.5));
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["r"], 255);
        assert_eq!(json["h"], 0.0);
        assert_eq!(json["hex"], "#FF0000");
    }
}
