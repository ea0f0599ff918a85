//! Conversions between hex, RGB and HSL.
//!
//! HSL components derived from RGB are rounded with
//! [`ColorModel::format_float`]. The hex form is always derived from the
//! integer channels, so the RGB side of a conversion is exact.

use crate::{
    hex,
    model::{check_finite, check_range},
    ColorModel, ColorValue, Component, Hsl, Result, Rgb,
};

impl ColorModel {
    /// Parse a `#RGB` or `#RRGGBB` color, the `#` being optional.
    pub fn from_hex(&self, hex: &str) -> Result<ColorValue> {
        let rgb = hex::split_hex(hex)?;
        log::trace!("parsed {hex:?} as {rgb:?}");
        Ok(self.from_rgb8(rgb))
    }

    /// Build a color from RGB channels in `[0, 255]`. Fractional values are
    /// truncated toward zero before the range check.
    pub fn from_rgb(&self, r: Component, g: Component, b: Component) -> Result<ColorValue> {
        let channel = |name: &'static str, value: Component| -> Result<u8> {
            check_range(name, check_finite(name, value)?.trunc(), 0.0, 255.0).map(|v| v as u8)
        };

        Ok(self.from_rgb8(Rgb::new(
            channel("red", r)?,
            channel("green", g)?,
            channel("blue", b)?,
        )))
    }

    /// Build a color from 8-bit RGB channels.
    pub fn from_rgb8(&self, rgb: Rgb) -> ColorValue {
        let hsl = util::rgb_to_hsl(&rgb, self.options().wrap_negative_hue)
            .map(|c| self.format_float(c));
        ColorValue::new(rgb, hsl)
    }

    /// Build a color from a hue in degrees and saturation and lightness as
    /// fractions in `[0, 1]`. The hue is wrapped into `[0, 360)`.
    pub fn from_hsl(&self, h: Component, s: Component, l: Component) -> Result<ColorValue> {
        // A tiny negative hue has a remainder that rounds up to 360.
        let hue = match check_finite("hue", h)?.rem_euclid(360.0) {
            hue if hue >= 360.0 => 0.0,
            hue => hue,
        };
        let saturation = check_range("saturation", s, 0.0, 1.0)?;
        let lightness = check_range("lightness", l, 0.0, 1.0)?;

        let hsl = Hsl::new(hue, saturation, lightness);
        let rgb = util::hsl_to_rgb(&hsl, self.options().zero_hue_is_black);
        log::trace!("converted {hsl:?} to {rgb:?}");

        Ok(ColorValue::new(rgb, hsl))
    }

    /// Like [`ColorModel::from_hsl`], but each component greater than 1 is
    /// taken as a percentage and divided by 100 first. Components `<= 1` are
    /// used as they are.
    ///
    /// The hue is divided too, so `from_hsl_loose(210.0, ..)` is a hue of
    /// 2.1 degrees. Prefer [`ColorModel::from_hsl`] unless this shorthand is
    /// what the caller wants.
    pub fn from_hsl_loose(&self, h: Component, s: Component, l: Component) -> Result<ColorValue> {
        let percent = |v: Component| if v > 1.0 { v / 100.0 } else { v };
        self.from_hsl(percent(h), percent(s), percent(l))
    }
}

mod util {
    use crate::{Component, Hsl, Rgb};

    /// Convert from RGB notation to HSL notation. The hue of the red sector
    /// is negative when blue exceeds green, unless `wrap_negative_hue` is
    /// set.
    pub fn rgb_to_hsl(rgb: &Rgb, wrap_negative_hue: bool) -> Hsl {
        let [red, green, blue] = rgb.to_array().map(|c| Component::from(c) / 255.0);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let lightness = (max + min) / 2.0;
        let saturation = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (max + min - 1.0).abs())
        };

        let hue = if max == min {
            0.0
        } else if max == red {
            60.0 * ((green - blue) / delta)
        } else if max == green {
            60.0 * (2.0 + (blue - red) / delta)
        } else {
            60.0 * (4.0 + (red - green) / delta)
        };

        let hue = if wrap_negative_hue && hue < 0.0 {
            hue + 360.0
        } else {
            hue
        };

        Hsl::new(hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation. The hue must already be in
    /// `[0, 360)`.
    ///
    /// With `zero_hue_is_black` a hue of exactly 0 drops the chroma, leaving
    /// only the lightness match: full saturation at half lightness comes out
    /// black.
    pub fn hsl_to_rgb(hsl: &Hsl, zero_hue_is_black: bool) -> Rgb {
        let Hsl {
            hue,
            saturation,
            lightness,
        } = *hsl;

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = hue / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let light = lightness - chroma / 2.0;

        let (r, g, b) = if zero_hue_is_black && hue == 0.0 {
            (0.0, 0.0, 0.0)
        } else {
            match sector.floor() as u8 {
                0 => (chroma, x, 0.0),
                1 => (x, chroma, 0.0),
                2 => (0.0, chroma, x),
                3 => (0.0, x, chroma),
                4 => (x, 0.0, chroma),
                _ => (chroma, 0.0, x),
            }
        };

        Rgb::from([r, g, b].map(|c| ((c + light) * 255.0).round().clamp(0.0, 255.0) as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, Error, Options};

    fn rgb(c: &ColorValue) -> (u8, u8, u8) {
        (c.r(), c.g(), c.b())
    }

    #[test]
    fn hex_parsing() {
        let model = ColorModel::default();
        assert_eq!(rgb(&model.from_hex("#FFFFFF").unwrap()), (255, 255, 255));
        assert_eq!(rgb(&model.from_hex("F00").unwrap()), (255, 0, 0));
        assert_eq!(rgb(&model.from_hex("#000000").unwrap()), (0, 0, 0));
        assert_eq!(model.from_hex("#abc").unwrap().hex(), "#AABBCC");
        assert!(matches!(
            model.from_hex("#12345"),
            Err(Error::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn rgb_to_hsl_primaries() {
        let model = ColorModel::default();

        let red = model.from_hex("#FF0000").unwrap();
        assert_eq!((red.h(), red.s(), red.l()), (0.0, 1.0, 0.5));

        let green = model.from_hex("#00FF00").unwrap();
        assert_eq!((green.h(), green.s(), green.l()), (120.0, 1.0, 0.5));

        let blue = model.from_hex("#0000FF").unwrap();
        assert_eq!((blue.h(), blue.s(), blue.l()), (240.0, 1.0, 0.5));

        let white = model.from_hex("#FFFFFF").unwrap();
        assert_eq!((white.h(), white.s(), white.l()), (0.0, 0.0, 1.0));
    }

    #[test]
    fn rgb_to_hsl_is_rounded() {
        let model = ColorModel::default();
        let c = model.from_rgb(30.0, 144.0, 255.0).unwrap();
        assert_eq!(c.h(), 209.6);
        assert_eq!(c.s(), 1.0);
        assert_eq!(c.l(), 0.55882);
        assert_eq!(c.hex(), "#1E90FF");
    }

    #[test]
    fn from_rgb_truncates_and_checks_range() {
        let model = ColorModel::default();
        assert_eq!(rgb(&model.from_rgb(254.9, 0.5, 10.0).unwrap()), (254, 0, 10));
        assert!(model.from_rgb(256.0, 0.0, 0.0).is_err());
        assert!(model.from_rgb(-1.0, 0.0, 0.0).is_err());
        assert!(model.from_rgb(Component::NAN, 0.0, 0.0).is_err());
        // Truncation happens before the check.
        assert_eq!(rgb(&model.from_rgb(-0.5, 255.9, 0.0).unwrap()), (0, 255, 0));
    }

    #[test]
    fn negative_hue_handling() {
        // Red is the maximum and blue exceeds green.
        let c = ColorModel::default().from_hex("#FF0080").unwrap();
        assert_component_eq!(c.h(), 329.88235);

        let c = ColorModel::legacy().from_hex("#FF0080").unwrap();
        assert_component_eq!(c.h(), -30.11765);
    }

    #[test]
    fn hsl_to_rgb_sectors() {
        let model = ColorModel::default();
        let cases = [
            (0.0, (255, 0, 0)),
            (30.0, (255, 128, 0)),
            (60.0, (255, 255, 0)),
            (120.0, (0, 255, 0)),
            (180.0, (0, 255, 255)),
            (240.0, (0, 0, 255)),
            (300.0, (255, 0, 255)),
            (330.0, (255, 0, 128)),
        ];
        for (hue, expected) in cases {
            let c = model.from_hsl(hue, 1.0, 0.5).unwrap();
            assert_eq!(rgb(&c), expected, "hue {hue}");
        }
    }

    #[test]
    fn from_hsl_wraps_hue_and_checks_range() {
        let model = ColorModel::default();
        assert_eq!(rgb(&model.from_hsl(480.0, 1.0, 0.5).unwrap()), (0, 255, 0));
        assert_eq!(rgb(&model.from_hsl(-120.0, 1.0, 0.5).unwrap()), (0, 0, 255));
        assert_eq!(model.from_hsl(-120.0, 1.0, 0.5).unwrap().h(), 240.0);

        let c = model.from_hsl(-1e-20, 1.0, 0.5).unwrap();
        assert_eq!(c.h(), 0.0);
        assert_eq!(c.hex(), "#FF0000");
        assert_eq!(model.from_hsl(360.0, 1.0, 0.5).unwrap().h(), 0.0);
        assert!(matches!(
            model.from_hsl(0.0, 1.5, 0.5),
            Err(Error::InvalidRange {
                name: "saturation",
                ..
            })
        ));
        assert!(model.from_hsl(0.0, 0.5, -0.1).is_err());
        assert!(model.from_hsl(Component::INFINITY, 0.5, 0.5).is_err());
    }

    #[test]
    fn zero_hue() {
        let c = ColorModel::default().from_hsl(0.0, 1.0, 0.5).unwrap();
        assert_eq!(c.hex(), "#FF0000");

        let legacy = ColorModel::legacy();
        assert_eq!(legacy.from_hsl(0.0, 1.0, 0.5).unwrap().hex(), "#000000");
        // Without chroma only the lightness remains.
        assert_eq!(legacy.from_hsl(0.0, 0.0, 0.5).unwrap().hex(), "#808080");
        assert_eq!(legacy.from_hsl(0.0, 0.5, 0.5).unwrap().hex(), "#404040");
    }

    #[test]
    fn loose_hsl_divides_values_above_one() {
        let model = ColorModel::default();
        let strict = model.from_hsl(1.0, 0.5, 0.5).unwrap();
        let loose = model.from_hsl_loose(100.0, 50.0, 50.0).unwrap();
        assert_eq!(loose, strict);

        let c = model.from_hsl_loose(210.0, 1.0, 0.5).unwrap();
        assert_component_eq!(c.h(), 2.1);

        assert!(model.from_hsl_loose(0.0, 150.0, 0.5).is_err());
    }

    #[test]
    fn from_hsl_keeps_its_inputs() {
        let c = ColorModel::default().from_hsl(209.6, 1.0, 0.55882).unwrap();
        assert_eq!(c.hsl(), Hsl::new(209.6, 1.0, 0.55882));
        assert_eq!(c.hex(), "#1E90FF");
    }

    #[test]
    fn options_decimals() {
        let model = ColorModel::new(Options {
            decimals: 0,
            ..Options::default()
        })
        .unwrap();
        let c = model.from_hex("#1E90FF").unwrap();
        assert_eq!(c.l(), 0.6);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rgb_hsl_round_trip(r: u8, g: u8, b: u8) {
                let model = ColorModel::default();
                let c = model.from_rgb8(Rgb::new(r, g, b));
                let back = model.from_hsl(c.h(), c.s(), c.l()).unwrap();
                for (a, b) in c.rgb().to_array().into_iter().zip(back.rgb().to_array()) {
                    prop_assert!((i16::from(a) - i16::from(b)).abs() <= 1, "{:?} vs {:?}", c, back);
                }
            }

            #[test]
            fn hsl_components_stay_in_range(r: u8, g: u8, b: u8) {
                let c = ColorModel::default().from_rgb8(Rgb::new(r, g, b));
                prop_assert!((0.0..360.0).contains(&c.h()), "hue {}", c.h());
                prop_assert!((0.0..=1.0).contains(&c.s()), "saturation {}", c.s());
                prop_assert!((0.0..=1.0).contains(&c.l()), "lightness {}", c.l());
            }
        }
    }
}
