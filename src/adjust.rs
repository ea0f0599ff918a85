//! Relative HSL adjustments of a color.

use serde::{Deserialize, Serialize};

use crate::{model::check_finite, ColorModel, ColorValue, Component, Difference, Result};

/// A relative HSL adjustment.
///
/// The hue is in degrees. Saturation and lightness are percentage points of
/// the `[0, 1]` scale, so `10.0` adds `0.1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjustment {
    /// Hue rotation in degrees.
    pub hue: Component,
    /// Saturation change in percentage points.
    pub saturation: Component,
    /// Lightness change in percentage points.
    pub lightness: Component,
}

impl Adjustment {
    /// Create a new adjustment.
    pub fn new(hue: Component, saturation: Component, lightness: Component) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

impl From<&Difference> for Adjustment {
    /// The adjustment that moves the first color of a difference towards the
    /// second.
    fn from(diff: &Difference) -> Self {
        Self::new(diff.h(), diff.s() * 100.0, diff.l() * 100.0)
    }
}

impl ColorModel {
    /// Adjust a hex color by relative HSL amounts.
    ///
    /// The new hue is `|(h + h_delta) % 360|` with a truncating remainder, so
    /// a result of `-30` becomes `30` rather than `330`. Saturation and
    /// lightness deltas are percentage points and the results are clamped to
    /// `[0, 1]`.
    pub fn adjust_hsl(
        &self,
        hex: &str,
        h_delta: Component,
        s_delta: Component,
        l_delta: Component,
    ) -> Result<ColorValue> {
        let h_delta = check_finite("hue delta", h_delta)?;
        let s_delta = check_finite("saturation delta", s_delta)?;
        let l_delta = check_finite("lightness delta", l_delta)?;

        let color = self.from_hex(hex)?;

        let hue = ((color.h() + h_delta) % 360.0).abs();
        let saturation = (color.s() + s_delta / 100.0).clamp(0.0, 1.0);
        let lightness = (color.l() + l_delta / 100.0).clamp(0.0, 1.0);

        log::debug!(
            "adjusting {} by ({h_delta}, {s_delta}, {l_delta}) to ({hue}, {saturation}, {lightness})",
            color.hex()
        );

        self.from_hsl(hue, saturation, lightness)
    }

    /// Apply an [`Adjustment`] to a hex color.
    pub fn apply(&self, hex: &str, adjustment: &Adjustment) -> Result<ColorValue> {
        self.adjust_hsl(
            hex,
            adjustment.hue,
            adjustment.saturation,
            adjustment.lightness,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, Error};

    #[test]
    fn zero_adjustment_is_identity() {
        let model = ColorModel::default();
        for hex in ["#1E90FF", "#336699", "#FF0000", "#808080", "#FFFFFF", "#000000", "#FF0080"] {
            let adjusted = model.adjust_hsl(hex, 0.0, 0.0, 0.0).unwrap();
            let original = model.from_hex(hex).unwrap();
            assert_eq!(adjusted.rgb(), original.rgb(), "{hex}");
            assert_eq!(adjusted.hex(), original.hex());
        }
    }

    #[test]
    fn hue_rotation() {
        let model = ColorModel::default();
        assert_eq!(model.adjust_hsl("#FF0000", 120.0, 0.0, 0.0).unwrap().hex(), "#00FF00");
        assert_eq!(model.adjust_hsl("#FF0000", 400.0, 0.0, 0.0).unwrap().hex(), "#FFAA00");
    }

    #[test]
    fn negative_hue_results_are_mirrored() {
        let c = ColorModel::default().adjust_hsl("#FF0000", -30.0, 0.0, 0.0).unwrap();
        assert_eq!(c.h(), 30.0);
        assert_eq!(c.hex(), "#FF8000");
    }

    #[test]
    fn saturation_and_lightness_are_percentage_points() {
        let model = ColorModel::default();
        let c = model.adjust_hsl("#FF0000", 0.0, -100.0, 0.0).unwrap();
        assert_eq!(c.hex(), "#808080");

        let c = model.adjust_hsl("#808080", 0.0, 0.0, 10.0).unwrap();
        assert_component_eq!(c.l(), 0.60196);
        assert_eq!(c.hex(), "#999999");
    }

    #[test]
    fn extreme_deltas_are_clamped() {
        let model = ColorModel::default();

        let c = model.adjust_hsl("#336699", 0.0, 1000.0, -1000.0).unwrap();
        assert_eq!((c.s(), c.l()), (1.0, 0.0));
        assert_eq!(c.hex(), "#000000");

        let c = model.adjust_hsl("#336699", 0.0, -1000.0, 1000.0).unwrap();
        assert_eq!((c.s(), c.l()), (0.0, 1.0));
        assert_eq!(c.hex(), "#FFFFFF");
    }

    #[test]
    fn rejects_bad_input() {
        let model = ColorModel::default();
        assert!(matches!(
            model.adjust_hsl("#336699", Component::NAN, 0.0, 0.0),
            Err(Error::InvalidRange {
                name: "hue delta",
                ..
            })
        ));
        assert!(matches!(
            model.adjust_hsl("#33669", 0.0, 0.0, 0.0),
            Err(Error::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn difference_as_adjustment_reproduces_target() {
        let model = ColorModel::default();
        for (a, b) in [("#FF0000", "#40BF40"), ("#336699", "#99CC33")] {
            let diff = model.difference(a, b).unwrap();
            let adjusted = model.apply(a, &Adjustment::from(&diff)).unwrap();
            assert_eq!(adjusted.hex(), b);
        }
    }

    mod proptests {
        use super::*;
        use crate::Rgb;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn saturation_and_lightness_stay_in_unit_interval(
                r: u8,
                g: u8,
                b: u8,
                h_delta in -1000.0..1000.0_f64,
                s_delta in -1000.0..1000.0_f64,
                l_delta in -1000.0..1000.0_f64,
            ) {
                let hex = Rgb::new(r, g, b).to_hex();
                let c = ColorModel::default().adjust_hsl(&hex, h_delta, s_delta, l_delta).unwrap();
                prop_assert!((0.0..=1.0).contains(&c.s()), "saturation {}", c.s());
                prop_assert!((0.0..=1.0).contains(&c.l()), "lightness {}", c.l());
                prop_assert!((0.0..360.0).contains(&c.h()), "hue {}", c.h());
            }
        }
    }
}
