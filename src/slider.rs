//! Map normalized slider positions to adjustments.
//!
//! A slider reports its knob position as a value in `[0, 1]`. Each HSL axis
//! gets an [`AxisRange`] that turns that position into a delta, and back.

use serde::{Deserialize, Serialize};

use crate::{math::lerp, Adjustment, Component};

/// The delta range covered by one slider.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    /// Delta at position 0.
    pub min: Component,
    /// Delta at position 1.
    pub max: Component,
}

impl AxisRange {
    /// Create a new range.
    pub const fn new(min: Component, max: Component) -> Self {
        Self { min, max }
    }

    /// Delta at slider position `t`. Positions outside `[0, 1]` are clamped.
    pub fn at(&self, t: Component) -> Component {
        lerp(self.min, self.max, t.clamp(0.0, 1.0))
    }

    /// Slider position that yields `delta`, clamped to `[0, 1]`. An empty
    /// range maps every delta to 0.
    pub fn position_of(&self, delta: Component) -> Component {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0.0;
        }
        ((delta - self.min) / span).clamp(0.0, 1.0)
    }
}

/// One [`AxisRange`] per HSL axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderRanges {
    /// Hue range in degrees.
    pub hue: AxisRange,
    /// Saturation range in percentage points.
    pub saturation: AxisRange,
    /// Lightness range in percentage points.
    pub lightness: AxisRange,
}

impl Default for SliderRanges {
    fn default() -> Self {
        Self {
            hue: AxisRange::new(-180.0, 180.0),
            saturation: AxisRange::new(-100.0, 100.0),
            lightness: AxisRange::new(-100.0, 100.0),
        }
    }
}

impl SliderRanges {
    /// Build the adjustment for the three slider positions.
    pub fn adjustment(&self, hue: Component, saturation: Component, lightness: Component) -> Adjustment {
        Adjustment::new(
            self.hue.at(hue),
            self.saturation.at(saturation),
            self.lightness.at(lightness),
        )
    }

    /// Slider positions that produce `adjustment`, as `[hue, saturation,
    /// lightness]`.
    pub fn positions(&self, adjustment: &Adjustment) -> [Component; 3] {
        [
            self.hue.position_of(adjustment.hue),
            self.saturation.position_of(adjustment.saturation),
            self.lightness.position_of(adjustment.lightness),
        ]
    }
}
