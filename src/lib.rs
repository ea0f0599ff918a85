//! hueshift converts colors between hex, RGB and HSL, computes the
//! difference between two colors and expresses that difference as relative
//! HSL operations, either as an [`Adjustment`] or as a Sass expression.
//!
//! ```rust
//! use hueshift::ColorModel;
//!
//! let model = ColorModel::default();
//!
//! let base = model.from_hex("#000000").unwrap();
//! assert_eq!(base.hex(), "#000000");
//!
//! let sass = model.sass_difference("#000000", "#FFFFFF").unwrap();
//! assert_eq!(sass, "lighten(#000000, 100)");
//!
//! let rotated = model.adjust_hsl("#FF0000", 120.0, 0.0, 0.0).unwrap();
//! assert_eq!(rotated.hex(), "#00FF00");
//! ```

#![deny(missing_docs)]

mod adjust;
mod color;
mod convert;
mod difference;
mod error;
mod hex;
mod hsl;
mod math;
mod model;
mod options;
mod rgb;
mod slider;


pub use adjust::Adjustment;
pub use color::{Changes, ColorValue, Component, Difference};
pub use difference::SassExpr;
pub use error::{Error, Result};
pub use hsl::{Hsl, HslDelta};
pub use math::format_float;
pub use model::ColorModel;
pub use options::{Options, DEFAULT_DECIMALS, MAX_DECIMALS};
pub use rgb::{Rgb, RgbDelta};
pub use slider::{AxisRange, SliderRanges};
