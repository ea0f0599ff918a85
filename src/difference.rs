//! Differences between two colors and the Sass expression that turns the
//! first color into the second.

use std::fmt;

use crate::{ColorModel, Component, Difference, Result};

/// A Sass color expression built from relative HSL operations.
///
/// Rendering with [`Display`](fmt::Display) gives the nested call
/// expression, e.g. `saturate(lighten(#336699, 10), 5)`. Evaluation happens
/// inside out, so the innermost call is applied first.
#[derive(Clone, Debug, PartialEq)]
pub enum SassExpr {
    /// A literal color, `#RRGGBB`.
    Color(String),
    /// `lighten(inner, amount)`
    Lighten(Box<SassExpr>, Component),
    /// `darken(inner, amount)`
    Darken(Box<SassExpr>, Component),
    /// `saturate(inner, amount)`
    Saturate(Box<SassExpr>, Component),
    /// `desaturate(inner, amount)`
    Desaturate(Box<SassExpr>, Component),
    /// `adjust_hue(inner, degrees)`
    AdjustHue(Box<SassExpr>, Component),
}

impl SassExpr {
    /// Name of the Sass function, `None` for a literal color.
    pub fn function_name(&self) -> Option<&'static str> {
        match self {
            SassExpr::Color(_) => None,
            SassExpr::Lighten(..) => Some("lighten"),
            SassExpr::Darken(..) => Some("darken"),
            SassExpr::Saturate(..) => Some("saturate"),
            SassExpr::Desaturate(..) => Some("desaturate"),
            SassExpr::AdjustHue(..) => Some("adjust_hue"),
        }
    }

    /// Number of function calls wrapped around the literal color.
    pub fn depth(&self) -> usize {
        match self {
            SassExpr::Color(_) => 0,
            SassExpr::Lighten(inner, _)
            | SassExpr::Darken(inner, _)
            | SassExpr::Saturate(inner, _)
            | SassExpr::Desaturate(inner, _)
            | SassExpr::AdjustHue(inner, _) => inner.depth() + 1,
        }
    }
}

impl fmt::Display for SassExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SassExpr::Color(hex) => f.write_str(hex),
            SassExpr::Lighten(inner, amount)
            | SassExpr::Darken(inner, amount)
            | SassExpr::Saturate(inner, amount)
            | SassExpr::Desaturate(inner, amount)
            | SassExpr::AdjustHue(inner, amount) => {
                let name = self.function_name().unwrap_or_default();
                write!(f, "{name}({inner}, {amount})")
            }
        }
    }
}

impl ColorModel {
    /// Compute `b - a` for every channel and axis of two hex colors.
    ///
    /// Every delta is rounded with [`ColorModel::format_float`]. The hue
    /// delta is not wrapped.
    pub fn difference(&self, a: &str, b: &str) -> Result<Difference> {
        let a = self.from_hex(a)?;
        let b = self.from_hex(b)?;

        let rgb = a.rgb().delta_to(&b.rgb());
        let hsl = a.hsl().delta_to(&b.hsl()).map(|c| self.format_float(c));

        log::debug!("difference {} -> {}: {rgb:?} {hsl:?}", a.hex(), b.hex());

        Ok(Difference::new(rgb, hsl))
    }

    /// Build the Sass expression that reproduces `b` from `a`.
    ///
    /// Lightness is applied first, then saturation, then hue. An axis with
    /// no difference adds no call.
    pub fn sass_expr(&self, a: &str, b: &str) -> Result<SassExpr> {
        let base = self.from_hex(a)?;
        let diff = self.difference(a, b)?;

        let mut expr = SassExpr::Color(base.hex().to_string());

        let lightness = self.format_float((diff.l() * 100.0).abs());
        if diff.l() > 0.0 {
            expr = SassExpr::Lighten(Box::new(expr), lightness);
        } else if diff.l() < 0.0 {
            expr = SassExpr::Darken(Box::new(expr), lightness);
        }

        let saturation = self.format_float((diff.s() * 100.0).abs());
        if diff.s() > 0.0 {
            expr = SassExpr::Saturate(Box::new(expr), saturation);
        } else if diff.s() < 0.0 {
            expr = SassExpr::Desaturate(Box::new(expr), saturation);
        }

        if diff.h() != 0.0 {
            expr = SassExpr::AdjustHue(Box::new(expr), self.format_float(base.h() + diff.h()));
        }

        Ok(expr)
    }

    /// Render [`ColorModel::sass_expr`] as a string.
    pub fn sass_difference(&self, a: &str, b: &str) -> Result<String> {
        self.sass_expr(a, b).map(|expr| expr.to_string())
    }
}
