//! The [`ColorModel`] entry point. The operations themselves live next to
//! the code they rely on: conversions in `convert`, differences and Sass
//! expressions in `difference`, adjustments in `adjust`.

use crate::{math, options::MAX_DECIMALS, Component, Error, Options, Result};

/// Converts, compares and adjusts colors.
///
/// The model only carries its [`Options`]; every operation is a pure
/// function of its arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorModel {
    options: Options,
}

impl ColorModel {
    /// Create a model with the given options.
    ///
    /// Fails with [`Error::InvalidRange`] when `decimals` is above
    /// [`MAX_DECIMALS`](crate::MAX_DECIMALS).
    pub fn new(options: Options) -> Result<Self> {
        if options.decimals > MAX_DECIMALS {
            return Err(Error::InvalidRange {
                name: "decimals",
                value: Component::from(options.decimals),
            });
        }
        Ok(Self { options })
    }

    /// A model with the legacy edge case behavior, see [`Options::legacy`].
    pub const fn legacy() -> Self {
        Self {
            options: Options::legacy(),
        }
    }

    /// The options of this model.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Round `value` with the configured number of decimals.
    pub fn format_float(&self, value: Component) -> Component {
        math::format_float(value, self.options.decimals)
    }
}

/// Reject values that are not finite or fall outside `min..=max`.
pub(crate) fn check_range(
    name: &'static str,
    value: Component,
    min: Component,
    max: Component,
) -> Result<Component> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidRange { name, value })
    }
}

/// Reject values that are not finite.
pub(crate) fn check_finite(name: &'static str, value: Component) -> Result<Component> {
    check_range(name, value, Component::MIN, Component::MAX)
}
