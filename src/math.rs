//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// Round `value` to `places` decimal places. Ties round towards positive
/// infinity, so `-2.5` becomes `-2` and `2.5` becomes `3`.
///
/// When the scaled value no longer fits the float type, `value` is already
/// exact at that precision and is returned unchanged.
pub fn round_to<T: Float>(value: T, places: i32) -> T {
    let (Some(ten), Some(half)) = (T::from(10.0), T::from(0.5)) else {
        return value;
    };
    let factor = ten.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() || factor.is_zero() {
        return value;
    }

    let floor = scaled.floor();
    let rounded = if scaled - floor >= half {
        floor + T::one()
    } else {
        floor
    };
    rounded / factor
}

/// Linearly interpolate between `a` and `b` with `t` as the progress.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Round a value the way every HSL component and delta is stored.
///
/// Both the multiplier and the divisor are `10^(decimals + 1)`, so the
/// result carries `decimals + 1` decimal places. `format_float(0.123456, 4)`
/// is `0.12346`.
pub fn format_float(value: Component, decimals: u32) -> Component {
    let places = i32::try_from(decimals).unwrap_or(i32::MAX).saturating_add(1);
    round_to(value, places)
}
