//! Render a swatch image comparing a base color, the base adjusted by the
//! difference to a target, and the target itself.

use std::path::Path;

use hueshift::{Adjustment, ColorModel, ColorValue};
use image::{Rgb, RgbImage};

use crate::error::CliError;

/// Number of horizontal bands in a swatch.
const BANDS: u32 = 3;

/// Build the three swatch colors: base, reproduced target and target.
pub fn colors(model: &ColorModel, base: &str, target: &str) -> Result<[ColorValue; 3], CliError> {
    let diff = model.difference(base, target)?;
    let reproduced = model.apply(base, &Adjustment::from(&diff))?;
    Ok([model.from_hex(base)?, reproduced, model.from_hex(target)?])
}

/// Paint one band per color, top to bottom.
pub fn render(colors: &[ColorValue], width: u32, band_height: u32) -> Result<RgbImage, CliError> {
    let too_large = || CliError::Input(format!("swatch of {width}x{band_height} per band is too large"));

    let height = u32::try_from(colors.len())
        .ok()
        .and_then(|bands| band_height.checked_mul(bands))
        .ok_or_else(too_large)?;
    // Three bytes per pixel must fit the image buffer.
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or_else(too_large)?;

    let mut img = RgbImage::new(width, height);

    img.enumerate_pixels_mut().for_each(|(_, y, pixel)| {
        let band = (y / band_height) as usize;
        let c = &colors[band.min(colors.len() - 1)];
        *pixel = Rgb([c.r(), c.g(), c.b()]);
    });

    Ok(img)
}

/// Render the swatch for `base` and `target` and save it to `path`.
pub fn write(
    model: &ColorModel,
    base: &str,
    target: &str,
    path: &Path,
    width: u32,
    band_height: u32,
) -> Result<[ColorValue; 3], CliError> {
    if width == 0 || band_height == 0 {
        return Err(CliError::Input(
            "swatch width and band height must be non-zero".into(),
        ));
    }

    let colors = colors(model, base, target)?;
    let img = render(&colors, width, band_height)?;
    debug_assert_eq!(img.height(), BANDS * band_height);

    img.save(path)
        .map_err(|e| CliError::Io(format!("could not write {}: {e}", path.display())))?;
    log::info!("wrote swatch to {}", path.display());

    Ok(colors)
}
