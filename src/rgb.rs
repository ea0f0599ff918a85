//! Model a color with 8-bit red, green and blue channels.

hueshift_macros::gen_model! {
    /// A color specified with 8-bit RGB channels.
    pub struct Rgb {
        /// The red channel of the color.
        #[serde(rename = "r")]
        red: u8,
        /// The green channel of the color.
        #[serde(rename = "g")]
        green: u8,
        /// The blue channel of the color.
        #[serde(rename = "b")]
        blue: u8,
    }
}

hueshift_macros::gen_model! {
    /// The signed per-channel difference between two [`Rgb`] colors.
    pub struct RgbDelta {
        /// Difference of the red channels.
        #[serde(rename = "r")]
        red: i16,
        /// Difference of the green channels.
        #[serde(rename = "g")]
        green: i16,
        /// Difference of the blue channels.
        #[serde(rename = "b")]
        blue: i16,
    }
}

impl Rgb {
    /// Encode the channels as an uppercase `#RRGGBB` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Return `other - self` for each channel.
    pub fn delta_to(&self, other: &Rgb) -> RgbDelta {
        RgbDelta::new(
            i16::from(other.red) - i16::from(self.red),
            i16::from(other.green) - i16::from(self.green),
            i16::from(other.blue) - i16::from(self.blue),
        )
    }
}
