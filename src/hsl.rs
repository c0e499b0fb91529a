//! Model a color with the HSL notation.

use crate::Component;

csscolor_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space, as
    /// produced by [`Color::to_hsl`](crate::Color::to_hsl).
    pub struct Hsl {
        /// The hue in degrees, in `0..360`. `None` if the color has no
        /// chroma and the hue is meaningless.
        hue: Option<Component>,
        /// The saturation as a percentage.
        saturation: Component,
        /// The lightness as a percentage.
        lightness: Component,
    }
}

impl Hsl {
    /// Whether the color is a pure gray.
    pub fn is_achromatic(&self) -> bool {
        self.hue.is_none()
    }
}
