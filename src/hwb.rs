//! Model a color with the HWB notation.

use crate::Component;

csscolor_macros::gen_model! {
    /// A color specified with the HWB notation in the sRGB color space, as
    /// produced by [`Color::to_hwb`](crate::Color::to_hwb).
    pub struct Hwb {
        /// The hue in degrees, in `0..360`. `None` if the color has no
        /// chroma.
        hue: Option<Component>,
        /// The whiteness as a percentage.
        whiteness: Component,
        /// The blackness as a percentage.
        blackness: Component,
    }
}
