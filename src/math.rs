//! Math utility functions and the numeric conversions between the RGB, HSL
//! and HWB notations.
//!
//! Conversions work on [`Components`]. Forward conversions (HSL and HWB to
//! RGB) yield channels on the 0..=255 scale, the inverse conversions expect
//! channels on the 0..=1 scale.
//!
//! NOTE: A NaN component is a value that failed to parse. Every function in
//!       here carries NaN through to its output instead of replacing it.

use num_traits::Float;

use crate::{Component, Components, Hsl, Hwb};

/// Constrain `value` into `min..=max`. NaN is returned unchanged.
pub fn clamp<T: Float>(value: T, min: T, max: T) -> T {
    if value.is_nan() {
        value
    } else {
        value.max(min).min(max)
    }
}

/// Round `value` to the given number of decimal places.
pub fn round_to<T: Float + From<u8>>(value: T, places: i32) -> T {
    let scale = <T as From<u8>>::from(10).powi(places);
    (value * scale).round() / scale
}

/// Fold a hue given in degrees into `0..360`.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue % 360.0;
    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

/// Whether an alpha value may replace the default alpha. Zero and NaN do not.
pub fn is_truthy(value: Component) -> bool {
    value != 0.0 && !value.is_nan()
}

/// Parse the longest prefix of `token` that looks like an unsigned decimal
/// number, ignoring anything after it. Returns NaN when there is no such
/// prefix.
pub fn parse_float(token: &str) -> Component {
    let mut seen_dot = false;
    let end = token
        .char_indices()
        .find(|&(_, c)| match c {
            '0'..='9' => false,
            '.' if !seen_dot => {
                seen_dot = true;
                false
            }
            _ => true,
        })
        .map_or(token.len(), |(index, _)| index);

    token[..end].parse().unwrap_or(Component::NAN)
}

/// Convert a pair of hex digits to a byte.
pub fn hex_pair_to_byte(pair: &str) -> Option<u8> {
    if pair.len() != 2 || !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(pair, 16).ok()
}

/// Render a byte as two lowercase hex digits.
pub fn byte_to_hex(byte: u8) -> String {
    format!("{:02x}", byte)
}

/// Convert from HSL notation to RGB channels.
/// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
///
/// Takes the hue in degrees and saturation and lightness as fractions.
pub fn hsl_to_rgb(from: &Components) -> Components {
    let Components(hue, saturation, lightness) = *from;
    let hue = normalize_hue(hue);

    let f = |n: Component| {
        let k = (n + hue / 30.0) % 12.0;
        let a = saturation * lightness.min(1.0 - lightness);
        let value = lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
        (clamp(value, 0.0, 1.0) * 255.0).round()
    };

    Components(f(0.0), f(8.0), f(4.0))
}

/// Convert from HWB notation to RGB channels.
/// <https://drafts.csswg.org/css-color-4/#hwb-to-rgb>
///
/// Takes the hue in degrees and whiteness and blackness as fractions.
pub fn hwb_to_rgb(from: &Components) -> Components {
    let Components(hue, whiteness, blackness) = *from;

    if whiteness + blackness >= 1.0 {
        // The gray fraction is bounded by the channel range, not scaled to
        // it, so anything short of pure white truncates to 0.
        let gray = clamp(whiteness / (whiteness + blackness), 0.0, 255.0).trunc();
        return Components(gray, gray, gray);
    }

    hsl_to_rgb(&Components(hue, 1.0, 0.5)).map(|channel| {
        let channel = (channel / 255.0 * (1.0 - whiteness - blackness) * 255.0).round();
        clamp(((channel / 255.0 + whiteness) * 255.0).round(), 0.0, 255.0)
    })
}

/// Calculate the hue from RGB components and return it along with the min
/// and max RGB values. The hue is `None` when there is no chroma.
fn rgb_to_hue_with_min_max(from: &Components) -> (Option<Component>, Component, Component) {
    let Components(red, green, blue) = *from;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let delta = max - min;

    let hue = if delta != 0.0 {
        let hue = 60.0
            * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
        Some(hue.round() % 360.0)
    } else {
        None
    };

    (hue, min, max)
}

/// Convert from RGB notation to HSL notation.
/// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
///
/// Saturation and lightness are returned as whole percentages.
pub fn rgb_to_hsl(from: &Components) -> Hsl {
    let (hue, min, max) = rgb_to_hue_with_min_max(from);

    let lightness = (min + max) / 2.0;

    let saturation = if hue.is_none() || lightness == 0.0 || lightness == 1.0 {
        0.0
    } else {
        (max - lightness) / lightness.min(1.0 - lightness)
    };

    Hsl::new(
        hue,
        (saturation * 100.0).round(),
        (lightness * 100.0).round(),
    )
}

/// Convert from RGB notation to HWB notation.
/// <https://drafts.csswg.org/css-color-4/#rgb-to-hwb>
///
/// Whiteness and blackness are returned as whole percentages.
pub fn rgb_to_hwb(from: &Components) -> Hwb {
    let (hue, min, max) = rgb_to_hue_with_min_max(from);

    Hwb::new(hue, (min * 100.0).round(), ((1.0 - max) * 100.0).round())
}
