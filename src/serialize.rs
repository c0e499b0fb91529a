//! Render a [`Color`] in each of the supported textual forms.
//!
//! Alpha is included when it is forced or the color is not fully opaque.
//! Channels that did not parse are rendered as 0.

use std::fmt;

use crate::{math, Color, Component, Format};

/// Drop the sign of a negative zero so it prints as `0`.
fn number(value: Component) -> Component {
    value + 0.0
}

impl Color {
    fn shows_alpha(&self, force_alpha: bool) -> bool {
        force_alpha || self.alpha != 1.0
    }

    /// The red, green, blue and alpha channels as two digit lowercase hex
    /// values. Alpha is scaled to `0..=255`.
    pub fn to_hex_segments(&self) -> [String; 4] {
        let alpha = math::clamp((self.alpha * 255.0).round(), 0.0, 255.0) as u8;
        [self.red, self.green, self.blue, alpha].map(math::byte_to_hex)
    }

    /// Render as `#rrggbb`, or `#rrggbbaa` when alpha is shown.
    pub fn to_hex_string(&self, force_alpha: bool) -> String {
        let [r, g, b, a] = self.to_hex_segments();

        if self.shows_alpha(force_alpha) {
            format!("#{r}{g}{b}{a}")
        } else {
            format!("#{r}{g}{b}")
        }
    }

    /// Render as `rgb(r, g, b)`, or `rgba(r, g, b, a)` when alpha is shown.
    pub fn to_rgb_string(&self, force_alpha: bool) -> String {
        let (r, g, b) = (self.red, self.green, self.blue);

        if self.shows_alpha(force_alpha) {
            format!("rgba({r}, {g}, {b}, {})", self.alpha)
        } else {
            format!("rgb({r}, {g}, {b})")
        }
    }

    /// Render as `hsl(h, s%, l%)`, or `hsla(h, s%, l%, a)` when alpha is
    /// shown. A gray has no hue and renders it as 0.
    pub fn to_hsl_string(&self, force_alpha: bool) -> String {
        let hsl = self.to_hsl();
        let h = number(hsl.hue.unwrap_or(0.0));
        let (s, l) = (number(hsl.saturation), number(hsl.lightness));

        if self.shows_alpha(force_alpha) {
            format!("hsla({h}, {s}%, {l}%, {})", self.alpha)
        } else {
            format!("hsl({h}, {s}%, {l}%)")
        }
    }

    /// Render as `hwb(h w% b%)`, or `hwb(h w% b% / a)` when alpha is shown.
    /// A gray has no hue and renders it as 0.
    pub fn to_hwb_string(&self, force_alpha: bool) -> String {
        let hwb = self.to_hwb();
        let h = number(hwb.hue.unwrap_or(0.0));
        let (w, b) = (number(hwb.whiteness), number(hwb.blackness));

        if self.shows_alpha(force_alpha) {
            format!("hwb({h} {w}% {b}% / {})", self.alpha)
        } else {
            format!("hwb({h} {w}% {b}%)")
        }
    }

    /// Render in the given format.
    pub fn to_format_string(&self, format: Format, force_alpha: bool) -> String {
        match format {
            Format::Hex => self.to_hex_string(force_alpha),
            Format::Rgb => self.to_rgb_string(force_alpha),
            Format::Hsl => self.to_hsl_string(force_alpha),
            Format::Hwb => self.to_hwb_string(force_alpha),
        }
    }
}

/// Formats the color as hex. The alternate flag (`{:#}`) forces alpha.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string(f.alternate()))
    }
}
