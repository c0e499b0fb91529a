//! A [`Color`] represents a color that was specified in any of the supported
//! CSS notations, normalized to 8-bit sRGB channels and an alpha fraction.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::convert::{self, Rgba};
use crate::detect::{self, Syntax};
use crate::{math, Hsl, Hwb, ParseColorError};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all intermediate values are computed
/// as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all intermediate values are computed
/// as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// Flags to mark channels of a [`Color`] that did not receive a numeric
    /// value.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// Set when the red channel is missing.
        const RED_IS_NONE = 1 << 0;
        /// Set when the green channel is missing.
        const GREEN_IS_NONE = 1 << 1;
        /// Set when the blue channel is missing.
        const BLUE_IS_NONE = 1 << 2;
        /// Set when the alpha channel is missing.
        const ALPHA_IS_NONE = 1 << 3;
    }
}

/// Notations a numeric sequence can be interpreted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Red, green and blue in `0..=255`.
    /// <https://drafts.csswg.org/css-color-4/#rgb-functions>
    Rgb,
    /// Hue in degrees, saturation and lightness in percent.
    /// <https://drafts.csswg.org/css-color-4/#the-hsl-notation>
    Hsl,
    /// Hue in degrees, whiteness and blackness in percent.
    /// <https://drafts.csswg.org/css-color-4/#the-hwb-notation>
    Hwb,
}

impl Notation {
    /// The lowercase name of the notation, as used in CSS.
    pub fn name(&self) -> &'static str {
        match self {
            Notation::Rgb => "rgb",
            Notation::Hsl => "hsl",
            Notation::Hwb => "hwb",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Notation {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgb" => Ok(Notation::Rgb),
            "hsl" => Ok(Notation::Hsl),
            "hwb" => Ok(Notation::Hwb),
            _ => Err(ParseColorError::UnknownNotation { tag: s.to_string() }),
        }
    }
}

/// The textual forms a [`Color`] can be serialized to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// `#rrggbb` or `#rrggbbaa`
    #[default]
    Hex,
    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`
    Rgb,
    /// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`
    Hsl,
    /// `hwb(h w% b%)` or `hwb(h w% b% / a)`
    Hwb,
}

/// The inputs a [`Color`] can be built from.
#[derive(Clone, Copy, Debug)]
pub enum ColorInput<'a> {
    /// A string in any of the supported syntaxes.
    Text(&'a str),
    /// An existing color, which is copied.
    Color(&'a Color),
    /// Three components and an optional alpha in the given notation.
    Values(Notation, &'a [Component]),
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(value: &'a str) -> Self {
        ColorInput::Text(value)
    }
}

impl<'a> From<&'a String> for ColorInput<'a> {
    fn from(value: &'a String) -> Self {
        ColorInput::Text(value.as_str())
    }
}

impl<'a> From<&'a Color> for ColorInput<'a> {
    fn from(value: &'a Color) -> Self {
        ColorInput::Color(value)
    }
}

impl<'a> From<(Notation, &'a [Component])> for ColorInput<'a> {
    fn from((notation, values): (Notation, &'a [Component])) -> Self {
        ColorInput::Values(notation, values)
    }
}

/// A color with 8-bit red, green and blue channels and an alpha fraction.
///
/// A color keeps the input it was created from. All the `is_*` predicates
/// look at that input, not at the channels.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
    pub(crate) alpha: Component,
    pub(crate) flags: Flags,
    source: String,
}

impl Default for Color {
    /// Opaque black with no source, which is not a valid color.
    fn default() -> Self {
        Self {
            red: 0,
            green: 0,
            blue: 0,
            alpha: 1.0,
            flags: Flags::empty(),
            source: String::new(),
        }
    }
}

impl Color {
    /// Create a new [`Color`]. This never fails; check [`Color::is_valid`]
    /// and [`Color::is_complete`] before trusting the channels.
    /// ```rust
    /// use csscolor::{Color, Notation};
    ///
    /// let a = Color::new("#ff0000");
    /// let b = Color::new((Notation::Hsl, &[0.0, 100.0, 50.0][..]));
    /// let c = Color::new(&b);
    /// assert_eq!(a.to_hex_string(false), c.to_hex_string(false));
    /// ```
    pub fn new<'a>(input: impl Into<ColorInput<'a>>) -> Self {
        match input.into() {
            ColorInput::Text(text) => Self::from_text(text),
            ColorInput::Color(color) => color.clone(),
            ColorInput::Values(notation, values) => Self::from_rgba(
                convert::parse_values(notation, values),
                notation.name().to_string(),
            ),
        }
    }

    /// Interpret `values` in the notation named by `tag`. An unknown tag
    /// falls back to `rgb` and logs a warning.
    pub fn from_tagged_values(tag: &str, values: &[Component]) -> Self {
        let notation = tag.parse::<Notation>().unwrap_or_else(|err| {
            log::warn!("{err}, interpreting {values:?} as rgb");
            Notation::Rgb
        });

        Self::from_rgba(convert::parse_values(notation, values), tag.to_string())
    }

    /// Run the hex parser on `text` without detecting its syntax first. The
    /// first character is taken as the `#` marker whatever it is, so `"123"`
    /// has only two digits and stays black.
    ///
    /// This also accepts three digit colors, where each digit is the decimal
    /// value of its channel: `#123` is `rgb(1, 2, 3)`. Such colors are still
    /// not [valid](Color::is_valid).
    pub fn from_hex(text: &str) -> Self {
        Self::from_rgba(convert::parse_hex(text), text.to_string())
    }

    /// Parse `text`, failing if its syntax is not recognized or any of its
    /// channels did not parse.
    pub fn parse(text: &str) -> Result<Self, ParseColorError> {
        if !detect::is_valid(text) {
            return Err(ParseColorError::Unrecognized {
                input: text.to_string(),
            });
        }

        let color = Self::from_text(text);
        match color.first_missing_channel() {
            Some(channel) => Err(ParseColorError::MissingChannel {
                input: text.to_string(),
                channel,
            }),
            None => Ok(color),
        }
    }

    fn from_text(text: &str) -> Self {
        let syntax = detect::detect(text);
        if syntax == Syntax::Invalid {
            log::debug!("color {text:?} does not match any supported notation");
        }

        Self::from_rgba(convert::parse_text(text, syntax), text.to_string())
    }

    fn from_rgba(rgba: Rgba, source: String) -> Self {
        let mut flags = Flags::empty();

        let mut channel = |value: Component, flag: Flags| {
            if value.is_nan() {
                flags |= flag;
                0
            } else {
                math::clamp(value.round(), 0.0, 255.0) as u8
            }
        };

        let Components(red, green, blue) = rgba.channels;
        let red = channel(red, Flags::RED_IS_NONE);
        let green = channel(green, Flags::GREEN_IS_NONE);
        let blue = channel(blue, Flags::BLUE_IS_NONE);

        let alpha = if rgba.alpha.is_nan() {
            flags |= Flags::ALPHA_IS_NONE;
            1.0
        } else {
            math::clamp(rgba.alpha, 0.0, 1.0)
        };

        Self {
            red,
            green,
            blue,
            alpha,
            flags,
            source,
        }
    }

    fn first_missing_channel(&self) -> Option<&'static str> {
        [
            (Flags::RED_IS_NONE, "red"),
            (Flags::GREEN_IS_NONE, "green"),
            (Flags::BLUE_IS_NONE, "blue"),
            (Flags::ALPHA_IS_NONE, "alpha"),
        ]
        .into_iter()
        .find(|(flag, _)| self.flags.contains(*flag))
        .map(|(_, name)| name)
    }

    /// Return the red channel, or `None` if it did not parse.
    pub fn red(&self) -> Option<u8> {
        if self.flags.contains(Flags::RED_IS_NONE) {
            None
        } else {
            Some(self.red)
        }
    }

    /// Return the green channel, or `None` if it did not parse.
    pub fn green(&self) -> Option<u8> {
        if self.flags.contains(Flags::GREEN_IS_NONE) {
            None
        } else {
            Some(self.green)
        }
    }

    /// Return the blue channel, or `None` if it did not parse.
    pub fn blue(&self) -> Option<u8> {
        if self.flags.contains(Flags::BLUE_IS_NONE) {
            None
        } else {
            Some(self.blue)
        }
    }

    /// Return the alpha channel, in `0.0..=1.0`. A missing alpha reads as
    /// opaque; check [`Flags::ALPHA_IS_NONE`] to tell it apart.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    /// Return the flags of channels that did not parse.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Whether every channel received a numeric value.
    pub fn is_complete(&self) -> bool {
        self.flags.is_empty()
    }

    /// The input this color was created from: the string, or the notation
    /// tag for numeric input.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The syntax of the input this color was created from.
    pub fn syntax(&self) -> Syntax {
        detect::detect(&self.source)
    }

    /// Whether the input is written in any of the supported syntaxes.
    pub fn is_valid(&self) -> bool {
        detect::is_valid(&self.source)
    }

    /// Whether the input is a 6 or 8 digit hex color.
    pub fn is_hex(&self) -> bool {
        detect::is_hex(&self.source)
    }

    /// Whether the input is a 6 digit hex color.
    pub fn is_hex24(&self) -> bool {
        detect::is_hex24(&self.source)
    }

    /// Whether the input is an 8 digit hex color.
    pub fn is_hex32(&self) -> bool {
        detect::is_hex32(&self.source)
    }

    /// Whether the input is in `rgb` notation.
    pub fn is_rgb(&self) -> bool {
        detect::is_rgb(&self.source)
    }

    /// Whether the input is in `hsl` notation.
    pub fn is_hsl(&self) -> bool {
        detect::is_hsl(&self.source)
    }

    /// Whether the input is in `hwb` notation.
    pub fn is_hwb(&self) -> bool {
        detect::is_hwb(&self.source)
    }

    /// Whether the color is not fully opaque.
    pub fn has_alpha(&self) -> bool {
        self.alpha != 1.0
    }

    /// The channels scaled to `0.0..=1.0`.
    fn unit_components(&self) -> Components {
        Components(
            Component::from(self.red),
            Component::from(self.green),
            Component::from(self.blue),
        )
        .map(|channel| channel / 255.0)
    }

    /// Convert the channels to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        math::rgb_to_hsl(&self.unit_components())
    }

    /// Convert the channels to the HWB notation.
    pub fn to_hwb(&self) -> Hwb {
        math::rgb_to_hwb(&self.unit_components())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
