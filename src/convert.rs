//! Parsers for each supported syntax. Every parser produces an [`Rgba`] with
//! channels on the 0..=255 scale; a channel that could not be parsed is left
//! as NaN for [`Color`](crate::Color) to flag as missing.
//!
//! Alpha is only taken from the input when it is truthy. An explicit alpha of
//! 0 can not be told apart from no alpha at all, and the color stays opaque.

use crate::{detect::Syntax, math, Component, Components, Notation};

/// Channels and alpha produced by a parser, before they are stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Rgba {
    pub channels: Components,
    pub alpha: Component,
}

impl Default for Rgba {
    fn default() -> Self {
        Self {
            channels: Components(0.0, 0.0, 0.0),
            alpha: 1.0,
        }
    }
}

impl Rgba {
    fn with_alpha(mut self, alpha: Component) -> Self {
        if math::is_truthy(alpha) {
            self.alpha = math::clamp(alpha, 0.0, 1.0);
        }
        self
    }
}

/// Parse `text` with the parser matching its detected `syntax`.
pub(crate) fn parse_text(text: &str, syntax: Syntax) -> Rgba {
    match syntax {
        Syntax::Hex24 | Syntax::Hex32 => parse_hex(text),
        Syntax::Rgb => parse_rgb(&rgb_values(text)),
        Syntax::Hsl => parse_hsl(&hsl_values(text)),
        Syntax::Hwb => parse_hwb(&hwb_values(text)),
        Syntax::Invalid => Rgba::default(),
    }
}

/// Interpret a numeric sequence in the given notation.
pub(crate) fn parse_values(notation: Notation, values: &[Component]) -> Rgba {
    match notation {
        Notation::Rgb => parse_rgb(values),
        Notation::Hsl => parse_hsl(values),
        Notation::Hwb => parse_hwb(values),
    }
}

/// Parse a hex color. The first character is the `#` marker and is skipped
/// without being checked.
///
/// Three digit colors read each digit as a decimal value for its channel,
/// so `#123` is `rgb(1, 2, 3)`, not the CSS shorthand for `#112233`. An
/// alpha pair that is not hex leaves alpha as NaN.
pub(crate) fn parse_hex(text: &str) -> Rgba {
    let digits = text.chars().skip(1).collect::<Vec<_>>();

    let pair = |index: usize| -> Option<u8> {
        let pair = digits[index * 2..index * 2 + 2].iter().collect::<String>();
        math::hex_pair_to_byte(&pair)
    };
    let channel = |byte: Option<u8>| byte.map_or(Component::NAN, Component::from);

    match digits.len() {
        3 => {
            let [r, g, b] = [digits[0], digits[1], digits[2]]
                .map(|c| c.to_digit(10).map_or(Component::NAN, |d| d as Component));
            Rgba {
                channels: Components(r, g, b),
                alpha: 1.0,
            }
        }
        6 => Rgba {
            channels: Components(channel(pair(0)), channel(pair(1)), channel(pair(2))),
            alpha: 1.0,
        },
        8 => {
            let alpha = pair(3).map_or(Component::NAN, |byte| {
                math::round_to(Component::from(byte) / 255.0, 3)
            });
            Rgba {
                channels: Components(channel(pair(0)), channel(pair(1)), channel(pair(2))),
                alpha,
            }
        }
        _ => Rgba::default(),
    }
}

/// Split a numeric sequence into its three components and alpha. Missing
/// components are NaN, a missing alpha is 0 and will not be applied.
fn unpack(values: &[Component]) -> (Components, Component) {
    let at = |index: usize| values.get(index).copied().unwrap_or(Component::NAN);
    (
        Components(at(0), at(1), at(2)),
        values.get(3).copied().unwrap_or(0.0),
    )
}

fn parse_rgb(values: &[Component]) -> Rgba {
    let (channels, alpha) = unpack(values);

    Rgba {
        channels: channels.map(|channel| math::clamp(channel, 0.0, 255.0)),
        alpha: 1.0,
    }
    .with_alpha(alpha)
}

fn parse_hsl(values: &[Component]) -> Rgba {
    let (Components(hue, saturation, lightness), alpha) = unpack(values);

    Rgba {
        channels: math::hsl_to_rgb(&Components(hue, saturation / 100.0, lightness / 100.0)),
        alpha: 1.0,
    }
    .with_alpha(alpha)
}

fn parse_hwb(values: &[Component]) -> Rgba {
    let (Components(hue, whiteness, blackness), alpha) = unpack(values);

    Rgba {
        channels: math::hwb_to_rgb(&Components(hue, whiteness / 100.0, blackness / 100.0)),
        alpha: 1.0,
    }
    .with_alpha(alpha)
}

/// Keep only the characters in `keep` and the digits, then split the rest on
/// commas.
fn comma_separated(text: &str, keep: &[char]) -> Vec<Component> {
    text.chars()
        .filter(|c| c.is_ascii_digit() || keep.contains(c))
        .collect::<String>()
        .split(',')
        .map(math::parse_float)
        .collect()
}

fn rgb_values(text: &str) -> Vec<Component> {
    comma_separated(text, &['.', ','])
}

fn hsl_values(text: &str) -> Vec<Component> {
    comma_separated(text, &['.', ',', '%'])
}

/// Any run of characters other than digits, `.`, `,` and `%` separates two
/// values, so spaces, commas and the `/` before alpha all work.
fn hwb_values(text: &str) -> Vec<Component> {
    text.split(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '%')))
        .filter(|token| !token.is_empty())
        .map(math::parse_float)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: Component, g: Component, b: Component, alpha: Component) -> Rgba {
        Rgba {
            channels: Components(r, g, b),
            alpha,
        }
    }

    #[test]
    fn hex_pairs() {
        assert_eq!(parse_hex("#ff8000"), rgba(255.0, 128.0, 0.0, 1.0));
        assert_eq!(parse_hex("#FF8000"), rgba(255.0, 128.0, 0.0, 1.0));
        assert_eq!(parse_hex("#ff800080"), rgba(255.0, 128.0, 0.0, 0.502));
        assert_eq!(parse_hex("#00000000"), rgba(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn three_digit_hex_reads_decimal_digits() {
        assert_eq!(parse_hex("#123"), rgba(1.0, 2.0, 3.0, 1.0));

        let Rgba { channels, alpha } = parse_hex("#1a3");
        assert_eq!(channels.0, 1.0);
        assert!(channels.1.is_nan());
        assert_eq!(channels.2, 3.0);
        assert_eq!(alpha, 1.0);
    }

    #[test]
    fn hex_of_other_lengths_is_left_black() {
        assert_eq!(parse_hex("#ff00"), Rgba::default());
        assert_eq!(parse_hex("#"), Rgba::default());
        assert_eq!(parse_hex(""), Rgba::default());
    }

    #[test]
    fn first_character_is_always_skipped() {
        assert_eq!(parse_hex("123"), Rgba::default());
        assert_eq!(parse_hex("x123"), rgba(1.0, 2.0, 3.0, 1.0));
        assert_eq!(parse_hex("0ff8000"), rgba(255.0, 128.0, 0.0, 1.0));
    }

    #[test]
    fn bad_hex_pairs_are_nan() {
        let Rgba { channels, alpha } = parse_hex("#zz0000");
        assert!(channels.0.is_nan());
        assert_eq!(channels.1, 0.0);
        assert_eq!(alpha, 1.0);

        let Rgba { channels, alpha } = parse_hex("#102030zz");
        assert_eq!(channels, Components(16.0, 32.0, 48.0));
        assert!(alpha.is_nan());
    }

    #[test]
    fn rgb_strings() {
        assert_eq!(
            parse_text("rgb(255,0,0)", Syntax::Rgb),
            rgba(255.0, 0.0, 0.0, 1.0)
        );
        assert_eq!(
            parse_text("rgba(10, 20, 30, 0.5)", Syntax::Rgb),
            rgba(10.0, 20.0, 30.0, 0.5)
        );
        assert_eq!(
            parse_text("rgb(300, 0, 0)", Syntax::Rgb),
            rgba(255.0, 0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn rgb_values_are_clamped() {
        assert_eq!(
            parse_values(Notation::Rgb, &[-20.0, 128.0, 999.0, 4.0]),
            rgba(0.0, 128.0, 255.0, 1.0)
        );
        assert_eq!(
            parse_values(Notation::Rgb, &[1.0, 2.0, 3.0, 0.25]),
            rgba(1.0, 2.0, 3.0, 0.25)
        );
    }

    #[test]
    fn zero_alpha_is_ignored() {
        assert_eq!(
            parse_text("rgba(10, 20, 30, 0)", Syntax::Rgb),
            rgba(10.0, 20.0, 30.0, 1.0)
        );
        assert_eq!(
            parse_values(Notation::Hsl, &[0.0, 100.0, 50.0, 0.0]),
            rgba(255.0, 0.0, 0.0, 1.0)
        );
        assert_eq!(
            parse_values(Notation::Hwb, &[0.0, 0.0, 0.0, 0.0]),
            rgba(255.0, 0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn space_separated_rgb_runs_together() {
        let Rgba { channels, .. } = parse_text("rgb(255 0 0)", Syntax::Rgb);
        assert_eq!(channels.0, 255.0);
        assert!(channels.1.is_nan());
        assert!(channels.2.is_nan());
    }

    #[test]
    fn hsl_strings() {
        assert_eq!(
            parse_text("hsl(0,100%,50%)", Syntax::Hsl),
            rgba(255.0, 0.0, 0.0, 1.0)
        );
        assert_eq!(
            parse_text("hsla(120, 100%, 50%, 0.3)", Syntax::Hsl),
            rgba(0.0, 255.0, 0.0, 0.3)
        );
        assert_eq!(
            parse_values(Notation::Hsl, &[480.0, 100.0, 50.0]),
            rgba(0.0, 255.0, 0.0, 1.0)
        );
    }

    #[test]
    fn hwb_strings() {
        assert_eq!(
            parse_text("hwb(0 0% 0%)", Syntax::Hwb),
            rgba(255.0, 0.0, 0.0, 1.0)
        );
        assert_eq!(
            parse_text("hwb(0 20% 20% / 0.5)", Syntax::Hwb),
            rgba(204.0, 51.0, 51.0, 0.5)
        );
        assert_eq!(
            parse_text("hwb(0, 20%, 20%, 0.5)", Syntax::Hwb),
            rgba(204.0, 51.0, 51.0, 0.5)
        );
    }

    #[test]
    fn hwb_gray_collapses() {
        assert_eq!(
            parse_text("hwb(0 50% 50% / 0.5)", Syntax::Hwb),
            rgba(0.0, 0.0, 0.0, 0.5)
        );
    }

    #[test]
    fn missing_values_are_nan() {
        let Rgba { channels, alpha } = parse_values(Notation::Rgb, &[1.0]);
        assert_eq!(channels.0, 1.0);
        assert!(channels.1.is_nan());
        assert!(channels.2.is_nan());
        assert_eq!(alpha, 1.0);
    }

    #[test]
    fn invalid_text_is_left_black() {
        assert_eq!(parse_text("notacolor", Syntax::Invalid), Rgba::default());
    }
}
