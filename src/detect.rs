//! Classify strings by the CSS color syntax they are written in.
//!
//! Every function here is a pure function of its input. Patterns are
//! compiled once on first use and shared after that.

use std::sync::OnceLock;

use regex::Regex;

use crate::{convert, Format};

/// The syntax a color string was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// `#rrggbb`
    Hex24,
    /// `#rrggbbaa`
    Hex32,
    /// `rgb(...)` or `rgba(...)`
    Rgb,
    /// `hsl(...)` or `hsla(...)`
    Hsl,
    /// `hwb(...)`
    Hwb,
    /// Anything else.
    Invalid,
}

impl Syntax {
    /// The output format that renders this syntax, if any.
    pub fn format(&self) -> Option<Format> {
        match self {
            Syntax::Hex24 | Syntax::Hex32 => Some(Format::Hex),
            Syntax::Rgb => Some(Format::Rgb),
            Syntax::Hsl => Some(Format::Hsl),
            Syntax::Hwb => Some(Format::Hwb),
            Syntax::Invalid => None,
        }
    }
}

struct Patterns {
    hex24: Regex,
    hex32: Regex,
    rgb: Regex,
    hsl: Regex,
    hwb: Regex,
}

impl Patterns {
    fn compile() -> Self {
        let compile = |pattern: &str| {
            Regex::new(pattern).unwrap_or_else(|err| panic!("bad pattern {pattern:?}: {err}"))
        };

        Self {
            hex24: compile(r"(?i)^#(?:[0-9a-f]{2}){3}$"),
            hex32: compile(r"(?i)^#(?:[0-9a-f]{2}){4}$"),
            rgb: compile(r"(?i)^rgba?\(.*\)$"),
            hsl: compile(r"(?i)^hsla?\(.*\)$"),
            hwb: compile(r"(?i)^hwb?\(.*\)$"),
        }
    }
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(Patterns::compile)
}

/// Classify `text`, testing hex24, hex32, rgb, hsl and hwb in that order.
pub fn detect(text: &str) -> Syntax {
    if is_hex24(text) {
        Syntax::Hex24
    } else if is_hex32(text) {
        Syntax::Hex32
    } else if is_rgb(text) {
        Syntax::Rgb
    } else if is_hsl(text) {
        Syntax::Hsl
    } else if is_hwb(text) {
        Syntax::Hwb
    } else {
        Syntax::Invalid
    }
}

/// Whether `text` is written in any of the supported syntaxes.
pub fn is_valid(text: &str) -> bool {
    detect(text) != Syntax::Invalid
}

/// Whether `text` is a 6 or 8 digit hex color.
pub fn is_hex(text: &str) -> bool {
    is_hex24(text) || is_hex32(text)
}

/// Whether `text` is a 6 digit hex color.
pub fn is_hex24(text: &str) -> bool {
    patterns().hex24.is_match(text)
}

/// Whether `text` is an 8 digit hex color.
pub fn is_hex32(text: &str) -> bool {
    patterns().hex32.is_match(text)
}

/// Whether `text` is an `rgb()` or `rgba()` color, or the bare `rgb` tag.
pub fn is_rgb(text: &str) -> bool {
    patterns().rgb.is_match(text) || text == "rgb"
}

/// Whether `text` is an `hsl()` or `hsla()` color, or the bare `hsl` tag.
pub fn is_hsl(text: &str) -> bool {
    patterns().hsl.is_match(text) || text == "hsl"
}

/// Whether `text` is an `hwb()` color, or the bare `hwb` tag.
pub fn is_hwb(text: &str) -> bool {
    patterns().hwb.is_match(text) || text == "hwb"
}

/// Whether the color in `text` is not fully opaque.
pub fn has_alpha(text: &str) -> bool {
    convert::parse_text(text, detect(text)).alpha != 1.0
}
