//! csscolor models a color value and converts it between the textual forms
//! of the CSS color syntax: hexadecimal, `rgb()`, `hsl()` and `hwb()`.
//!
//! ```rust
//! use csscolor::Color;
//!
//! let red = Color::new("hsl(0, 100%, 50%)");
//! assert!(red.is_hsl());
//! assert_eq!(red.to_hex_string(false), "#ff0000");
//! assert_eq!(red.to_rgb_string(false), "rgb(255, 0, 0)");
//! ```

#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
mod test;

mod color;
mod convert;
pub mod detect;
mod error;
mod hsl;
mod hwb;
mod math;
mod serialize;

pub use color::{Color, ColorInput, Component, Components, Flags, Format, Notation};
pub use detect::Syntax;
pub use error::ParseColorError;
pub use hsl::Hsl;
pub use hwb::Hwb;
