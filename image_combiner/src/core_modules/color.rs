// THEORY:
// `FloatColor` is the arithmetic currency of the accumulation tool. Every input
// image contributes `color * brightness` at each of its pixels, and those
// contributions are summed into the canvas. The type therefore has two jobs:
//
// 1.  **Arithmetic value**: component-wise `+` and scalar `*`. Channels are
//     nominally 0.0..=1.0 but are never clamped while summing, so several bright
//     inputs landing on one pixel can push a channel well past 1.0.
// 2.  **Pixel adapter**: conversion to and from the 16-bit `image` pixel types.
//     Clamping happens only here, on the way out, so overlapping contributions
//     saturate instead of wrapping.
//
// Color tokens from the command line are resolved by `FromStr`: SVG/CSS color
// names first (case-insensitive), then 24-bit or 48-bit hex with an optional `#`.

use crate::error::{CombinerError, Result};
use image::{Rgb, Rgba};
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

pub type Component = f64;

const MAX_U8: Component = u8::MAX as Component;
const MAX_U16: Component = u16::MAX as Component;

/// An unclamped RGB color with floating-point channels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatColor {
    pub red: Component,
    pub green: Component,
    pub blue: Component,
}

impl FloatColor {
    pub const BLACK: FloatColor = FloatColor::new(0.0, 0.0, 0.0);

    pub const fn new(red: Component, green: Component, blue: Component) -> Self {
        Self { red, green, blue }
    }

    /// Builds a color from 8-bit channels, normalized by 255.
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            red as Component / MAX_U8,
            green as Component / MAX_U8,
            blue as Component / MAX_U8,
        )
    }

    /// Builds a color from 16-bit channels, normalized by 65535.
    pub fn from_rgb16(red: u16, green: u16, blue: u16) -> Self {
        Self::new(
            red as Component / MAX_U16,
            green as Component / MAX_U16,
            blue as Component / MAX_U16,
        )
    }

    /// Clamped 16-bit rendering. Anything at or above 1.0 becomes 65535.
    pub fn to_rgb16(self) -> Rgb<u16> {
        Rgb([
            channel_to_u16(self.red),
            channel_to_u16(self.green),
            channel_to_u16(self.blue),
        ])
    }

    /// Same as `to_rgb16`, fully opaque.
    pub fn to_rgba16(self) -> Rgba<u16> {
        let Rgb([r, g, b]) = self.to_rgb16();
        Rgba([r, g, b, u16::MAX])
    }
}

fn channel_to_u16(value: Component) -> u16 {
    if value >= 1.0 {
        u16::MAX
    } else if value <= 0.0 || value.is_nan() {
        0
    } else {
        (value * MAX_U16).round() as u16
    }
}

impl Add for FloatColor {
    type Output = FloatColor;

    fn add(self, other: FloatColor) -> FloatColor {
        FloatColor::new(
            self.red + other.red,
            self.green + other.green,
            self.blue + other.blue,
        )
    }
}

impl AddAssign for FloatColor {
    fn add_assign(&mut self, other: FloatColor) {
        *self = *self + other;
    }
}

impl Mul<Component> for FloatColor {
    type Output = FloatColor;

    fn mul(self, scale: Component) -> FloatColor {
        FloatColor::new(self.red * scale, self.green * scale, self.blue * scale)
    }
}

impl From<Rgb<u16>> for FloatColor {
    fn from(pixel: Rgb<u16>) -> Self {
        let Rgb([r, g, b]) = pixel;
        FloatColor::from_rgb16(r, g, b)
    }
}

impl From<FloatColor> for Rgb<u16> {
    fn from(color: FloatColor) -> Self {
        color.to_rgb16()
    }
}

impl From<FloatColor> for Rgba<u16> {
    fn from(color: FloatColor) -> Self {
        color.to_rgba16()
    }
}

impl FromStr for FloatColor {
    type Err = CombinerError;

    fn from_str(token: &str) -> Result<Self> {
        parse_color(token)
    }
}

/// Resolves a command-line color token.
///
/// Named colors win over hex, so `"red"` never reaches the hex path. Hex accepts
/// `rrggbb` or `rrrrggggbbbb`, with or without a leading `#`.
pub fn parse_color(token: &str) -> Result<FloatColor> {
    if let Some(named) = palette::named::from_str(&token.to_ascii_lowercase()) {
        return Ok(FloatColor::from_rgb8(named.red, named.green, named.blue));
    }

    let invalid = || CombinerError::InvalidColor {
        token: token.to_string(),
    };
    let digits = token.strip_prefix('#').unwrap_or(token);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    match digits.len() {
        6 => {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
            match (channel(0), channel(2), channel(4)) {
                (Ok(r), Ok(g), Ok(b)) => Ok(FloatColor::from_rgb8(r, g, b)),
                _ => Err(invalid()),
            }
        }
        12 => {
            let channel = |i: usize| u16::from_str_radix(&digits[i..i + 4], 16);
            match (channel(0), channel(4), channel(8)) {
                (Ok(r), Ok(g), Ok(b)) => Ok(FloatColor::from_rgb16(r, g, b)),
                _ => Err(invalid()),
            }
        }
        _ => Err(invalid()),
    }
}
