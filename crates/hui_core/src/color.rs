//! RGBA color type and the color math used by theming
//!
//! Colors are stored as sRGB components in `[0.0, 1.0]`. All operations here
//! are pure: the same inputs always produce bit-identical outputs, which is
//! what lets style composition treat colors as part of a cache key.
//!
//! Contrast follows WCAG 2.1:
//!
//! - [`Color::relative_luminance`] linearizes sRGB and applies the standard
//!   channel weights
//! - [`Color::contrast_ratio`] returns a value in `[1.0, 21.0]`
//! - [`Color::readable_color`] is the cheaper luminance heuristic (black on
//!   light surfaces, white on dark ones)

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Luminance above which black text reads better than white.
const READABLE_LUMINANCE_THRESHOLD: f64 = 0.179;

/// Error returned when a CSS color string cannot be parsed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),

    #[error("invalid rgb()/rgba() color `{0}`")]
    InvalidFunction(String),

    #[error("unrecognized color `{0}`")]
    Unrecognized(String),
}

/// RGBA color (sRGB components)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Build a color from 8-bit channels and a `[0, 1]` alpha
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::rgba(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            a.clamp(0.0, 1.0),
        )
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantize to 8-bit RGB channels (alpha is left as a fraction)
    pub fn to_rgb8(&self) -> [u8; 3] {
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    /// Raw channel bits, with `-0.0` folded into `0.0`
    ///
    /// Two colors that compare equal always produce the same bits, so this
    /// is safe to feed into a hasher.
    pub fn to_bits(&self) -> [u32; 4] {
        [
            canonical_bits(self.r),
            canonical_bits(self.g),
            canonical_bits(self.b),
            canonical_bits(self.a),
        ]
    }

    /// Linear interpolation between two colors
    ///
    /// `t` is clamped to `[0, 1]`; `0.0` yields `from` and `1.0` yields `to`.
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Blend `self` toward `other` by `amount`
    pub fn mix(self, other: Color, amount: f32) -> Self {
        Self::lerp(&self, &other, amount)
    }

    /// Reduce opacity by `amount` (`0.3` turns an opaque color into 70% alpha)
    pub fn transparentize(self, amount: f32) -> Self {
        let a = (self.a - amount).clamp(0.0, 1.0);
        self.with_alpha(a)
    }

    /// Alpha-composite `self` over `background`
    pub fn composite_over(self, background: Color) -> Self {
        let a = self.a.clamp(0.0, 1.0);
        if a >= 1.0 {
            return self;
        }
        let under = background.a.clamp(0.0, 1.0) * (1.0 - a);
        let out_a = a + under;
        if out_a <= 0.0 {
            return Color::TRANSPARENT;
        }
        Self {
            r: (self.r * a + background.r * under) / out_a,
            g: (self.g * a + background.g * under) / out_a,
            b: (self.b * a + background.b * under) / out_a,
            a: out_a,
        }
    }

    /// WCAG 2.1 relative luminance in `[0, 1]` (alpha ignored)
    pub fn relative_luminance(&self) -> f64 {
        let r = srgb_to_linear(f64::from(self.r.clamp(0.0, 1.0)));
        let g = srgb_to_linear(f64::from(self.g.clamp(0.0, 1.0)));
        let b = srgb_to_linear(f64::from(self.b.clamp(0.0, 1.0)));
        0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
    }

    /// WCAG 2.1 contrast ratio, always `>= 1.0` regardless of argument order
    pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
        let la = a.relative_luminance();
        let lb = b.relative_luminance();
        let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Black or white, whichever reads better on `surface`
    pub fn readable_color(surface: &Color) -> Color {
        if surface.relative_luminance() > READABLE_LUMINANCE_THRESHOLD {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }
}

impl fmt::Display for Color {
    /// CSS form: `#rrggbb` when opaque, `rgba(r,g,b,a)` otherwise
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        if self.is_opaque() {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            let alpha = (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
            write!(f, "rgba({r},{g},{b},{alpha})")
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s = input.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(input.to_string()));
        }

        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            return body
                .strip_suffix(')')
                .and_then(parse_rgb_args)
                .ok_or_else(|| ColorParseError::InvalidFunction(input.to_string()));
        }

        match lower.as_str() {
            "black" => Ok(Color::BLACK),
            "white" => Ok(Color::WHITE),
            "transparent" => Ok(Color::TRANSPARENT),
            _ => Err(ColorParseError::Unrecognized(input.to_string())),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn canonical_bits(value: f32) -> u32 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, 1.0)),
        4 => Some(Color::from_rgba8(
            nibble(0)?,
            nibble(1)?,
            nibble(2)?,
            f32::from(nibble(3)?) / 255.0,
        )),
        6 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 1.0)),
        8 => Some(Color::from_rgba8(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            f32::from(byte(6)?) / 255.0,
        )),
        _ => None,
    }
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let channel = |s: &str| -> Option<u8> {
        let v: f32 = s.parse().ok()?;
        (0.0..=255.0).contains(&v).then(|| v.round() as u8)
    };
    let alpha = match parts.get(3) {
        Some(s) => {
            let a: f32 = s.parse().ok()?;
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            a
        }
        None => 1.0,
    };
    Some(Color::from_rgba8(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        alpha,
    ))
}
