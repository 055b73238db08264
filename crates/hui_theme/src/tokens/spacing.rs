//! Spacing scales and CSS lengths
//!
//! Three linear scales keep spacing free of magic numbers:
//!
//! - `space(n)`: small insets and margins (16px per unit by default)
//! - `gap(n)`: gutters between sections (48px per unit)
//! - `block(n)`: large structural sizes such as drawer widths (96px per unit)

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A CSS length
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f32),
    Rem(f32),
    Em(f32),
    Percent(f32),
    Vw(f32),
    Vh(f32),
}

impl Length {
    pub const ZERO: Length = Length::Px(0.0);

    fn parts(&self) -> (f32, &'static str) {
        match *self {
            Length::Px(v) => (v, "px"),
            Length::Rem(v) => (v, "rem"),
            Length::Em(v) => (v, "em"),
            Length::Percent(v) => (v, "%"),
            Length::Vw(v) => (v, "vw"),
            Length::Vh(v) => (v, "vh"),
        }
    }

    pub fn value(&self) -> f32 {
        self.parts().0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, unit) = self.parts();
        if value == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{value}{unit}")
        }
    }
}

impl Hash for Length {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (value, unit) = self.parts();
        unit.hash(state);
        hash_f32(value, state);
    }
}

/// Error for unparseable lengths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthParseError(pub String);

impl fmt::Display for LengthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid length `{}`", self.0)
    }
}

impl std::error::Error for LengthParseError {}

impl FromStr for Length {
    type Err = LengthParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s = input.trim();
        if s == "0" {
            return Ok(Length::ZERO);
        }
        // Longest suffixes first so "rem" is not read as "em".
        const UNITS: [(&str, fn(f32) -> Length); 6] = [
            ("rem", Length::Rem),
            ("px", Length::Px),
            ("em", Length::Em),
            ("vw", Length::Vw),
            ("vh", Length::Vh),
            ("%", Length::Percent),
        ];
        for (suffix, make) in UNITS {
            if let Some(number) = s.strip_suffix(suffix) {
                return number
                    .trim()
                    .parse::<f32>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(make)
                    .ok_or_else(|| LengthParseError(input.to_string()));
            }
        }
        Err(LengthParseError(input.to_string()))
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Pixel units behind the three spacing scales
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpacingScale {
    pub space_unit: f32,
    pub gap_unit: f32,
    pub block_unit: f32,
}

impl SpacingScale {
    pub fn space(&self, factor: f32) -> Length {
        Length::Px(factor * self.space_unit)
    }

    pub fn gap(&self, factor: f32) -> Length {
        Length::Px(factor * self.gap_unit)
    }

    pub fn block(&self, factor: f32) -> Length {
        Length::Px(factor * self.block_unit)
    }

    /// Units must be finite, positive and strictly increasing
    pub fn is_valid(&self) -> bool {
        let units = [self.space_unit, self.gap_unit, self.block_unit];
        units.iter().all(|u| u.is_finite() && *u > 0.0)
            && self.space_unit < self.gap_unit
            && self.gap_unit < self.block_unit
    }
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self {
            space_unit: 16.0,
            gap_unit: 48.0,
            block_unit: 96.0,
        }
    }
}

impl Hash for SpacingScale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.space_unit, state);
        hash_f32(self.gap_unit, state);
        hash_f32(self.block_unit, state);
    }
}

pub(crate) fn hash_f32<H: Hasher>(value: f32, state: &mut H) {
    let bits = if value == 0.0 { 0 } else { value.to_bits() };
    bits.hash(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scales_are_linear() {
        let scale = SpacingScale::default();
        assert_eq!(scale.space(1.0).to_string(), "16px");
        assert_eq!(scale.space(2.0).to_string(), "32px");
        assert_eq!(scale.space(0.75).to_string(), "12px");
        assert_eq!(scale.gap(1.0).to_string(), "48px");
        assert_eq!(scale.block(1.0).to_string(), "96px");
        assert_eq!(scale.block(3.0).to_string(), "288px");
    }

    #[test]
    fn test_zero_renders_unitless() {
        assert_eq!(SpacingScale::default().space(0.0).to_string(), "0");
    }

    #[test]
    fn test_length_parse() {
        assert_eq!("0.75rem".parse::<Length>().unwrap(), Length::Rem(0.75));
        assert_eq!("160px".parse::<Length>().unwrap(), Length::Px(160.0));
        assert_eq!("100%".parse::<Length>().unwrap(), Length::Percent(100.0));
        assert!("12 furlongs".parse::<Length>().is_err());
    }

    #[test]
    fn test_scale_validation() {
        assert!(SpacingScale::default().is_valid());
        let inverted = SpacingScale {
            space_unit: 64.0,
            ..SpacingScale::default()
        };
        assert!(!inverted.is_valid());
    }
}
