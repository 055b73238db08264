//! Responsive breakpoints and media predicates
//!
//! Breakpoints are integer pixel widths. `down(w)` matches viewports `<= w`
//! and `up(w)` matches viewports `>= w + 1`, so for any `w` the two queries
//! split the width axis with no overlap and no gap.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Breakpoint token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
    DesktopLarge,
}

/// Device classes derived from a viewport width
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
    DesktopLarge,
}

/// A width-gated media predicate
///
/// Both bounds are inclusive. A query with `min_width > max_width` is empty
/// and matches no width.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct MediaQuery {
    pub min_width: Option<u32>,
    pub max_width: Option<u32>,
}

impl MediaQuery {
    pub fn matches(&self, width: u32) -> bool {
        self.min_width.map_or(true, |min| width >= min)
            && self.max_width.map_or(true, |max| width <= max)
    }

    pub fn is_empty(&self) -> bool {
        matches!((self.min_width, self.max_width), (Some(min), Some(max)) if min > max)
    }

    /// Intersection of two predicates
    pub fn and(self, other: MediaQuery) -> MediaQuery {
        let min_width = match (self.min_width, other.min_width) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        let max_width = match (self.max_width, other.max_width) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        MediaQuery {
            min_width,
            max_width,
        }
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("@media ")?;
        match (self.min_width, self.max_width) {
            (Some(min), Some(max)) => {
                write!(f, "(min-width: {min}px) and (max-width: {max}px)")
            }
            (Some(min), None) => write!(f, "(min-width: {min}px)"),
            (None, Some(max)) => write!(f, "(max-width: {max}px)"),
            (None, None) => f.write_str("all"),
        }
    }
}

/// Breakpoint widths in pixels
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Breakpoints {
    pub mobile: u32,
    pub tablet: u32,
    pub desktop: u32,
    pub desktop_large: u32,
}

impl Breakpoints {
    pub fn get(&self, breakpoint: Breakpoint) -> u32 {
        match breakpoint {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Tablet => self.tablet,
            Breakpoint::Desktop => self.desktop,
            Breakpoint::DesktopLarge => self.desktop_large,
        }
    }

    /// Widths strictly above `width`
    ///
    /// No width lies above `u32::MAX`, so `up(u32::MAX)` is empty.
    pub fn up(&self, width: u32) -> MediaQuery {
        match width.checked_add(1) {
            Some(min) => MediaQuery {
                min_width: Some(min),
                max_width: None,
            },
            None => MediaQuery {
                min_width: Some(u32::MAX),
                max_width: Some(u32::MAX - 1),
            },
        }
    }

    /// Widths at or below `width`
    pub fn down(&self, width: u32) -> MediaQuery {
        MediaQuery {
            min_width: None,
            max_width: Some(width),
        }
    }

    /// The band `up(min) ∧ down(max)`
    pub fn between(&self, min: u32, max: u32) -> MediaQuery {
        self.up(min).and(self.down(max))
    }

    /// Classify a viewport width using the `down` boundaries
    pub fn device_class(&self, width: u32) -> DeviceClass {
        if width <= self.tablet {
            DeviceClass::Mobile
        } else if width <= self.desktop {
            DeviceClass::Tablet
        } else if width <= self.desktop_large {
            DeviceClass::Desktop
        } else {
            DeviceClass::DesktopLarge
        }
    }

    /// Widths must be strictly increasing
    pub fn is_ascending(&self) -> bool {
        self.mobile < self.tablet && self.tablet < self.desktop && self.desktop < self.desktop_large
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: 375,
            tablet: 768,
            desktop: 1024,
            desktop_large: 1440,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_text() {
        let bp = Breakpoints::default();
        assert_eq!(bp.up(bp.tablet).to_string(), "@media (min-width: 769px)");
        assert_eq!(bp.down(bp.tablet).to_string(), "@media (max-width: 768px)");
        assert_eq!(
            bp.between(bp.tablet, bp.desktop).to_string(),
            "@media (min-width: 769px) and (max-width: 1024px)"
        );
    }

    #[test]
    fn test_up_and_down_partition_widths() {
        let bp = Breakpoints::default();
        for w in [0u32, 1, 375, 767, 768, 769, 1024, 1440, 4000] {
            let down = bp.down(w);
            let up = bp.up(w);
            assert!(down.matches(w));
            assert!(up.matches(w + 1));
            for x in w.saturating_sub(3)..=w + 3 {
                assert_ne!(down.matches(x), up.matches(x), "width {x}");
            }
        }
    }

    #[test]
    fn test_up_of_max_width_is_empty() {
        let bp = Breakpoints::default();
        let up = bp.up(u32::MAX);
        let down = bp.down(u32::MAX);
        assert!(up.is_empty());
        for x in [0, 768, u32::MAX - 1, u32::MAX] {
            assert!(down.matches(x));
            assert!(!up.matches(x));
        }
    }

    #[test]
    fn test_between_is_band() {
        let bp = Breakpoints::default();
        let band = bp.between(bp.tablet, bp.desktop);
        assert!(!band.matches(768));
        assert!(band.matches(769));
        assert!(band.matches(1024));
        assert!(!band.matches(1025));
    }

    #[test]
    fn test_empty_band_matches_nothing() {
        let bp = Breakpoints::default();
        let band = bp.between(1024, 768);
        assert!(band.is_empty());
        assert!((0..2000).all(|w| !band.matches(w)));
    }

    #[test]
    fn test_device_class() {
        let bp = Breakpoints::default();
        assert_eq!(bp.device_class(375), DeviceClass::Mobile);
        assert_eq!(bp.device_class(768), DeviceClass::Mobile);
        assert_eq!(bp.device_class(769), DeviceClass::Tablet);
        assert_eq!(bp.device_class(1024), DeviceClass::Tablet);
        assert_eq!(bp.device_class(1440), DeviceClass::Desktop);
        assert_eq!(bp.device_class(1441), DeviceClass::DesktopLarge);
    }
}
