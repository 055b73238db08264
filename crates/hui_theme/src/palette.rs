//! Readable palette derivation
//!
//! Given a base color and the surface it will sit on, [`ReadablePalette`]
//! keeps the base for decorative use (borders, fills, icons) and picks a
//! foreground color for text that is guaranteed to be legible on that
//! surface.

use hui_core::Color;

use crate::tokens::{ColorRole, ColorTokens};

/// Minimum WCAG contrast ratio for the readable color (AA, normal text)
pub const MIN_READABLE_CONTRAST: f64 = 4.5;

/// The two colors a component derives from `(base, surface)`
#[derive(Clone, Copy, Debug, Hash, PartialEq)]
pub struct ReadablePalette {
    /// Equal to the base color
    pub decorative: Color,
    /// Legible on the surface
    pub readable: Color,
}

impl ReadablePalette {
    /// Derive the palette for `base` on `surface`
    ///
    /// The base is kept when its contrast against the surface reaches
    /// [`MIN_READABLE_CONTRAST`]; otherwise black or white is used, whichever
    /// contrasts more (black on a tie). Translucent bases are judged as they
    /// would appear composited over the surface.
    pub fn derive(base: Color, surface: Color) -> Self {
        let seen = base.composite_over(surface);
        let readable = if Color::contrast_ratio(&seen, &surface) >= MIN_READABLE_CONTRAST {
            base
        } else {
            let on_black = Color::contrast_ratio(&Color::BLACK, &surface);
            let on_white = Color::contrast_ratio(&Color::WHITE, &surface);
            if on_black >= on_white {
                Color::BLACK
            } else {
                Color::WHITE
            }
        };
        Self {
            decorative: base,
            readable,
        }
    }

    /// Derive the palette for a theme role on the theme's surface
    pub fn for_role(colors: &ColorTokens, role: ColorRole) -> Self {
        Self::derive(colors.get(role), colors.surface)
    }

    /// Contrast of the readable color against `surface`
    pub fn contrast_on(&self, surface: Color) -> f64 {
        Color::contrast_ratio(&self.readable.composite_over(surface), &surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_contrast_base_is_kept() {
        let palette = ReadablePalette::derive(Color::from_hex(0xEB002B), Color::WHITE);
        assert_eq!(palette.decorative, palette.readable);
    }

    #[test]
    fn test_low_contrast_base_falls_back() {
        let bland = Color::from_hex(0xCCCCCC);
        let palette = ReadablePalette::derive(bland, Color::WHITE);
        assert_eq!(palette.decorative, bland);
        assert_eq!(palette.readable, Color::BLACK);

        let dark = ReadablePalette::derive(Color::from_hex(0x333333), Color::from_hex(0x121212));
        assert_eq!(dark.readable, Color::WHITE);
    }

    #[test]
    fn test_base_equal_to_surface_still_readable() {
        let surface = Color::from_hex(0x2962FF);
        let palette = ReadablePalette::derive(surface, surface);
        assert!(palette.contrast_on(surface) > 1.0);
    }

    #[test]
    fn test_translucent_base_judged_over_surface() {
        let ghost = Color::BLACK.with_alpha(0.05);
        let palette = ReadablePalette::derive(ghost, Color::WHITE);
        assert_eq!(palette.readable, Color::BLACK);
    }
}
