//! Shadow tokens for theming

use std::fmt;
use std::hash::{Hash, Hasher};

use hui_core::Color;
use serde::{Deserialize, Serialize};

use super::spacing::{hash_f32, Length};

/// Semantic shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    Subtle,
    Standard,
    Emphasis,
}

/// A box shadow definition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
        }
    }

    /// Centered glow with the given blur radius
    pub fn glow(blur: f32, color: Color) -> Self {
        Self::new(0.0, 0.0, blur, 0.0, color)
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

impl Hash for Shadow {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.offset_x, state);
        hash_f32(self.offset_y, state);
        hash_f32(self.blur, state);
        hash_f32(self.spread, state);
        self.color.hash(state);
    }
}

impl fmt::Display for Shadow {
    /// CSS `box-shadow` value, e.g. `0 0 20px 0 rgba(0,0,0,0.13)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            Length::Px(self.offset_x),
            Length::Px(self.offset_y),
            Length::Px(self.blur),
            Length::Px(self.spread),
            self.color
        )
    }
}

/// Complete set of shadow tokens
#[derive(Clone, Debug, Hash, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShadowTokens {
    pub subtle: Shadow,
    pub standard: Shadow,
    pub emphasis: Shadow,
}

impl ShadowTokens {
    /// Get shadow by token key
    pub fn get(&self, token: ShadowToken) -> &Shadow {
        match token {
            ShadowToken::Subtle => &self.subtle,
            ShadowToken::Standard => &self.standard,
            ShadowToken::Emphasis => &self.emphasis,
        }
    }

    /// Create shadow tokens for a light color scheme
    pub fn light() -> Self {
        let base_color = Color::BLACK;
        Self {
            subtle: Shadow::glow(10.0, base_color.with_alpha(0.10)),
            standard: Shadow::glow(20.0, base_color.with_alpha(0.13)),
            emphasis: Shadow::glow(30.0, base_color.with_alpha(0.13)),
        }
    }

    /// Create shadow tokens for a dark color scheme
    pub fn dark() -> Self {
        let base_color = Color::BLACK;
        Self {
            subtle: Shadow::glow(10.0, base_color.with_alpha(0.3)),
            standard: Shadow::glow(20.0, base_color.with_alpha(0.4)),
            emphasis: Shadow::glow(30.0, base_color.with_alpha(0.5)),
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_renders_css() {
        let tokens = ShadowTokens::light();
        assert_eq!(
            tokens.get(ShadowToken::Standard).to_string(),
            "0 0 20px 0 rgba(0,0,0,0.13)"
        );
        assert_eq!(tokens.subtle.to_string(), "0 0 10px 0 rgba(0,0,0,0.1)");
    }

    #[test]
    fn test_dark_shadows_are_heavier() {
        let light = ShadowTokens::light();
        let dark = ShadowTokens::dark();
        assert!(dark.standard.color.a > light.standard.color.a);
    }
}
