//! Color tokens for theming

use hui_core::Color;
use serde::{Deserialize, Serialize};

/// Semantic color roles
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    Brand,
    Accent,
    Bland,
    Danger,
    Warning,
    Info,
    Surface,
}

impl ColorRole {
    pub const ALL: [ColorRole; 7] = [
        ColorRole::Brand,
        ColorRole::Accent,
        ColorRole::Bland,
        ColorRole::Danger,
        ColorRole::Warning,
        ColorRole::Info,
        ColorRole::Surface,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ColorRole::Brand => "brand",
            ColorRole::Accent => "accent",
            ColorRole::Bland => "bland",
            ColorRole::Danger => "danger",
            ColorRole::Warning => "warning",
            ColorRole::Info => "info",
            ColorRole::Surface => "surface",
        }
    }
}

/// Complete set of semantic colors
#[derive(Clone, Debug, Hash, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorTokens {
    pub brand: Color,
    pub accent: Color,
    pub bland: Color,
    pub danger: Color,
    pub warning: Color,
    pub info: Color,
    pub surface: Color,
}

impl ColorTokens {
    /// Get a color by role
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Brand => self.brand,
            ColorRole::Accent => self.accent,
            ColorRole::Bland => self.bland,
            ColorRole::Danger => self.danger,
            ColorRole::Warning => self.warning,
            ColorRole::Info => self.info,
            ColorRole::Surface => self.surface,
        }
    }

    /// Replace the color for a role
    pub fn set(&mut self, role: ColorRole, color: Color) {
        let slot = match role {
            ColorRole::Brand => &mut self.brand,
            ColorRole::Accent => &mut self.accent,
            ColorRole::Bland => &mut self.bland,
            ColorRole::Danger => &mut self.danger,
            ColorRole::Warning => &mut self.warning,
            ColorRole::Info => &mut self.info,
            ColorRole::Surface => &mut self.surface,
        };
        *slot = color;
    }

    /// Light palette on a white surface
    pub fn light() -> Self {
        Self {
            brand: Color::BLACK,
            accent: Color::from_hex(0x2962FF),
            bland: Color::from_hex(0xCCCCCC),
            danger: Color::from_hex(0xEB002B),
            warning: Color::from_hex(0xF56200),
            info: Color::from_hex(0x2962FF),
            surface: Color::WHITE,
        }
    }

    /// Dark palette on a near-black surface
    pub fn dark() -> Self {
        Self {
            brand: Color::WHITE,
            accent: Color::from_hex(0x82B1FF),
            bland: Color::from_hex(0x555555),
            danger: Color::from_hex(0xFF5370),
            warning: Color::from_hex(0xFFAB40),
            info: Color::from_hex(0x82B1FF),
            surface: Color::from_hex(0x121212),
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::light()
    }
}
