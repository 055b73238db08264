//! Typography tokens for theming

use std::hash::{Hash, Hasher};

use hui_core::Color;
use serde::{Deserialize, Serialize};

use super::spacing::{hash_f32, Length};

/// Typographic roles
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontRole {
    H1,
    H2,
    H3,
    H4,
    H5,
    Body1,
    Body2,
    Caption,
    Button,
    Subtitle1,
    Subtitle2,
}

impl FontRole {
    pub const ALL: [FontRole; 11] = [
        FontRole::H1,
        FontRole::H2,
        FontRole::H3,
        FontRole::H4,
        FontRole::H5,
        FontRole::Body1,
        FontRole::Body2,
        FontRole::Caption,
        FontRole::Button,
        FontRole::Subtitle1,
        FontRole::Subtitle2,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FontRole::H1 => "h1",
            FontRole::H2 => "h2",
            FontRole::H3 => "h3",
            FontRole::H4 => "h4",
            FontRole::H5 => "h5",
            FontRole::Body1 => "body1",
            FontRole::Body2 => "body2",
            FontRole::Caption => "caption",
            FontRole::Button => "button",
            FontRole::Subtitle1 => "subtitle1",
            FontRole::Subtitle2 => "subtitle2",
        }
    }
}

/// CSS `text-transform`
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

impl TextTransform {
    pub fn css(self) -> &'static str {
        match self {
            TextTransform::None => "none",
            TextTransform::Uppercase => "uppercase",
            TextTransform::Lowercase => "lowercase",
            TextTransform::Capitalize => "capitalize",
        }
    }
}

/// Font weights used by the default theme
pub const FONT_WEIGHT_NORMAL: u16 = 400;
pub const FONT_WEIGHT_BOLD: u16 = 700;

/// A typographic rule: the declarations a text role contributes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypographyRule {
    pub font_size: Length,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    pub margin: Length,
}

impl TypographyRule {
    pub fn new(font_size: Length) -> Self {
        Self {
            font_size,
            font_weight: None,
            line_height: None,
            text_transform: None,
            color: None,
            margin: Length::ZERO,
        }
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn bold(self) -> Self {
        self.weight(FONT_WEIGHT_BOLD)
    }

    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    pub fn transform(mut self, transform: TextTransform) -> Self {
        self.text_transform = Some(transform);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl Hash for TypographyRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.font_size.hash(state);
        self.font_weight.hash(state);
        match self.line_height {
            Some(lh) => {
                1u8.hash(state);
                hash_f32(lh, state);
            }
            None => 0u8.hash(state),
        }
        self.text_transform.hash(state);
        self.color.hash(state);
        self.margin.hash(state);
    }
}

/// One typography rule per font role
#[derive(Clone, Debug, Hash, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontTokens {
    pub h1: TypographyRule,
    pub h2: TypographyRule,
    pub h3: TypographyRule,
    pub h4: TypographyRule,
    pub h5: TypographyRule,
    pub body1: TypographyRule,
    pub body2: TypographyRule,
    pub caption: TypographyRule,
    pub button: TypographyRule,
    pub subtitle1: TypographyRule,
    pub subtitle2: TypographyRule,
}

impl FontTokens {
    /// Get the rule for a role
    pub fn get(&self, role: FontRole) -> &TypographyRule {
        match role {
            FontRole::H1 => &self.h1,
            FontRole::H2 => &self.h2,
            FontRole::H3 => &self.h3,
            FontRole::H4 => &self.h4,
            FontRole::H5 => &self.h5,
            FontRole::Body1 => &self.body1,
            FontRole::Body2 => &self.body2,
            FontRole::Caption => &self.caption,
            FontRole::Button => &self.button,
            FontRole::Subtitle1 => &self.subtitle1,
            FontRole::Subtitle2 => &self.subtitle2,
        }
    }

    /// Default type scale; `muted` colors the secondary roles
    pub fn with_muted(muted: Color) -> Self {
        Self {
            h1: TypographyRule::new(Length::Px(160.0)).bold(),
            h2: TypographyRule::new(Length::Px(100.0)).bold(),
            h3: TypographyRule::new(Length::Px(60.0)).bold(),
            h4: TypographyRule::new(Length::Px(24.0)).bold().line_height(1.5),
            h5: TypographyRule::new(Length::Px(16.0)).bold().line_height(1.5),
            body1: TypographyRule::new(Length::Px(16.0))
                .weight(FONT_WEIGHT_NORMAL)
                .transform(TextTransform::None)
                .line_height(1.5),
            body2: TypographyRule::new(Length::Px(16.0))
                .weight(FONT_WEIGHT_NORMAL)
                .transform(TextTransform::None)
                .color(muted),
            caption: TypographyRule::new(Length::Rem(0.8)),
            button: TypographyRule::new(Length::Rem(0.75))
                .bold()
                .transform(TextTransform::Uppercase),
            subtitle1: TypographyRule::new(Length::Px(60.0)).bold().color(muted),
            subtitle2: TypographyRule::new(Length::Px(24.0)).bold().color(muted),
        }
    }
}

impl Default for FontTokens {
    fn default() -> Self {
        Self::with_muted(Color::from_hex(0x444444))
    }
}
