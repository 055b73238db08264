//! Style templates and the environment their rules are built in

use std::fmt;

use hui_core::Color;
use hui_theme::{ColorRole, ReadablePalette, Theme};
use rustc_hash::FxHashSet;

use crate::error::{Result, StyleError};
use crate::rule::StyleRule;

/// Name of the rule bound to a component's root element
pub const ROOT_RULE: &str = "root";

/// Builds one named rule from the composition environment
pub type RuleBuilder = fn(&StyleEnv<'_>) -> StyleRule;

/// What rule builders can read
pub struct StyleEnv<'a> {
    pub theme: &'a Theme,
    /// Palette of the caller-selected color on the active surface
    pub color: ReadablePalette,
    pub surface: Color,
}

impl<'a> StyleEnv<'a> {
    pub fn new(theme: &'a Theme, color: Color, surface: Color) -> Self {
        Self {
            theme,
            color: ReadablePalette::derive(color, surface),
            surface,
        }
    }

    /// Palette of a theme role on the active surface
    pub fn palette(&self, role: ColorRole) -> ReadablePalette {
        ReadablePalette::derive(self.theme.color(role), self.surface)
    }

    /// Blend `color` toward the active surface
    pub fn mix_with_surface(&self, color: Color, amount: f32) -> Color {
        color.mix(self.surface, amount)
    }
}

/// A named set of rule builders
///
/// The name prefixes every class token. Cache keys cover the name and the
/// rule names, so a caller template may reuse a built-in name without
/// picking up the built-in's cached rules.
#[derive(Clone, Copy)]
pub struct StyleTemplate {
    name: &'static str,
    default_color: ColorRole,
    rules: &'static [(&'static str, RuleBuilder)],
}

impl StyleTemplate {
    pub const fn new(name: &'static str, rules: &'static [(&'static str, RuleBuilder)]) -> Self {
        Self {
            name,
            default_color: ColorRole::Brand,
            rules,
        }
    }

    /// Color role used when the caller does not pick a color
    pub const fn default_color(mut self, role: ColorRole) -> Self {
        self.default_color = role;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn default_color_role(&self) -> ColorRole {
        self.default_color
    }

    pub fn rules(&self) -> &'static [(&'static str, RuleBuilder)] {
        self.rules
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> {
        self.rules.iter().map(|(name, _)| *name)
    }

    /// A template needs a `root` rule and unique rule names
    pub fn validate(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for name in self.rule_names() {
            if !seen.insert(name) {
                return Err(StyleError::DuplicateRule {
                    template: self.name.to_string(),
                    rule: name.to_string(),
                });
            }
        }
        if !seen.contains(ROOT_RULE) {
            return Err(StyleError::MissingRootRule {
                template: self.name.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for StyleTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleTemplate")
            .field("name", &self.name)
            .field("default_color", &self.default_color)
            .field("rules", &self.rule_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Caller-selected color and surface for one composition
///
/// Unset values fall back to the template's default color role and the
/// theme's surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleContext {
    pub color: Option<Color>,
    pub surface: Option<Color>,
}

impl StyleContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn surface(mut self, surface: Color) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Concrete `(color, surface)` for `template` under `theme`
    pub fn resolve(&self, theme: &Theme, template: &StyleTemplate) -> (Color, Color) {
        let color = self
            .color
            .unwrap_or_else(|| theme.color(template.default_color_role()));
        let surface = self.surface.unwrap_or(theme.colors.surface);
        (color, surface)
    }
}
