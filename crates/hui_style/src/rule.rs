//! Structured style rules
//!
//! A [`StyleRule`] is an ordered list of declarations plus nested selector
//! blocks and breakpoint-gated media blocks. Rendering substitutes the
//! realized class selector for `&` and walks nested blocks and media blocks
//! through the same path, so they format identically.

use std::fmt::{Display, Write as _};

use hui_theme::{MediaQuery, TypographyRule};
use indexmap::IndexMap;

use crate::property::Property;
use crate::selector::Selector;

const INDENT: &str = "  ";

/// A block of declarations with optional nested and media blocks
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleRule {
    declarations: IndexMap<Property, String>,
    nested: Vec<(Selector, StyleRule)>,
    media: Vec<(MediaQuery, StyleRule)>,
}

impl StyleRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `property: value`
    ///
    /// Declaring a property twice keeps its first position and the last
    /// value, matching how a browser resolves a repeated declaration.
    pub fn set(mut self, property: Property, value: impl Display) -> Self {
        self.declare(property, value);
        self
    }

    pub fn declare(&mut self, property: Property, value: impl Display) {
        self.declarations.insert(property, value.to_string());
    }

    /// Add a block for `selector`, relative to this rule
    pub fn nest(mut self, selector: Selector, rule: StyleRule) -> Self {
        self.nested.push((selector, rule));
        self
    }

    /// Shorthand for `nest(Selector::on(pseudo), rule)`
    pub fn on(self, pseudo: &'static str, rule: StyleRule) -> Self {
        self.nest(Selector::on(pseudo), rule)
    }

    /// Add a block that only applies when `query` matches
    pub fn media(mut self, query: MediaQuery, rule: StyleRule) -> Self {
        self.media.push((query, rule));
        self
    }

    /// Splice in the declarations of a typography rule
    pub fn include(mut self, font: &TypographyRule) -> Self {
        self.declare(Property::FontSize, font.font_size);
        if let Some(weight) = font.font_weight {
            self.declare(Property::FontWeight, weight);
        }
        if let Some(line_height) = font.line_height {
            self.declare(Property::LineHeight, line_height);
        }
        if let Some(transform) = font.text_transform {
            self.declare(Property::TextTransform, transform.css());
        }
        if let Some(color) = font.color {
            self.declare(Property::Color, color);
        }
        self.declare(Property::Margin, font.margin);
        self
    }

    pub fn get(&self, property: Property) -> Option<&str> {
        self.declarations.get(&property).map(String::as_str)
    }

    pub fn declarations(&self) -> impl Iterator<Item = (Property, &str)> {
        self.declarations.iter().map(|(p, v)| (*p, v.as_str()))
    }

    pub fn nested(&self) -> &[(Selector, StyleRule)] {
        &self.nested
    }

    pub fn media_blocks(&self) -> &[(MediaQuery, StyleRule)] {
        &self.media
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.nested.is_empty() && self.media.is_empty()
    }

    /// Render as CSS with `&` bound to `selector`
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::new();
        self.write_blocks(selector, 0, &mut out);
        out
    }

    fn write_blocks(&self, selector: &str, depth: usize, out: &mut String) {
        let pad = INDENT.repeat(depth);
        if !self.declarations.is_empty() {
            let _ = writeln!(out, "{pad}{selector} {{");
            for (property, value) in &self.declarations {
                let _ = writeln!(out, "{pad}{INDENT}{property}: {value};");
            }
            let _ = writeln!(out, "{pad}}}");
        }
        for (nested, rule) in &self.nested {
            rule.write_blocks(&nested.resolve(selector), depth, out);
        }
        for (query, rule) in &self.media {
            let _ = writeln!(out, "{pad}{query} {{");
            rule.write_blocks(selector, depth + 1, out);
            let _ = writeln!(out, "{pad}}}");
        }
    }
}
