//! Anchor component: a themed link
//!
//! ```rust
//! use hui_cn::prelude::*;
//!
//! let cx = RenderCx::new();
//! let link = anchor().attr("href", "/docs").text("Docs").render(&cx).unwrap();
//! assert_eq!(link.tag, "a");
//! assert_eq!(link.attrs.get("href"), Some("/docs"));
//! ```

use hui_core::{Element, Node};
use hui_style::{AttrPolicy, Property, Result, Root, RuleBuilder, StyleEnv, StyleRule, StyleTemplate};
use hui_theme::{ColorRole, DurationToken};

use super::shared::{StyleProps, Styled};
use crate::context::RenderCx;

fn root(env: &StyleEnv<'_>) -> StyleRule {
    let readable = env.color.readable;
    StyleRule::new()
        .set(Property::Color, readable)
        .set(Property::TextDecoration, "underline")
        .set(
            Property::Transition,
            format!("color {}", env.theme.duration(DurationToken::Standard)),
        )
        .on(
            "active",
            StyleRule::new().set(Property::Color, readable.transparentize(0.5)),
        )
}

const RULES: &[(&str, RuleBuilder)] = &[("root", root)];

pub const ANCHOR_STYLES: StyleTemplate =
    StyleTemplate::new("anchor", RULES).default_color(ColorRole::Accent);

const POLICY: AttrPolicy = AttrPolicy::new(
    "Anchor",
    &["href", "target", "rel", "download", "hreflang", "type", "name"],
);

/// Themed link
#[derive(Clone, Debug, Default)]
pub struct Anchor {
    style: StyleProps,
    children: Vec<Node>,
}

impl Anchor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn render(&self, cx: &RenderCx) -> Result<Element> {
        let rules = cx.compose(&ANCHOR_STYLES, &self.style)?;
        let mut element = Root::new(&rules, "a", self.style.component.as_deref())
            .render(&self.style.attrs, &POLICY)?;
        element.children.extend(self.children.iter().cloned());
        Ok(element)
    }
}

impl Styled for Anchor {
    fn style_props(&mut self) -> &mut StyleProps {
        &mut self.style
    }
}

/// Create a link
pub fn anchor() -> Anchor {
    Anchor::new()
}
