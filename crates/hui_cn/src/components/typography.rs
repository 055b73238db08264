//! Typography: text set in one of the theme's font roles
//!
//! Headings shrink one step on viewports at or below the tablet breakpoint
//! through a media block. A component can also pick a different role per
//! device class with [`Typography::at`]; that choice is made at render time
//! from the scope's viewport width.
//!
//! ```rust
//! use hui_cn::prelude::*;
//! use hui_theme::{DeviceClass, FontRole};
//!
//! let cx = RenderCx::new().with_viewport(360);
//! let title = typography(FontRole::H1)
//!     .at(DeviceClass::Mobile, FontRole::H3)
//!     .text("Welcome")
//!     .render(&cx)
//!     .unwrap();
//! assert_eq!(title.tag, "h1");
//! ```

use hui_core::{Element, Node};
use hui_style::{
    AttrPolicy, ClassSet, Property, Result, Root, RuleBuilder, StyleEnv, StyleRule, StyleTemplate,
};
use hui_theme::{DeviceClass, FontRole};
use smallvec::SmallVec;

use super::shared::{StyleProps, Styled};
use crate::context::RenderCx;

fn root(_: &StyleEnv<'_>) -> StyleRule {
    StyleRule::new()
}

/// Text color for roles whose font does not carry one
fn readable(env: &StyleEnv<'_>) -> StyleRule {
    StyleRule::new().set(Property::Color, env.color.readable)
}

/// Role a heading falls back to on small viewports
fn compact(role: FontRole) -> Option<FontRole> {
    match role {
        FontRole::H1 | FontRole::H2 => Some(FontRole::H3),
        FontRole::H3 => Some(FontRole::H4),
        _ => None,
    }
}

fn font(env: &StyleEnv<'_>, role: FontRole) -> StyleRule {
    let theme = env.theme;
    let rule = StyleRule::new().include(theme.font(role));
    match compact(role) {
        Some(smaller) => {
            let bp = &theme.breakpoints;
            rule.media(
                bp.down(bp.tablet),
                StyleRule::new().set(Property::FontSize, theme.font(smaller).font_size),
            )
        }
        None => rule,
    }
}

fn h1(env: &StyleEnv<'_>) -> StyleRule {
    font(env, FontRole::H1)
}

fn h2(env: &StyleEnv<'_>) -> StyleRule {
    font(env, FontRole::H2)
}

fn h3(env: &StyleEnv<'_>) -> StyleRule {
    font(env, FontRole::H3)
}

fn h4(env: &StyleEnv<'_>) -> StyleRule {
    font(env, FontRole::H4)
}

fn h5(env: &StyleEnv<'_>) -> StyleRule {
    font(env, FontRole::H5)
}

fn body1(env: &StyleEnv<'_>) -> StyleRule {
    font(env, FontRole::Body1)
}

fn body2(env: &StyleEnv<'_>) -> StyleRule {
    font(env, FontRole::Body2)
}

fn caption(env: &StyleEnv<'_>) -> StyleRule {
    font(env, FontRole::Caption)
}

fn button(env: &StyleEnv<'_>) -> StyleRule {
    font(env, FontRole::Button)
}

fn subtitle1(env: &StyleEnv<'_>) -> StyleRule {
    font(env, FontRole::Subtitle1)
}

fn subtitle2(env: &StyleEnv<'_>) -> StyleRule {
    font(env, FontRole::Subtitle2)
}

const RULES: &[(&str, RuleBuilder)] = &[
    ("root", root),
    ("readable", readable),
    ("h1", h1),
    ("h2", h2),
    ("h3", h3),
    ("h4", h4),
    ("h5", h5),
    ("body1", body1),
    ("body2", body2),
    ("caption", caption),
    ("button", button),
    ("subtitle1", subtitle1),
    ("subtitle2", subtitle2),
];

pub const TYPOGRAPHY_STYLES: StyleTemplate = StyleTemplate::new("typography", RULES);

const POLICY: AttrPolicy = AttrPolicy::new("Typography", &[]);

/// Default tag for a role
pub fn tag_for(role: FontRole) -> &'static str {
    match role {
        FontRole::H1 => "h1",
        FontRole::H2 => "h2",
        FontRole::H3 => "h3",
        FontRole::H4 => "h4",
        FontRole::H5 => "h5",
        FontRole::Body1 | FontRole::Body2 => "p",
        _ => "span",
    }
}

/// Text in a font role
#[derive(Clone, Debug)]
pub struct Typography {
    style: StyleProps,
    role: FontRole,
    responsive: SmallVec<[(DeviceClass, FontRole); 2]>,
    children: Vec<Node>,
}

impl Typography {
    pub fn new(role: FontRole) -> Self {
        Self {
            style: StyleProps::default(),
            role,
            responsive: SmallVec::new(),
            children: Vec::new(),
        }
    }

    /// Use `role` instead when the viewport falls in `device`
    pub fn at(mut self, device: DeviceClass, role: FontRole) -> Self {
        self.responsive.retain(|(d, _)| *d != device);
        self.responsive.push((device, role));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Role in effect for the scope's viewport
    pub fn role_in(&self, cx: &RenderCx) -> FontRole {
        cx.device_class()
            .and_then(|device| {
                self.responsive
                    .iter()
                    .find(|(d, _)| *d == device)
                    .map(|(_, role)| *role)
            })
            .unwrap_or(self.role)
    }

    pub fn render(&self, cx: &RenderCx) -> Result<Element> {
        let rules = cx.compose(&TYPOGRAPHY_STYLES, &self.style)?;
        let role = self.role_in(cx);
        let colored = cx.theme().font(role).color.is_some();

        let classes = ClassSet::new()
            .rule(&rules, role.id())?
            .rule_if(&rules, !colored, "readable")?;
        let mut element = Root::new(&rules, tag_for(self.role), self.style.component.as_deref())
            .classes(classes)
            .render(&self.style.attrs, &POLICY)?;
        element.children.extend(self.children.iter().cloned());
        Ok(element)
    }
}

impl Styled for Typography {
    fn style_props(&mut self) -> &mut StyleProps {
        &mut self.style
    }
}

pub fn typography(role: FontRole) -> Typography {
    Typography::new(role)
}
