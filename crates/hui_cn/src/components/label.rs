//! Label component
//!
//! Picks up `for`, focus, error and disabled state from the enclosing form
//! control unless the caller sets them explicitly. Exactly one tone rule is
//! applied, picked in the order disabled, has-error, focused, normal.

use hui_core::{Color, Element, Node};
use hui_style::{
    AttrPolicy, ClassSet, Property, Result, Root, RuleBuilder, StyleEnv, StyleRule, StyleTemplate,
};
use hui_theme::{ColorRole, DurationToken, FontRole};

use super::shared::{resolve_id, StateFlags, StateProps, StyleProps, Styled};
use crate::context::RenderCx;

fn root(env: &StyleEnv<'_>) -> StyleRule {
    StyleRule::new()
        .include(env.theme.font(FontRole::Body1))
        .set(
            Property::Transition,
            format!("color {}", env.theme.duration(DurationToken::Standard)),
        )
}

fn normal(env: &StyleEnv<'_>) -> StyleRule {
    StyleRule::new()
        .set(Property::Color, Color::readable_color(&env.surface))
        .set(Property::Cursor, "pointer")
}

fn focused(env: &StyleEnv<'_>) -> StyleRule {
    StyleRule::new()
        .set(Property::Color, env.color.readable)
        .set(Property::Cursor, "pointer")
}

fn has_error(env: &StyleEnv<'_>) -> StyleRule {
    StyleRule::new()
        .set(Property::Color, env.palette(ColorRole::Danger).readable)
        .set(Property::Cursor, "pointer")
}

fn disabled(env: &StyleEnv<'_>) -> StyleRule {
    let bland = env.palette(ColorRole::Bland);
    StyleRule::new()
        .set(Property::Color, bland.readable.transparentize(0.3))
        .set(Property::Cursor, "not-allowed")
}

const RULES: &[(&str, RuleBuilder)] = &[
    ("root", root),
    ("normal", normal),
    ("focused", focused),
    ("hasError", has_error),
    ("disabled", disabled),
];

pub const LABEL_STYLES: StyleTemplate = StyleTemplate::new("label", RULES);

const POLICY: AttrPolicy = AttrPolicy::new("Label", &["form"]);

/// Which tone rule a label shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelTone {
    Normal,
    Focused,
    HasError,
    Disabled,
}

impl LabelTone {
    pub fn from_flags(flags: StateFlags) -> Self {
        if flags.disabled {
            LabelTone::Disabled
        } else if flags.has_error {
            LabelTone::HasError
        } else if flags.focused {
            LabelTone::Focused
        } else {
            LabelTone::Normal
        }
    }

    pub const ALL: [LabelTone; 4] = [
        LabelTone::Normal,
        LabelTone::Focused,
        LabelTone::HasError,
        LabelTone::Disabled,
    ];

    pub fn rule(self) -> &'static str {
        match self {
            LabelTone::Normal => "normal",
            LabelTone::Focused => "focused",
            LabelTone::HasError => "hasError",
            LabelTone::Disabled => "disabled",
        }
    }
}

/// Form label
#[derive(Clone, Debug, Default)]
pub struct Label {
    style: StyleProps,
    state: StateProps,
    html_for: Option<String>,
    children: Vec<Node>,
}

impl Label {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the labelled control; defaults to the form control's id
    pub fn html_for(mut self, id: impl Into<String>) -> Self {
        self.html_for = Some(id.into());
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.state.focused = Some(focused);
        self
    }

    pub fn has_error(mut self, has_error: bool) -> Self {
        self.state.has_error = Some(has_error);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.state.disabled = Some(disabled);
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

    pub fn render(&self, cx: &RenderCx) -> Result<Element> {
        let rules = cx.compose(&LABEL_STYLES, &self.style)?;
        let context = cx.form_control();
        let flags = StateFlags::resolve(&self.state, context);
        let html_for = resolve_id(self.html_for.as_deref(), context);

        let tone = LabelTone::from_flags(flags);
        let mut classes = ClassSet::new();
        for candidate in LabelTone::ALL {
            classes = classes.rule_if(&rules, candidate == tone, candidate.rule())?;
        }

        let mut element = Root::new(&rules, "label", self.style.component.as_deref())
            .classes(classes)
            .render(&self.style.attrs, &POLICY)?;
        if let Some(id) = html_for {
            element.attrs.set("for", id);
        }
        element.children.extend(self.children.iter().cloned());
        Ok(element)
    }
}

impl Styled for Label {
    fn style_props(&mut self) -> &mut StyleProps {
        &mut self.style
    }
}

/// Create a label
pub fn label() -> Label {
    Label::new()
}
