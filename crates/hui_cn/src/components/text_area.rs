//! TextArea component with filled and outlined variants
//!
//! State comes from props first and the enclosing form control second. The
//! variant rules only paint while the element is not `aria-invalid`; the
//! matching `*HasError` rule takes over when it is, so the union of classes
//! never declares the same property twice for one state.

use std::sync::Arc;

use hui_core::{Color, Element, ElementRef, FocusEvent, FocusHandler, Node};
use hui_style::{
    AttrPolicy, ClassSet, Property, Result, Root, RuleBuilder, Selector, StyleEnv, StyleRule,
    StyleTemplate,
};
use hui_theme::{ColorRole, DurationToken, FontRole};

use super::shared::{bind_ref, resolve_id, StateFlags, StateProps, StyleProps, Styled};
use crate::context::RenderCx;

/// Visual variant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAreaVariant {
    Filled,
    #[default]
    Outlined,
}

impl TextAreaVariant {
    pub fn rule(self) -> &'static str {
        match self {
            TextAreaVariant::Filled => "filled",
            TextAreaVariant::Outlined => "outlined",
        }
    }

    pub fn error_rule(self) -> &'static str {
        match self {
            TextAreaVariant::Filled => "filledHasError",
            TextAreaVariant::Outlined => "outlinedHasError",
        }
    }
}

fn valid() -> Selector {
    Selector::this().not("[aria-invalid]")
}

fn border(color: Color) -> String {
    format!("2px solid {color}")
}

fn root(env: &StyleEnv<'_>) -> StyleRule {
    let theme = env.theme;
    StyleRule::new()
        .include(theme.font(FontRole::Body1))
        .set(
            Property::Padding,
            format!("{} {}", theme.space(0.75), theme.space(0.5)),
        )
        .set(Property::Outline, "none")
        .set(Property::Appearance, "none")
        .set(Property::Margin, format!("{} 0", theme.space(0.5)))
        .on("disabled", StyleRule::new().set(Property::Cursor, "not-allowed"))
}

fn filled(env: &StyleEnv<'_>) -> StyleRule {
    let bland = env.palette(ColorRole::Bland).decorative;
    let color = env.color.decorative;
    StyleRule::new()
        .set(Property::Border, "none")
        .set(Property::Color, Color::readable_color(&env.surface))
        .set(
            Property::Transition,
            format!("background-color {}", env.theme.duration(DurationToken::Standard)),
        )
        .nest(
            valid(),
            StyleRule::new().set(Property::BackgroundColor, bland.transparentize(0.8)),
        )
        .nest(
            valid().pseudo("focus"),
            StyleRule::new().set(Property::BackgroundColor, color.transparentize(0.92)),
        )
        .nest(
            valid().pseudo("hover"),
            StyleRule::new().set(Property::BackgroundColor, color.transparentize(0.9)),
        )
        .nest(
            valid().pseudo("disabled"),
            StyleRule::new().set(Property::BackgroundColor, bland.transparentize(0.9)),
        )
}

fn filled_has_error(env: &StyleEnv<'_>) -> StyleRule {
    let danger = env.palette(ColorRole::Danger).decorative;
    StyleRule::new()
        .set(Property::BackgroundColor, danger.transparentize(0.9))
        .on(
            "focus",
            StyleRule::new().set(Property::BackgroundColor, danger.transparentize(0.85)),
        )
        .nest(
            Selector::this().not("[disabled]").pseudo("hover"),
            StyleRule::new().set(Property::BackgroundColor, danger.transparentize(0.87)),
        )
}

fn outlined(env: &StyleEnv<'_>) -> StyleRule {
    let bland = env.palette(ColorRole::Bland).decorative;
    let color = env.color.decorative;
    let standard = env.theme.duration(DurationToken::Standard);
    StyleRule::new()
        .set(
            Property::Transition,
            format!("border {standard}, background-color {standard}"),
        )
        .nest(
            valid(),
            StyleRule::new()
                .set(Property::BackgroundColor, env.surface)
                .set(Property::Border, border(bland)),
        )
        .nest(
            valid().pseudo("focus"),
            StyleRule::new()
                .set(Property::Border, border(color))
                .set(Property::BackgroundColor, color.transparentize(0.93)),
        )
        .nest(
            valid().pseudo("hover"),
            StyleRule::new().set(Property::Border, border(color.transparentize(0.3))),
        )
        .nest(
            valid().pseudo("disabled"),
            StyleRule::new()
                .set(Property::Border, border(bland.transparentize(0.7)))
                .set(Property::BackgroundColor, bland.transparentize(0.9)),
        )
}

fn outlined_has_error(env: &StyleEnv<'_>) -> StyleRule {
    let danger = env.palette(ColorRole::Danger).decorative;
    StyleRule::new()
        .set(Property::BackgroundColor, env.surface)
        .set(Property::Border, border(danger))
        .on(
            "focus",
            StyleRule::new()
                .set(Property::Border, border(danger))
                .set(Property::BackgroundColor, danger.transparentize(0.93)),
        )
        .nest(
            Selector::this().not("[disabled]").pseudo("hover"),
            StyleRule::new().set(Property::Border, border(danger.transparentize(0.3))),
        )
}

const RULES: &[(&str, RuleBuilder)] = &[
    ("root", root),
    ("filled", filled),
    ("filledHasError", filled_has_error),
    ("outlined", outlined),
    ("outlinedHasError", outlined_has_error),
];

pub const TEXT_AREA_STYLES: StyleTemplate = StyleTemplate::new("textArea", RULES);

const POLICY: AttrPolicy = AttrPolicy::new(
    "TextArea",
    &[
        "name",
        "placeholder",
        "rows",
        "cols",
        "readonly",
        "required",
        "maxlength",
        "minlength",
        "autofocus",
        "wrap",
        "form",
    ],
);

/// Multi-line text input
#[derive(Clone, Default)]
pub struct TextArea {
    style: StyleProps,
    state: StateProps,
    variant: TextAreaVariant,
    value: Option<String>,
    input_ref: Option<ElementRef>,
    on_focus: Option<FocusHandler>,
    on_blur: Option<FocusHandler>,
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: TextAreaVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn filled(self) -> Self {
        self.variant(TextAreaVariant::Filled)
    }

    pub fn outlined(self) -> Self {
        self.variant(TextAreaVariant::Outlined)
    }

    pub fn has_error(mut self, has_error: bool) -> Self {
        self.state.has_error = Some(has_error);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.state.disabled = Some(disabled);
        self
    }

    /// Accepted for symmetry with the label; focus is the browser's state
    pub fn focused(mut self, focused: bool) -> Self {
        self.state.focused = Some(focused);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn input_ref(mut self, input_ref: ElementRef) -> Self {
        self.input_ref = Some(input_ref);
        self
    }

    pub fn on_focus<F>(mut self, handler: F) -> Self
    where
        F: Fn(&FocusEvent) + Send + Sync + 'static,
    {
        self.on_focus = Some(Arc::new(handler));
        self
    }

    pub fn on_blur<F>(mut self, handler: F) -> Self
    where
        F: Fn(&FocusEvent) + Send + Sync + 'static,
    {
        self.on_blur = Some(Arc::new(handler));
        self
    }

    pub fn render(&self, cx: &RenderCx) -> Result<Element> {
        let rules = cx.compose(&TEXT_AREA_STYLES, &self.style)?;
        let context = cx.form_control();
        let flags = StateFlags::resolve(&self.state, context);
        let id = resolve_id(self.style.attrs.get("id"), context);

        let classes = ClassSet::new()
            .rule(&rules, self.variant.rule())?
            .rule_if(&rules, flags.has_error, self.variant.error_rule())?;
        let mut element = Root::new(&rules, "textarea", self.style.component.as_deref())
            .classes(classes)
            .render(&self.style.attrs, &POLICY)?;

        if let Some(id) = id {
            element.attrs.set("id", id);
        }
        element.attrs.set_flag("disabled", flags.disabled);
        if flags.has_error {
            element.attrs.set("aria-invalid", "true");
        } else {
            element.attrs.remove("aria-invalid");
        }
        if let Some(value) = &self.value {
            element.children.push(Node::Text(value.clone()));
        }
        bind_ref(self.input_ref.as_ref(), &element);
        Ok(element)
    }

    /// Focus gained: mark the form control focused, then call `on_focus`
    pub fn handle_focus(&self, cx: &RenderCx, event: &FocusEvent) {
        if let Some(context) = cx.form_control() {
            context.set_focused(true);
        }
        if let Some(handler) = &self.on_focus {
            handler(event);
        }
    }

    /// Focus lost: clear the form control's focus, then call `on_blur`
    pub fn handle_blur(&self, cx: &RenderCx, event: &FocusEvent) {
        if let Some(context) = cx.form_control() {
            context.set_focused(false);
        }
        if let Some(handler) = &self.on_blur {
            handler(event);
        }
    }
}

impl Styled for TextArea {
    fn style_props(&mut self) -> &mut StyleProps {
        &mut self.style
    }
}

/// Create an outlined text area
pub fn text_area() -> TextArea {
    TextArea::new()
}
