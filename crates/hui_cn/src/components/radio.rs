//! Radio and RadioGroup components
//!
//! A radio renders as a wrapper holding the real `<input type="radio">`
//! (invisible, stacked on top) followed by a `facade` element that paints
//! the circle and an `icon` that shows once the input is checked. The
//! `radio`, `facade` and `icon` marker classes are what the nested
//! selectors of the template target.
//!
//! Inside a [`RadioGroup`], a radio takes its `name` from the group and is
//! checked when its value equals the group's value.
//!
//! # Example
//!
//! ```rust
//! use hui_cn::prelude::*;
//!
//! let cx = RenderCx::new();
//! let group = radio_group().name("plan").value("pro");
//! let scope = group.scope(&cx);
//!
//! let free = radio("free").render(&scope).unwrap();
//! let pro = radio("pro").render(&scope).unwrap();
//! let input = |el: &Element| el.find_by_tag("input").cloned().unwrap();
//! assert!(!input(&free).attrs.contains("checked"));
//! assert!(input(&pro).attrs.contains("checked"));
//! assert_eq!(input(&pro).attrs.get("name"), Some("plan"));
//! ```

use std::fmt;
use std::sync::Arc;

use hui_core::{
    Attrs, ChangeEvent, ChangeHandler, Element, ElementRef, FocusEvent, FocusHandler, Node,
};
use hui_style::{
    AttrPolicy, ClassSet, Property, Result, Root, RuleBuilder, RuleMap, Selector, StyleEnv,
    StyleRule, StyleTemplate,
};
use hui_theme::{ColorRole, DurationToken};
use tracing::trace;

use super::shared::{bind_ref, resolve_id, StateFlags, StateProps, StyleProps, Styled};
use crate::context::RenderCx;

/// Radio size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RadioSize {
    Small,
    #[default]
    Standard,
    Large,
}

impl RadioSize {
    pub const ALL: [RadioSize; 3] = [RadioSize::Small, RadioSize::Standard, RadioSize::Large];

    /// Edge length in `space` units
    pub fn factor(self) -> f32 {
        match self {
            RadioSize::Small => 1.5,
            RadioSize::Standard => 2.0,
            RadioSize::Large => 2.5,
        }
    }

    pub fn radio_rule(self) -> &'static str {
        match self {
            RadioSize::Small => "radioSmall",
            RadioSize::Standard => "radioStandard",
            RadioSize::Large => "radioLarge",
        }
    }

    pub fn facade_rule(self) -> &'static str {
        match self {
            RadioSize::Small => "facadeSmall",
            RadioSize::Standard => "facadeStandard",
            RadioSize::Large => "facadeLarge",
        }
    }
}

fn border(color: impl fmt::Display) -> String {
    format!("2px solid {color}")
}

fn root(env: &StyleEnv<'_>) -> StyleRule {
    StyleRule::new()
        .set(Property::Position, "relative")
        .set(Property::Margin, format!("{} 0", env.theme.space(0.5)))
}

// Nested under the wrapper, so these selectors outrank the `radio` rule's
// own states regardless of stylesheet order.
fn has_error(env: &StyleEnv<'_>) -> StyleRule {
    let danger = env.palette(ColorRole::Danger).decorative;
    StyleRule::new()
        .set(Property::Color, danger)
        .nest(
            Selector::nested(".facade"),
            StyleRule::new().set(Property::Border, border(danger)),
        )
        .nest(
            Selector::nested(".radio").pseudo("focus").sibling(".facade"),
            StyleRule::new()
                .set(Property::Border, border(danger))
                .set(Property::BackgroundColor, env.mix_with_surface(danger, 0.93)),
        )
        .nest(
            Selector::nested(".radio")
                .not("[disabled]")
                .pseudo("hover")
                .sibling(".facade"),
            StyleRule::new()
                .set(Property::Border, border(danger.transparentize(0.3)))
                .set(Property::BackgroundColor, env.mix_with_surface(danger, 0.93)),
        )
        .nest(
            Selector::nested(".radio").pseudo("active").sibling(".facade"),
            StyleRule::new().set(Property::BackgroundColor, env.mix_with_surface(danger, 0.9)),
        )
}

fn radio_input(env: &StyleEnv<'_>) -> StyleRule {
    let color = env.color.decorative;
    let bland = env.palette(ColorRole::Bland).decorative;
    StyleRule::new()
        .set(Property::Cursor, "pointer")
        .set(Property::Opacity, 0)
        .set(Property::Position, "absolute")
        .set(Property::Top, 0)
        .set(Property::Left, 0)
        .nest(
            Selector::on("focus").sibling(".facade"),
            StyleRule::new()
                .set(Property::Border, border(color))
                .set(Property::BackgroundColor, env.mix_with_surface(color, 0.93)),
        )
        .nest(
            Selector::on("hover").sibling(".facade"),
            StyleRule::new()
                .set(Property::Border, border(color.transparentize(0.3)))
                .set(Property::BackgroundColor, env.mix_with_surface(color, 0.93)),
        )
        .nest(
            Selector::on("active").sibling(".facade"),
            StyleRule::new().set(Property::BackgroundColor, env.mix_with_surface(color, 0.9)),
        )
        .nest(
            Selector::on("disabled").sibling(".facade"),
            StyleRule::new()
                .set(Property::Cursor, "not-allowed")
                .set(Property::Border, border(bland.transparentize(0.7)))
                .set(Property::BackgroundColor, env.mix_with_surface(bland, 0.9)),
        )
        .on("disabled", StyleRule::new().set(Property::Cursor, "not-allowed"))
        .nest(
            Selector::on("checked").sibling(".facade").descendant(".icon"),
            StyleRule::new().set(Property::Opacity, 1),
        )
}

fn sized(env: &StyleEnv<'_>, size: RadioSize) -> StyleRule {
    let edge = env.theme.space(size.factor());
    StyleRule::new()
        .set(Property::Width, edge)
        .set(Property::Height, edge)
}

fn radio_small(env: &StyleEnv<'_>) -> StyleRule {
    sized(env, RadioSize::Small)
}

fn radio_standard(env: &StyleEnv<'_>) -> StyleRule {
    sized(env, RadioSize::Standard)
}

fn radio_large(env: &StyleEnv<'_>) -> StyleRule {
    sized(env, RadioSize::Large)
}

fn facade(env: &StyleEnv<'_>) -> StyleRule {
    let bland = env.palette(ColorRole::Bland).decorative;
    let standard = env.theme.duration(DurationToken::Standard);
    StyleRule::new()
        .set(Property::BorderRadius, "99999px")
        .set(Property::Display, "flex")
        .set(Property::JustifyContent, "center")
        .set(Property::AlignItems, "center")
        .set(Property::Flex, "0 0 auto")
        .set(
            Property::Transition,
            format!("border {standard}, background-color {standard}"),
        )
        .set(Property::Border, border(bland))
        .set(Property::BackgroundColor, env.surface)
}

fn icon(_: &StyleEnv<'_>) -> StyleRule {
    StyleRule::new()
        .set(Property::Width, "1rem")
        .set(Property::Height, "1rem")
        .set(Property::Fill, "currentColor")
        .set(Property::Opacity, 0)
        .set(Property::PointerEvents, "none")
}

const RULES: &[(&str, RuleBuilder)] = &[
    ("root", root),
    ("hasError", has_error),
    ("radio", radio_input),
    ("radioSmall", radio_small),
    ("radioStandard", radio_standard),
    ("radioLarge", radio_large),
    ("facade", facade),
    ("facadeSmall", radio_small),
    ("facadeStandard", radio_standard),
    ("facadeLarge", radio_large),
    ("icon", icon),
];

pub const RADIO_STYLES: StyleTemplate = StyleTemplate::new("radio", RULES);

fn group_root(_: &StyleEnv<'_>) -> StyleRule {
    StyleRule::new()
        .set(Property::Display, "flex")
        .set(Property::FlexDirection, "column")
}

const GROUP_RULES: &[(&str, RuleBuilder)] = &[("root", group_root)];

pub const RADIO_GROUP_STYLES: StyleTemplate = StyleTemplate::new("radioGroup", GROUP_RULES);

/// Pass-through attributes land on the `<input>`, not the wrapper
const INPUT_POLICY: AttrPolicy = AttrPolicy::new("Radio", &["required", "autofocus", "form"]);

const GROUP_POLICY: AttrPolicy = AttrPolicy::new("RadioGroup", &[]);

/// Default icon: a filled circle
fn circle_icon() -> Element {
    Element::new("svg")
        .attr("viewBox", "0 0 24 24")
        .child(
            Element::new("circle")
                .attr("cx", "12")
                .attr("cy", "12")
                .attr("r", "8"),
        )
}

/// State a [`RadioGroup`] shares with its radios
#[derive(Clone)]
pub struct RadioGroupContext {
    name: Option<String>,
    value: Option<String>,
    on_change: Option<ChangeHandler>,
}

impl RadioGroupContext {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.value.as_deref() == Some(value)
    }

    /// Forward a radio's change to the group callback
    pub fn handle_change(&self, event: &ChangeEvent) {
        trace!(value = %event.value, "radio group change");
        if let Some(handler) = &self.on_change {
            handler(event);
        }
    }
}

impl fmt::Debug for RadioGroupContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadioGroupContext")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// A single radio button
#[derive(Clone, Default)]
pub struct Radio {
    style: StyleProps,
    state: StateProps,
    size: RadioSize,
    value: String,
    checked: Option<bool>,
    name: Option<String>,
    id: Option<String>,
    icon: Option<Element>,
    input_ref: Option<ElementRef>,
    on_focus: Option<FocusHandler>,
    on_blur: Option<FocusHandler>,
    on_change: Option<ChangeHandler>,
}

impl Radio {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn size(mut self, size: RadioSize) -> Self {
        self.size = size;
        self
    }

    pub fn small(self) -> Self {
        self.size(RadioSize::Small)
    }

    pub fn large(self) -> Self {
        self.size(RadioSize::Large)
    }

    /// Force the checked state instead of deriving it from the group
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
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

    /// Replace the circle icon
    pub fn icon(mut self, icon: Element) -> Self {
        self.icon = Some(icon);
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

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    pub fn value_str(&self) -> &str {
        &self.value
    }

    /// Explicit `checked`, else the group's selection, else unchecked
    pub fn is_checked(&self, cx: &RenderCx) -> bool {
        self.checked
            .or_else(|| cx.radio_group().map(|group| group.is_selected(&self.value)))
            .unwrap_or(false)
    }

    pub fn render(&self, cx: &RenderCx) -> Result<Element> {
        let rules = cx.compose(&RADIO_STYLES, &self.style)?;
        let context = cx.form_control();
        let flags = StateFlags::resolve(&self.state, context);
        let id = resolve_id(self.id.as_deref(), context);
        let name = self
            .name
            .clone()
            .or_else(|| cx.radio_group().and_then(|g| g.name().map(str::to_string)));

        let input = self.render_input(&rules, &flags, id, name, self.is_checked(cx))?;
        bind_ref(self.input_ref.as_ref(), &input);

        let facade = Element::new("div")
            .class("facade")
            .classes(
                ClassSet::new()
                    .rule(&rules, "facade")?
                    .union(self.size_classes(&rules, RadioSize::facade_rule)?),
            )
            .attr("aria-hidden", "true")
            .child(self.render_icon(&rules)?);

        let wrapper = Root::new(&rules, "div", self.style.component.as_deref())
            .classes(ClassSet::new().rule_if(&rules, flags.has_error, "hasError")?)
            .render(&Attrs::new(), &INPUT_POLICY)?;
        Ok(wrapper.child(input).child(facade))
    }

    fn size_classes(&self, rules: &RuleMap, rule: fn(RadioSize) -> &'static str) -> Result<ClassSet> {
        RadioSize::ALL
            .into_iter()
            .try_fold(ClassSet::new(), |set, size| {
                set.rule_if(rules, size == self.size, rule(size))
            })
    }

    fn render_input(
        &self,
        rules: &RuleMap,
        flags: &StateFlags,
        id: Option<String>,
        name: Option<String>,
        checked: bool,
    ) -> Result<Element> {
        INPUT_POLICY.validate(&self.style.attrs)?;

        let mut input = Element::new("input")
            .class("radio")
            .classes(
                ClassSet::new()
                    .rule(rules, "radio")?
                    .union(self.size_classes(rules, RadioSize::radio_rule)?),
            )
            .attr("type", "radio")
            .attr("value", self.value.as_str());
        if let Some(id) = id {
            input.attrs.set("id", id);
        }
        if let Some(name) = name {
            input.attrs.set("name", name);
        }
        input.attrs.set_flag("checked", checked);
        input.attrs.set_flag("disabled", flags.disabled);
        for (attr, value) in self.style.attrs.iter() {
            if attr == "class" {
                input = input.classes(value.split_whitespace());
            } else {
                input.attrs.set(attr, value);
            }
        }
        Ok(input)
    }

    fn render_icon(&self, rules: &RuleMap) -> Result<Node> {
        let icon = self.icon.clone().unwrap_or_else(circle_icon);
        Ok(icon.class("icon").class(rules.class("icon")?).into())
    }

    pub fn handle_focus(&self, cx: &RenderCx, event: &FocusEvent) {
        if let Some(context) = cx.form_control() {
            context.set_focused(true);
        }
        if let Some(handler) = &self.on_focus {
            handler(event);
        }
    }

    pub fn handle_blur(&self, cx: &RenderCx, event: &FocusEvent) {
        if let Some(context) = cx.form_control() {
            context.set_focused(false);
        }
        if let Some(handler) = &self.on_blur {
            handler(event);
        }
    }

    /// Selection changed: notify the group, then call `on_change`
    pub fn handle_change(&self, cx: &RenderCx, event: &ChangeEvent) {
        if let Some(group) = cx.radio_group() {
            group.handle_change(event);
        }
        if let Some(handler) = &self.on_change {
            handler(event);
        }
    }
}

impl Styled for Radio {
    fn style_props(&mut self) -> &mut StyleProps {
        &mut self.style
    }
}

/// Groups radios under one name and one selected value
#[derive(Clone, Default)]
pub struct RadioGroup {
    style: StyleProps,
    name: Option<String>,
    value: Option<String>,
    on_change: Option<ChangeHandler>,
}

impl RadioGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Value of the selected radio
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    pub fn context(&self) -> RadioGroupContext {
        RadioGroupContext {
            name: self.name.clone(),
            value: self.value.clone(),
            on_change: self.on_change.clone(),
        }
    }

    /// Child scope in which radios see this group
    pub fn scope(&self, cx: &RenderCx) -> RenderCx {
        cx.with_radio_group(self.context())
    }

    pub fn render<F>(&self, cx: &RenderCx, children: F) -> Result<Element>
    where
        F: FnOnce(&RenderCx) -> Result<Vec<Element>>,
    {
        let rules = cx.compose(&RADIO_GROUP_STYLES, &self.style)?;
        let mut element = Root::new(&rules, "div", self.style.component.as_deref())
            .render(&self.style.attrs, &GROUP_POLICY)?
            .attr("role", "radiogroup");
        for child in children(&self.scope(cx))? {
            element = element.child(child);
        }
        Ok(element)
    }
}

impl Styled for RadioGroup {
    fn style_props(&mut self) -> &mut StyleProps {
        &mut self.style
    }
}

/// Create a radio with a value
pub fn radio(value: impl Into<String>) -> Radio {
    Radio::new(value)
}

/// Create an empty radio group
pub fn radio_group() -> RadioGroup {
    RadioGroup::new()
}
