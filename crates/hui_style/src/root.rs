//! Binding a rule map to a component's root element
//!
//! [`Root`] is the adapter every component renders through: it picks the
//! tag (the component's default or the caller's `component` override),
//! applies the `root` class plus any state classes, and forwards the
//! caller's pass-through attributes after checking them against the
//! component's [`AttrPolicy`].

use hui_core::{is_valid_attr_name, is_valid_tag, Attrs, Element};
use tracing::warn;

use crate::class_set::ClassSet;
use crate::error::{Result, StyleError};
use crate::rule_map::RuleMap;

/// Prop names that drive composition and must never reach the element
pub const RESERVED_ATTRIBUTES: &[&str] = &[
    "color",
    "surface",
    "variant",
    "size",
    "focused",
    "has-error",
    "hasError",
    "component",
];

/// Attributes every element accepts
pub const GLOBAL_ATTRIBUTES: &[&str] = &[
    "id", "class", "title", "style", "tabindex", "role", "lang", "dir", "hidden",
];

/// Per-component allow-list for pass-through attributes
///
/// `data-*`, `aria-*` and [`GLOBAL_ATTRIBUTES`] are always allowed. Names in
/// [`RESERVED_ATTRIBUTES`] are always rejected.
#[derive(Clone, Copy, Debug)]
pub struct AttrPolicy {
    component: &'static str,
    allowed: &'static [&'static str],
}

impl AttrPolicy {
    pub const fn new(component: &'static str, allowed: &'static [&'static str]) -> Self {
        Self { component, allowed }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn check(&self, name: &str) -> Result<()> {
        if !is_valid_attr_name(name) {
            warn!(component = self.component, attribute = name, "rejected malformed attribute");
            return Err(StyleError::InvalidAttributeName {
                name: name.to_string(),
            });
        }
        if RESERVED_ATTRIBUTES.contains(&name) {
            warn!(component = self.component, attribute = name, "rejected reserved attribute");
            return Err(StyleError::ReservedAttribute {
                name: name.to_string(),
            });
        }
        let allowed = name.starts_with("data-")
            || name.starts_with("aria-")
            || GLOBAL_ATTRIBUTES.contains(&name)
            || self.allowed.contains(&name);
        if !allowed {
            warn!(component = self.component, attribute = name, "rejected attribute");
            return Err(StyleError::DisallowedAttribute {
                component: self.component.to_string(),
                name: name.to_string(),
            });
        }
        Ok(())
    }

    pub fn validate(&self, attrs: &Attrs) -> Result<()> {
        attrs.names().try_for_each(|name| self.check(name))
    }
}

/// Root element builder
pub struct Root<'a> {
    rules: &'a RuleMap,
    tag: String,
    classes: ClassSet,
}

impl<'a> Root<'a> {
    /// Root rendered as `default_tag` unless `component` overrides it
    pub fn new(rules: &'a RuleMap, default_tag: &str, component: Option<&str>) -> Self {
        Self {
            rules,
            tag: component.unwrap_or(default_tag).to_string(),
            classes: ClassSet::new(),
        }
    }

    /// Extra classes applied next to `root`
    pub fn classes(mut self, classes: ClassSet) -> Self {
        self.classes = self.classes.union(classes);
        self
    }

    /// Build the element, forwarding `attrs`
    ///
    /// A caller `class` attribute is merged into the class list instead of
    /// being forwarded verbatim. A `component` override that is not a tag
    /// name fails with [`StyleError::InvalidTag`].
    pub fn render(self, attrs: &Attrs, policy: &AttrPolicy) -> Result<Element> {
        if !is_valid_tag(&self.tag) {
            warn!(component = policy.component(), tag = %self.tag, "rejected tag override");
            return Err(StyleError::InvalidTag { tag: self.tag });
        }
        policy.validate(attrs)?;

        let classes = ClassSet::new()
            .rule(self.rules, "root")?
            .union(self.classes);
        let mut element = Element::new(self.tag).classes(classes);
        for (name, value) in attrs.iter() {
            if name == "class" {
                element = element.classes(value.split_whitespace());
            } else {
                element = element.attr(name, value);
            }
        }
        Ok(element)
    }
}
