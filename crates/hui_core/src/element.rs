//! Element tree produced by components
//!
//! Components don't touch a DOM. They return an [`Element`] describing the
//! tag, the resolved class tokens, the attributes and the children; binding
//! that description to real nodes is the host's job.

use std::fmt::Write as _;
use std::sync::{Arc, Mutex, PoisonError};

use indexmap::IndexMap;
use smallvec::SmallVec;

/// Ordered attribute map
///
/// Boolean attributes (`disabled`, `checked`) are stored with an empty value
/// and rendered without one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attrs {
    entries: IndexMap<String, String>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Insert an empty-valued attribute when `on`, remove it otherwise
    pub fn set_flag(&mut self, name: impl Into<String>, on: bool) {
        let name = name.into();
        if on {
            self.entries.insert(name, String::new());
        } else {
            self.entries.shift_remove(&name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy every entry of `other` over `self`
    pub fn extend(&mut self, other: Attrs) {
        self.entries.extend(other.entries);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A child of an [`Element`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A rendered element description
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub classes: SmallVec<[String; 4]>,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: SmallVec::new(),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    /// Append a class token (duplicates are ignored)
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.push_class(class);
        self
    }

    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for class in classes {
            self.push_class(class);
        }
        self
    }

    pub fn push_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !class.is_empty() && !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Set or clear a boolean attribute
    pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
        self.attrs.set_flag(name, on);
        self
    }

    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs.extend(attrs);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Depth-first search (self included) for the first element carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.child_elements()
            .find_map(|child| child.find_by_class(class))
    }

    /// Depth-first search (self included) for the first element with `tag`
    pub fn find_by_tag(&self, tag: &str) -> Option<&Element> {
        if self.tag == tag {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find_by_tag(tag))
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Serialize to HTML (attribute values and text are escaped)
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in self.attrs.iter() {
            if value.is_empty() {
                let _ = write!(out, " {name}");
            } else {
                let _ = write!(out, " {name}=\"{}\"", escape(value));
            }
        }
        out.push('>');
        if is_void(&self.tag) {
            return;
        }
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_html(out),
                Node::Text(text) => out.push_str(&escape(text)),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Elements that never have content or a closing tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|void| tag.eq_ignore_ascii_case(void))
}

/// An ASCII letter followed by ASCII letters, digits or `-`
pub fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Non-empty, without whitespace, controls, quotes, `<`, `>`, `/` or `=`
pub fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// What an [`ElementRef`] points at after a render
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefTarget {
    pub tag: String,
    pub id: Option<String>,
}

/// Shared slot that receives the focusable element of a component
///
/// Clones share the same slot, so the caller keeps one handle and passes a
/// clone into the component's props.
#[derive(Clone, Debug, Default)]
pub struct ElementRef {
    slot: Arc<Mutex<Option<RefTarget>>>,
}

impl ElementRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the ref at `element`
    pub fn bind(&self, element: &Element) {
        let target = RefTarget {
            tag: element.tag.clone(),
            id: element.attrs.get("id").map(str::to_string),
        };
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(target);
    }

    pub fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn get(&self) -> Option<RefTarget> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_bound(&self) -> bool {
        self.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_are_deduplicated() {
        let el = Element::new("div").class("a").class("b").class("a");
        assert_eq!(el.classes.to_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_flags_render_without_value() {
        let el = Element::new("input")
            .attr("type", "radio")
            .flag("disabled", true)
            .flag("checked", false);
        assert_eq!(el.to_html(), "<input type=\"radio\" disabled>");
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let el = Element::new("label")
            .child(Element::new("input").attr("type", "radio"))
            .child(Element::new("br"))
            .text("Pro");
        assert_eq!(el.to_html(), "<label><input type=\"radio\"><br>Pro</label>");
        assert_eq!(Element::new("textarea").to_html(), "<textarea></textarea>");
    }

    #[test]
    fn test_name_validation() {
        assert!(is_valid_tag("h1"));
        assert!(is_valid_tag("my-widget"));
        assert!(!is_valid_tag(""));
        assert!(!is_valid_tag("1h"));
        assert!(!is_valid_tag("div onclick=x"));
        assert!(!is_valid_tag("a><script"));

        assert!(is_valid_attr_name("data-id"));
        assert!(is_valid_attr_name("aria-label"));
        assert!(!is_valid_attr_name(""));
        assert!(!is_valid_attr_name("data-x onload"));
        assert!(!is_valid_attr_name("data-x=\"1\""));
        assert!(!is_valid_attr_name("data-x>"));
    }

    #[test]
    fn test_find_by_class_walks_children() {
        let tree = Element::new("div").class("root").child(
            Element::new("div")
                .class("facade")
                .child(Element::new("svg").class("icon")),
        );
        assert_eq!(tree.find_by_class("icon").map(|e| e.tag.as_str()), Some("svg"));
        assert!(tree.find_by_class("missing").is_none());
    }

    #[test]
    fn test_text_is_escaped() {
        let el = Element::new("p").text("a < b & c");
        assert_eq!(el.to_html(), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_element_ref_shares_slot() {
        let handle = ElementRef::new();
        let passed = handle.clone();
        passed.bind(&Element::new("textarea").attr("id", "bio"));
        assert_eq!(
            handle.get(),
            Some(RefTarget {
                tag: "textarea".into(),
                id: Some("bio".into()),
            })
        );
    }
}
