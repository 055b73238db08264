//! Nested selectors, written relative to the enclosing rule (`&`)

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use smallvec::SmallVec;

/// One step of a nested selector
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum Segment {
    /// `:hover`, `:focus`, `:checked`
    Pseudo(Cow<'static, str>),
    /// `:not([disabled])`
    Not(Cow<'static, str>),
    /// ` .facade`
    Descendant(Cow<'static, str>),
    /// ` ~ .facade`
    Sibling(Cow<'static, str>),
    /// ` > th`
    Child(Cow<'static, str>),
}

/// A selector relative to the rule it is nested in
///
/// ```rust
/// use hui_style::Selector;
///
/// let sel = Selector::nested(".radio").pseudo("focus").sibling(".facade");
/// assert_eq!(sel.to_string(), "& .radio:focus ~ .facade");
/// assert_eq!(sel.resolve(".r-1"), ".r-1 .radio:focus ~ .facade");
/// ```
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct Selector {
    segments: SmallVec<[Segment; 3]>,
}

impl Selector {
    /// `&` itself
    pub fn this() -> Self {
        Self::default()
    }

    /// `&:name`
    pub fn on(name: impl Into<Cow<'static, str>>) -> Self {
        Self::this().pseudo(name)
    }

    /// `& target`
    pub fn nested(target: impl Into<Cow<'static, str>>) -> Self {
        Self::this().descendant(target)
    }

    pub fn pseudo(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.segments.push(Segment::Pseudo(name.into()));
        self
    }

    pub fn not(mut self, inner: impl Into<Cow<'static, str>>) -> Self {
        self.segments.push(Segment::Not(inner.into()));
        self
    }

    pub fn descendant(mut self, target: impl Into<Cow<'static, str>>) -> Self {
        self.segments.push(Segment::Descendant(target.into()));
        self
    }

    pub fn sibling(mut self, target: impl Into<Cow<'static, str>>) -> Self {
        self.segments.push(Segment::Sibling(target.into()));
        self
    }

    pub fn child(mut self, target: impl Into<Cow<'static, str>>) -> Self {
        self.segments.push(Segment::Child(target.into()));
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Substitute `parent` for `&`
    pub fn resolve(&self, parent: &str) -> String {
        let mut out = String::from(parent);
        for segment in &self.segments {
            // Writing into a String cannot fail
            let _ = match segment {
                Segment::Pseudo(name) => write!(out, ":{name}"),
                Segment::Not(inner) => write!(out, ":not({inner})"),
                Segment::Descendant(target) => write!(out, " {target}"),
                Segment::Sibling(target) => write!(out, " ~ {target}"),
                Segment::Child(target) => write!(out, " > {target}"),
            };
        }
        out
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolve("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pseudo_chain() {
        let sel = Selector::on("not([disabled])");
        assert_eq!(sel.to_string(), "&:not([disabled])");

        let sel = Selector::this().not("[disabled]").pseudo("hover");
        assert_eq!(sel.to_string(), "&:not([disabled]):hover");
    }

    #[test]
    fn test_combinators() {
        let sel = Selector::nested(".radio")
            .not("[disabled]")
            .pseudo("hover")
            .sibling(".facade");
        assert_eq!(sel.to_string(), "& .radio:not([disabled]):hover ~ .facade");

        let sel = Selector::on("checked").sibling(".facade").descendant(".icon");
        assert_eq!(sel.resolve(".x"), ".x:checked ~ .facade .icon");

        assert_eq!(Selector::this().child("th").to_string(), "& > th");
    }
}
