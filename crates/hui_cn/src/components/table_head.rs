//! Table head: bolds the header cells it contains

use hui_core::{Element, Node};
use hui_style::{
    AttrPolicy, Property, Result, Root, RuleBuilder, Selector, StyleEnv, StyleRule, StyleTemplate,
};

use super::shared::{StyleProps, Styled};
use crate::context::RenderCx;

fn root(_: &StyleEnv<'_>) -> StyleRule {
    StyleRule::new().nest(
        Selector::nested("th"),
        StyleRule::new().set(Property::FontWeight, 600),
    )
}

const RULES: &[(&str, RuleBuilder)] = &[("root", root)];

pub const TABLE_HEAD_STYLES: StyleTemplate = StyleTemplate::new("tableHead", RULES);

const POLICY: AttrPolicy = AttrPolicy::new("TableHead", &["align", "valign"]);

#[derive(Clone, Debug, Default)]
pub struct TableHead {
    style: StyleProps,
    rows: Vec<Node>,
}

impl TableHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `<tr>` of header cells
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row = cells
            .into_iter()
            .fold(Element::new("tr"), |tr, cell| tr.child(Element::new("th").text(cell)));
        self.rows.push(row.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.rows.push(child.into());
        self
    }

    pub fn render(&self, cx: &RenderCx) -> Result<Element> {
        let rules = cx.compose(&TABLE_HEAD_STYLES, &self.style)?;
        let mut element = Root::new(&rules, "thead", self.style.component.as_deref())
            .render(&self.style.attrs, &POLICY)?;
        element.children.extend(self.rows.iter().cloned());
        Ok(element)
    }
}

impl Styled for TableHead {
    fn style_props(&mut self) -> &mut StyleProps {
        &mut self.style
    }
}

pub fn table_head() -> TableHead {
    TableHead::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use hui_style::StyleEngine;
    use hui_theme::Theme;

    #[test]
    fn test_header_cells_are_bold() {
        let cx = RenderCx::with_engine(Arc::new(Theme::light()), Arc::new(StyleEngine::new()));
        let head = table_head().row(["Name", "Size"]).render(&cx).unwrap();
        assert_eq!(head.tag, "thead");
        assert_eq!(head.find_by_tag("tr").map(|tr| tr.children.len()), Some(2));

        let rules = cx.compose(&TABLE_HEAD_STYLES, &StyleProps::default()).unwrap();
        let root = rules.root_class().unwrap();
        assert!(rules
            .css("root")
            .unwrap()
            .contains(&format!(".{root} th {{\n  font-weight: 600;\n}}")));
    }
}
