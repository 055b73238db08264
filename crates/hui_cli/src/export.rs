//! Stylesheet export

use std::sync::Arc;

use anyhow::{Context, Result};
use hui_cn::components::{StyleProps, ALL_TEMPLATES};
use hui_cn::RenderCx;
use hui_core::Color;
use hui_style::StyleEngine;
use hui_theme::Theme;
use tracing::debug;

/// Compose every built-in template on a private engine and return its CSS
pub fn stylesheet(theme: Theme, color: Option<Color>, surface: Option<Color>) -> Result<String> {
    let engine = Arc::new(StyleEngine::new());
    let cx = RenderCx::with_engine(Arc::new(theme), Arc::clone(&engine));
    let cx = match surface {
        Some(surface) => cx.with_surface(surface),
        None => cx,
    };
    let props = StyleProps {
        color,
        ..StyleProps::default()
    };

    for template in ALL_TEMPLATES {
        cx.compose(template, &props)
            .with_context(|| format!("Failed to compose {}", template.name()))?;
    }
    debug!(entries = engine.len(), "composed built-in templates");
    Ok(engine.stylesheet())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_covers_every_template() {
        let css = stylesheet(Theme::light(), None, None).unwrap();
        let cx = RenderCx::with_engine(Arc::new(Theme::light()), Arc::new(StyleEngine::new()));
        for template in ALL_TEMPLATES {
            let rules = cx.compose(template, &StyleProps::default()).unwrap();
            assert!(rules.root_class().is_ok(), "no root in {}", template.name());
            let mut emitted = 0;
            for name in rules.names() {
                let block = rules.css(name).unwrap();
                if !block.is_empty() {
                    assert!(css.contains(block), "missing {}.{name}", template.name());
                    emitted += 1;
                }
            }
            assert!(emitted > 0, "nothing exported for {}", template.name());
        }
    }

    #[test]
    fn test_empty_root_rule_is_not_exported() {
        let css = stylesheet(Theme::light(), None, None).unwrap();
        assert!(!css.contains(".typography-root-"));
        assert!(css.contains(".typography-h1-"));
    }

    #[test]
    fn test_surface_override_changes_output() {
        let light = stylesheet(Theme::light(), None, None).unwrap();
        let dark = stylesheet(Theme::light(), None, Some(Color::BLACK)).unwrap();
        assert_ne!(light, dark);
    }
}
