//! Deterministic composition keys and class tokens

use std::hash::{Hash, Hasher};

use hui_core::Color;
use hui_theme::Theme;
use rustc_hash::FxHasher;

use crate::template::StyleTemplate;

/// Everything a composition depends on
///
/// Two compositions with equal keys produce identical rule maps, so the key
/// doubles as the cache key and as the seed for class tokens. The theme
/// enters through its structural fingerprint; editing any token yields a
/// new key. Templates enter by name and by the names of their rules, so two
/// templates sharing a name but not a rule list never share a key.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct StyleKey {
    pub template: &'static str,
    pub rules: u64,
    pub theme: u64,
    pub color: [u32; 4],
    pub surface: [u32; 4],
}

impl StyleKey {
    pub fn new(template: &StyleTemplate, theme: &Theme, color: Color, surface: Color) -> Self {
        Self {
            template: template.name(),
            rules: rules_fingerprint(template),
            theme: theme.fingerprint(),
            color: color.to_bits(),
            surface: surface.to_bits(),
        }
    }

    /// Class token for `rule`: `{template}-{rule}-{hash:08x}`
    pub fn class_token(&self, rule: &str) -> String {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        rule.hash(&mut hasher);
        let hash = hasher.finish();
        let folded = (hash ^ (hash >> 32)) as u32;
        format!("{}-{}-{:08x}", self.template, rule, folded)
    }
}

fn rules_fingerprint(template: &StyleTemplate) -> u64 {
    let mut hasher = FxHasher::default();
    for name in template.rule_names() {
        name.hash(&mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::StyleRule;
    use crate::template::{RuleBuilder, StyleEnv};
    use hui_theme::ColorRole;

    fn root(_: &StyleEnv<'_>) -> StyleRule {
        StyleRule::new()
    }

    const RULES: &[(&str, RuleBuilder)] = &[("root", root)];
    const TEMPLATE: StyleTemplate = StyleTemplate::new("demo", RULES);

    #[test]
    fn test_token_shape() {
        let theme = Theme::light();
        let key = StyleKey::new(&TEMPLATE, &theme, Color::BLACK, Color::WHITE);
        let token = key.class_token("root");
        assert!(token.starts_with("demo-root-"));
        assert_eq!(token.len(), "demo-root-".len() + 8);
        assert!(token["demo-root-".len()..]
            .chars()
            .all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_track_inputs() {
        let theme = Theme::light();
        let base = StyleKey::new(&TEMPLATE, &theme, Color::BLACK, Color::WHITE);
        assert_eq!(base.class_token("root"), base.class_token("root"));
        assert_ne!(base.class_token("root"), base.class_token("other"));

        let other_surface = StyleKey::new(&TEMPLATE, &theme, Color::BLACK, Color::from_hex(0x121212));
        assert_ne!(base, other_surface);

        let edited = theme.with_color(ColorRole::Danger, Color::from_hex(0xFF0000));
        let other_theme = StyleKey::new(&TEMPLATE, &edited, Color::BLACK, Color::WHITE);
        assert_ne!(base.theme, other_theme.theme);
    }

    fn has_error(_: &StyleEnv<'_>) -> StyleRule {
        StyleRule::new()
    }

    #[test]
    fn test_rule_list_is_part_of_the_key() {
        const MORE: &[(&str, RuleBuilder)] = &[("root", root), ("hasError", has_error)];
        const SAME_NAME: StyleTemplate = StyleTemplate::new("demo", MORE);

        let theme = Theme::light();
        let a = StyleKey::new(&TEMPLATE, &theme, Color::BLACK, Color::WHITE);
        let b = StyleKey::new(&SAME_NAME, &theme, Color::BLACK, Color::WHITE);
        assert_ne!(a, b);
        assert_ne!(a.class_token("root"), b.class_token("root"));
    }
}
