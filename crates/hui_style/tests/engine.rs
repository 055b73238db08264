use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hui_core::Color;
use hui_style::{
    compose_uncached, Property, RuleBuilder, Selector, StyleContext, StyleEngine, StyleEnv,
    StyleError, StyleRule, StyleTemplate,
};
use hui_theme::{ColorRole, Theme};
use pretty_assertions::assert_eq;

static BUILDS: AtomicUsize = AtomicUsize::new(0);

fn counted_root(env: &StyleEnv<'_>) -> StyleRule {
    BUILDS.fetch_add(1, Ordering::SeqCst);
    StyleRule::new().set(Property::Color, env.color.readable)
}

fn counted_unused(_: &StyleEnv<'_>) -> StyleRule {
    BUILDS.fetch_add(1, Ordering::SeqCst);
    StyleRule::new().set(Property::Opacity, 0)
}

const COUNTED_RULES: &[(&str, RuleBuilder)] = &[("root", counted_root), ("unused", counted_unused)];
const COUNTED: StyleTemplate = StyleTemplate::new("counted", COUNTED_RULES);

fn chip_root(env: &StyleEnv<'_>) -> StyleRule {
    let bp = &env.theme.breakpoints;
    StyleRule::new()
        .set(Property::Color, env.color.readable)
        .set(Property::BackgroundColor, env.surface)
        .nest(
            Selector::this().not("[disabled]").pseudo("hover"),
            StyleRule::new().set(Property::BackgroundColor, env.mix_with_surface(env.color.decorative, 0.8)),
        )
        .media(
            bp.down(bp.tablet),
            StyleRule::new().set(Property::Padding, env.theme.space(0.25)),
        )
}

fn chip_error(env: &StyleEnv<'_>) -> StyleRule {
    StyleRule::new().set(Property::Color, env.palette(ColorRole::Danger).readable)
}

const CHIP_RULES: &[(&str, RuleBuilder)] = &[("root", chip_root), ("hasError", chip_error)];
const CHIP: StyleTemplate = StyleTemplate::new("chip", CHIP_RULES);

#[test]
fn compose_is_idempotent() {
    let engine = StyleEngine::new();
    let theme = Theme::light();
    let a = engine.compose(&theme, StyleContext::new(), &CHIP).unwrap();
    let b = engine.compose(&theme, StyleContext::new(), &CHIP).unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    let fresh = compose_uncached(&theme, StyleContext::new(), &CHIP).unwrap();
    assert_eq!(*a, fresh);

    let other_engine = StyleEngine::new();
    let c = other_engine.compose(&theme, StyleContext::new(), &CHIP).unwrap();
    assert_eq!(a.class("root").unwrap(), c.class("root").unwrap());
}

#[test]
fn every_rule_is_built_once_per_composition() {
    let engine = StyleEngine::new();
    let theme = Theme::light();
    let before = BUILDS.load(Ordering::SeqCst);
    engine.compose(&theme, StyleContext::new(), &COUNTED).unwrap();
    assert_eq!(BUILDS.load(Ordering::SeqCst) - before, 2);

    engine.compose(&theme, StyleContext::new(), &COUNTED).unwrap();
    assert_eq!(BUILDS.load(Ordering::SeqCst) - before, 2);
    assert_eq!(engine.stats().hits, 1);
    assert_eq!(engine.stats().misses, 1);
}

#[test]
fn inputs_change_tokens() {
    let engine = StyleEngine::new();
    let theme = Theme::light();
    let plain = engine.compose(&theme, StyleContext::new(), &CHIP).unwrap();
    let on_dark = engine
        .compose(&theme, StyleContext::new().surface(Color::from_hex(0x121212)), &CHIP)
        .unwrap();
    let accent = engine
        .compose(&theme, StyleContext::new().color(theme.colors.accent), &CHIP)
        .unwrap();
    let edited_theme = theme.clone().with_color(ColorRole::Danger, Color::from_hex(0xC62828));
    let edited = engine.compose(&edited_theme, StyleContext::new(), &CHIP).unwrap();

    let roots = [
        plain.class("root").unwrap(),
        on_dark.class("root").unwrap(),
        accent.class("root").unwrap(),
        edited.class("root").unwrap(),
    ];
    for (i, a) in roots.iter().enumerate() {
        for b in &roots[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(engine.len(), 4);
}

#[test]
fn unknown_rule_is_an_error() {
    let rules = compose_uncached(&Theme::light(), StyleContext::new(), &CHIP).unwrap();
    assert_eq!(
        rules.class("filled"),
        Err(StyleError::UnknownRule {
            template: "chip".into(),
            rule: "filled".into(),
        })
    );
}

#[test]
fn template_without_root_fails_to_compose() {
    const RULES: &[(&str, RuleBuilder)] = &[("hasError", chip_error)];
    const BROKEN: StyleTemplate = StyleTemplate::new("rootless", RULES);
    let err = StyleEngine::new()
        .compose(&Theme::light(), StyleContext::new(), &BROKEN)
        .unwrap_err();
    assert!(matches!(err, StyleError::MissingRootRule { .. }));
}

#[test]
fn css_uses_realized_class() {
    let rules = compose_uncached(&Theme::light(), StyleContext::new(), &CHIP).unwrap();
    let root = rules.class("root").unwrap().to_string();
    let expected = format!(
        ".{root} {{\n  color: #000000;\n  background-color: #ffffff;\n}}\n\
         .{root}:not([disabled]):hover {{\n  background-color: #cccccc;\n}}\n\
         @media (max-width: 768px) {{\n  .{root} {{\n    padding: 4px;\n  }}\n}}\n"
    );
    assert_eq!(rules.css("root").unwrap(), expected);
}

#[test]
fn cache_is_bounded_and_clearable() {
    let engine = StyleEngine::with_capacity(2);
    let theme = Theme::light();
    for hex in [0x111111, 0x222222, 0x333333] {
        engine
            .compose(&theme, StyleContext::new().color(Color::from_hex(hex)), &CHIP)
            .unwrap();
    }
    assert_eq!(engine.len(), 2);
    assert_eq!(engine.capacity(), 2);

    engine.clear();
    assert!(engine.is_empty());
    assert_eq!(engine.stylesheet(), "");
}

fn red_root(_: &StyleEnv<'_>) -> StyleRule {
    StyleRule::new().set(Property::Color, Color::from_hex(0xFF0000))
}

fn blue_root(_: &StyleEnv<'_>) -> StyleRule {
    StyleRule::new().set(Property::Color, Color::from_hex(0x0000FF))
}

const RED_RULES: &[(&str, RuleBuilder)] = &[("root", red_root)];
const BLUE_RULES: &[(&str, RuleBuilder)] = &[("root", blue_root), ("hasError", chip_error)];

#[test]
fn same_name_templates_do_not_share_cache_entries() {
    let red = StyleTemplate::new("label", RED_RULES);
    let blue = StyleTemplate::new("label", BLUE_RULES);
    let engine = StyleEngine::new();
    let theme = Theme::light();

    let a = engine.compose(&theme, StyleContext::new(), &red).unwrap();
    let b = engine.compose(&theme, StyleContext::new(), &blue).unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(engine.len(), 2);
    assert_ne!(a.root_class().unwrap(), b.root_class().unwrap());
    assert!(b.stylesheet().contains("color: #0000ff;"));
    assert!(!b.stylesheet().contains("#ff0000"));
    assert!(b.class("hasError").is_ok());
}
