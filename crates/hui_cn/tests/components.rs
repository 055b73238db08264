//! Rendering of the presentational components and the drawer overlay

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hui_cn::components::{
    StyleProps, ALL_TEMPLATES, ANCHOR_STYLES, DRAWER_STYLES, TYPOGRAPHY_STYLES,
};
use hui_cn::prelude::*;
use hui_core::Color;
use hui_style::{StyleEngine, StyleError};
use hui_theme::{DeviceClass, FontRole, Theme};
use pretty_assertions::assert_eq;

fn cx() -> RenderCx {
    RenderCx::with_engine(Arc::new(Theme::light()), Arc::new(StyleEngine::new()))
}

#[test]
fn test_every_template_composes() {
    let cx = cx();
    for template in ALL_TEMPLATES {
        let rules = cx.compose(template, &StyleProps::default()).unwrap();
        assert!(rules.root_class().is_ok(), "{} has no root", template.name());
    }
}

#[test]
fn test_anchor_output() {
    let cx = cx();
    let link = anchor()
        .attr("href", "/docs")
        .attr("target", "_blank")
        .class("nav")
        .text("Docs")
        .render(&cx)
        .unwrap();
    assert_eq!(link.tag, "a");
    assert!(link.has_class("nav"));
    assert!(link.classes.iter().any(|c| c.starts_with("anchor-root-")));
    assert_eq!(link.attrs.get("target"), Some("_blank"));
    assert!(link.to_html().ends_with(">Docs</a>"));

    let button = anchor().component("button").render(&cx).unwrap();
    assert_eq!(button.tag, "button");
}

#[test]
fn test_anchor_uses_accent_by_default() {
    let cx = cx();
    let default = cx.compose(&ANCHOR_STYLES, &StyleProps::default()).unwrap();
    assert!(default.css("root").unwrap().contains("color: #2962ff;"));
}

#[test]
fn test_reserved_attribute_is_rejected() {
    let err = anchor().attr("variant", "x").render(&cx()).unwrap_err();
    assert_eq!(
        err,
        StyleError::ReservedAttribute {
            name: "variant".into()
        }
    );

    let err = label().attr("href", "/").render(&cx()).unwrap_err();
    assert!(matches!(err, StyleError::DisallowedAttribute { .. }));
}

#[test]
fn test_malformed_tag_and_attribute_are_rejected() {
    let err = anchor().component("a href=x").render(&cx()).unwrap_err();
    assert!(matches!(err, StyleError::InvalidTag { .. }));

    let err = typography(FontRole::Body1)
        .attr("data-x\" onmouseover=\"y", "1")
        .render(&cx())
        .unwrap_err();
    assert!(matches!(err, StyleError::InvalidAttributeName { .. }));

    let option = radio("a").render(&cx()).unwrap().to_html();
    assert!(option.contains("<input "));
    assert!(!option.contains("</input>"));
}

#[test]
fn test_table_head_output() {
    let head = table_head().row(["Name", "Owner"]).render(&cx()).unwrap();
    assert_eq!(head.tag, "thead");
    let html = head.to_html();
    assert!(html.contains("<tr><th>Name</th><th>Owner</th></tr>"));
}

#[test]
fn test_typography_tags_and_roles() {
    let cx = cx();
    assert_eq!(typography(FontRole::H2).render(&cx).unwrap().tag, "h2");
    assert_eq!(typography(FontRole::Body1).render(&cx).unwrap().tag, "p");
    assert_eq!(typography(FontRole::Button).render(&cx).unwrap().tag, "span");

    let rules = cx
        .compose(&TYPOGRAPHY_STYLES, &StyleProps::default())
        .unwrap();
    let mobile = cx.with_viewport(320);
    let title = typography(FontRole::H1)
        .at(DeviceClass::Mobile, FontRole::H5)
        .render(&mobile)
        .unwrap();
    assert_eq!(title.tag, "h1");
    assert!(title.has_class(rules.class("h5").unwrap()));
    assert!(!title.has_class(rules.class("h1").unwrap()));
}

#[test]
fn test_drawer_mounts_one_container_per_open_cycle() {
    let cx = cx();
    let mut host = MemoryHost::new();
    let mut panel = drawer().text("Menu");

    assert_eq!(panel.render(&cx, &mut host).unwrap(), None);
    assert_eq!(host.container_count(), 0);

    for _ in 0..3 {
        panel.set_open(true);
        let first = panel.render(&cx, &mut host).unwrap();
        let again = panel.render(&cx, &mut host).unwrap();
        assert!(first.is_some());
        assert_eq!(first, again);
        assert_eq!(host.container_count(), 1);

        panel.set_open(false);
        assert_eq!(panel.render(&cx, &mut host).unwrap(), None);
        assert_eq!(host.container_count(), 0);
        assert_eq!(panel.container(), None);
    }
}

#[test]
fn test_drawer_container_holds_backdrop_and_panel() {
    let cx = cx();
    let rules = cx.compose(&DRAWER_STYLES, &StyleProps::default()).unwrap();
    let mut host = MemoryHost::new();
    let mut panel = drawer().open(true).text("Menu");

    let id = panel.render(&cx, &mut host).unwrap().unwrap();
    let container = host.get(id).unwrap();
    assert!(container.has_class(rules.class("container").unwrap()));

    let children: Vec<_> = container.child_elements().collect();
    assert_eq!(children.len(), 2);
    assert!(children[0].has_class(rules.class("backdrop").unwrap()));
    assert!(children[1].has_class(rules.root_class().unwrap()));
    assert!(children[1].to_html().contains("Menu"));
}

#[test]
fn test_drawer_remounts_when_host_drops_container() {
    let cx = cx();
    let mut host = MemoryHost::new();
    let mut panel = drawer().open(true);

    let first = panel.render(&cx, &mut host).unwrap().unwrap();
    host.unmount_container(first);
    let second = panel.render(&cx, &mut host).unwrap().unwrap();
    assert_ne!(first, second);
    assert_eq!(host.container_count(), 1);
}

#[test]
fn test_drawer_container_follows_theme_change() {
    let cx = cx();
    let dark = cx.with_theme(Arc::new(Theme::dark()));
    let mut host = MemoryHost::new();
    let mut panel = drawer().open(true);

    let first = panel.render(&cx, &mut host).unwrap().unwrap();
    let second = panel.render(&dark, &mut host).unwrap().unwrap();
    assert_ne!(first, second);
    assert!(!host.contains(first));
    assert_eq!(host.container_count(), 1);

    let light_rules = cx.compose(&DRAWER_STYLES, &StyleProps::default()).unwrap();
    let dark_rules = dark.compose(&DRAWER_STYLES, &StyleProps::default()).unwrap();
    let container = host.get(second).unwrap();
    assert!(container.has_class(dark_rules.class("container").unwrap()));
    assert!(!container.has_class(light_rules.class("container").unwrap()));

    let surface = dark.with_surface(Color::from_hex(0x303030));
    let third = panel.render(&surface, &mut host).unwrap().unwrap();
    assert_ne!(second, third);
    assert_eq!(host.container_count(), 1);
    assert_eq!(panel.render(&surface, &mut host).unwrap(), Some(third));
}

#[test]
fn test_backdrop_dismiss_calls_on_close() {
    let closes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&closes);
    let panel = drawer().open(true).on_close(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    panel.dismiss();
    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert!(panel.is_open());
}

#[test]
fn test_dark_theme_scope_changes_tokens() {
    let cx = cx();
    let dark = cx.with_theme(Arc::new(Theme::dark()));
    let light_link = anchor().render(&cx).unwrap();
    let dark_link = anchor().render(&dark).unwrap();
    assert_ne!(light_link.classes, dark_link.classes);
}
