//! State propagation from form controls and radio groups to their leaves

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use hui_cn::components::{StyleProps, LABEL_STYLES, RADIO_STYLES, TEXT_AREA_STYLES};
use hui_cn::prelude::*;
use hui_core::{ChangeEvent, FocusEvent};
use hui_style::{StyleEngine, StyleTemplate};
use hui_theme::Theme;

fn cx() -> RenderCx {
    RenderCx::with_engine(Arc::new(Theme::light()), Arc::new(StyleEngine::new()))
}

fn class(cx: &RenderCx, template: &StyleTemplate, rule: &str) -> String {
    cx.compose(template, &StyleProps::default())
        .unwrap()
        .class(rule)
        .unwrap()
        .to_string()
}

#[test]
fn test_leaf_without_provider_is_all_false() {
    let cx = cx();
    let area = text_area().render(&cx).unwrap();
    assert!(!area.attrs.contains("disabled"));
    assert!(!area.attrs.contains("aria-invalid"));
    assert!(!area.attrs.contains("id"));
    assert!(!area.has_class(&class(&cx, &TEXT_AREA_STYLES, "outlinedHasError")));

    let text = label().text("Name").render(&cx).unwrap();
    assert!(text.has_class(&class(&cx, &LABEL_STYLES, "normal")));
    assert!(!text.attrs.contains("for"));
}

#[test]
fn test_provider_error_reaches_text_area_and_label() {
    let cx = cx();
    let control = form_control("bio").has_error(true);
    let scope = control.scope(&cx);

    let area = text_area().filled().render(&scope).unwrap();
    assert!(area.has_class(&class(&cx, &TEXT_AREA_STYLES, "filled")));
    assert!(area.has_class(&class(&cx, &TEXT_AREA_STYLES, "filledHasError")));
    assert_eq!(area.attrs.get("aria-invalid"), Some("true"));
    assert_eq!(area.attrs.get("id"), Some("bio"));

    let text = label().render(&scope).unwrap();
    assert!(text.has_class(&class(&cx, &LABEL_STYLES, "hasError")));
    assert!(!text.has_class(&class(&cx, &LABEL_STYLES, "normal")));
    assert_eq!(text.attrs.get("for"), Some("bio"));

    let option = radio("a").render(&scope).unwrap();
    assert!(option.has_class(&class(&cx, &RADIO_STYLES, "hasError")));
}

#[test]
fn test_explicit_prop_overrides_provider() {
    let cx = cx();
    let scope = form_control("bio").has_error(true).disabled(true).scope(&cx);
    let area = text_area().has_error(false).render(&scope).unwrap();
    assert!(!area.attrs.contains("aria-invalid"));
    assert!(area.attrs.contains("disabled"));
}

#[test]
fn test_owner_updates_reach_next_render() {
    let cx = cx();
    let control = form_control("bio");
    let scope = control.scope(&cx);
    assert!(!text_area().render(&scope).unwrap().attrs.contains("aria-invalid"));

    control.set_has_error(true);
    assert!(text_area().render(&scope).unwrap().attrs.contains("aria-invalid"));
}

#[test]
fn test_focus_updates_context_and_label_tone() {
    let cx = cx();
    let control = form_control("bio");
    let scope = control.scope(&cx);
    let area = text_area();

    area.handle_focus(&scope, &FocusEvent::focus(Some("bio".into())));
    assert!(control.is_focused());
    let text = label().render(&scope).unwrap();
    assert!(text.has_class(&class(&cx, &LABEL_STYLES, "focused")));

    area.handle_blur(&scope, &FocusEvent::blur(Some("bio".into())));
    assert!(!control.is_focused());
}

#[test]
fn test_panicking_focus_callback_still_sets_focus() {
    let cx = cx();
    let control = form_control("bio");
    let scope = control.scope(&cx);
    let area = text_area().on_focus(|_| panic!("callback failed"));

    let result = catch_unwind(AssertUnwindSafe(|| {
        area.handle_focus(&scope, &FocusEvent::focus(None));
    }));
    assert!(result.is_err());
    assert!(control.is_focused());
}

#[test]
fn test_input_ref_is_bound() {
    let cx = cx();
    let scope = form_control("bio").scope(&cx);

    let handle = ElementRef::new();
    text_area().input_ref(handle.clone()).render(&scope).unwrap();
    let target = handle.get().unwrap();
    assert_eq!(target.tag, "textarea");
    assert_eq!(target.id.as_deref(), Some("bio"));

    let handle = ElementRef::new();
    radio("a").input_ref(handle.clone()).render(&cx).unwrap();
    assert_eq!(handle.get().map(|t| t.tag), Some("input".to_string()));
}

#[test]
fn test_radio_group_selection() {
    let cx = cx();
    let group = radio_group().name("plan").value("pro");
    let rendered = group
        .render(&cx, |scope| {
            Ok(vec![
                radio("free").render(scope)?,
                radio("pro").render(scope)?,
            ])
        })
        .unwrap();
    assert_eq!(rendered.attrs.get("role"), Some("radiogroup"));

    let inputs: Vec<_> = rendered
        .child_elements()
        .map(|option| option.find_by_tag("input").unwrap())
        .collect();
    assert_eq!(inputs.len(), 2);
    assert!(!inputs[0].attrs.contains("checked"));
    assert!(inputs[1].attrs.contains("checked"));
    assert!(inputs.iter().all(|i| i.attrs.get("name") == Some("plan")));
}

#[test]
fn test_radio_change_notifies_group_then_callback() {
    let cx = cx();
    let order = Arc::new(Mutex::new(Vec::new()));

    let group_log = Arc::clone(&order);
    let group = radio_group().value("a").on_change(move |e: &ChangeEvent| {
        group_log.lock().unwrap().push(format!("group:{}", e.value));
    });
    let scope = group.scope(&cx);

    let own_log = Arc::clone(&order);
    let option = radio("b").on_change(move |e: &ChangeEvent| {
        own_log.lock().unwrap().push(format!("radio:{}", e.value));
    });
    option.handle_change(&scope, &ChangeEvent::new("b").checked(true));

    assert_eq!(*order.lock().unwrap(), vec!["group:b", "radio:b"]);
}

#[test]
fn test_radio_size_classes_are_exclusive() {
    let cx = cx();
    let option = radio("a").large().render(&cx).unwrap();
    let input = option.find_by_tag("input").unwrap();
    assert!(input.has_class(&class(&cx, &RADIO_STYLES, "radioLarge")));
    assert!(!input.has_class(&class(&cx, &RADIO_STYLES, "radioStandard")));
    let facade = option.find_by_class("facade").unwrap();
    assert!(facade.has_class(&class(&cx, &RADIO_STYLES, "facadeLarge")));
}

#[test]
fn test_focus_callback_runs_once() {
    let cx = cx();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let option = radio("a").on_focus(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    option.handle_focus(&cx, &FocusEvent::focus(None));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
