//! Form control: shares id, focus, error and disabled state with the
//! labels and inputs inside it
//!
//! # Example
//!
//! ```rust
//! use hui_cn::prelude::*;
//!
//! let cx = RenderCx::new();
//! let control = form_control("bio").has_error(true);
//! let scope = control.scope(&cx);
//!
//! let label = label().text("Bio").render(&scope).unwrap();
//! let field = text_area().render(&scope).unwrap();
//! assert_eq!(label.attrs.get("for"), Some("bio"));
//! assert_eq!(field.attrs.get("id"), Some("bio"));
//!
//! // Focus flows back up through the shared context
//! control.context().set_focused(true);
//! assert!(control.is_focused());
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hui_core::Element;
use hui_style::{AttrPolicy, Property, Result, Root, RuleBuilder, StyleEnv, StyleRule, StyleTemplate};
use tracing::trace;

use super::shared::{StyleProps, Styled};
use crate::context::RenderCx;

fn root(_: &StyleEnv<'_>) -> StyleRule {
    StyleRule::new()
        .set(Property::Display, "flex")
        .set(Property::FlexDirection, "column")
}

const RULES: &[(&str, RuleBuilder)] = &[("root", root)];

/// Styles of the form-control wrapper
pub const FORM_CONTROL_STYLES: StyleTemplate = StyleTemplate::new("formControl", RULES);

const POLICY: AttrPolicy = AttrPolicy::new("FormControl", &[]);

struct SharedState {
    id: Option<String>,
    focused: AtomicBool,
    has_error: AtomicBool,
    disabled: AtomicBool,
}

/// Read handle to a form control's state, given to descendants
///
/// Consumers can read everything but only write `focused`.
#[derive(Clone)]
pub struct FormControlContext {
    state: Arc<SharedState>,
}

impl FormControlContext {
    pub fn id(&self) -> Option<&str> {
        self.state.id.as_deref()
    }

    pub fn focused(&self) -> bool {
        self.state.focused.load(Ordering::Acquire)
    }

    pub fn has_error(&self) -> bool {
        self.state.has_error.load(Ordering::Acquire)
    }

    pub fn disabled(&self) -> bool {
        self.state.disabled.load(Ordering::Acquire)
    }

    /// Last writer wins
    pub fn set_focused(&self, focused: bool) {
        trace!(id = ?self.id(), focused, "form control focus");
        self.state.focused.store(focused, Ordering::Release);
    }

    /// Whether both handles belong to the same form control
    pub fn same_control(&self, other: &FormControlContext) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for FormControlContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormControlContext")
            .field("id", &self.id())
            .field("focused", &self.focused())
            .field("has_error", &self.has_error())
            .field("disabled", &self.disabled())
            .finish()
    }
}

/// Owner of a form control's state
pub struct FormControl {
    context: FormControlContext,
    style: StyleProps,
}

impl FormControl {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_id(Some(id.into()))
    }

    /// A form control without an id
    pub fn anonymous() -> Self {
        Self::with_id(None)
    }

    fn with_id(id: Option<String>) -> Self {
        Self {
            context: FormControlContext {
                state: Arc::new(SharedState {
                    id,
                    focused: AtomicBool::new(false),
                    has_error: AtomicBool::new(false),
                    disabled: AtomicBool::new(false),
                }),
            },
            style: StyleProps::default(),
        }
    }

    pub fn has_error(self, has_error: bool) -> Self {
        self.set_has_error(has_error);
        self
    }

    pub fn disabled(self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    pub fn set_has_error(&self, has_error: bool) {
        self.context
            .state
            .has_error
            .store(has_error, Ordering::Release);
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.context
            .state
            .disabled
            .store(disabled, Ordering::Release);
    }

    pub fn id(&self) -> Option<&str> {
        self.context.id()
    }

    pub fn is_focused(&self) -> bool {
        self.context.focused()
    }

    /// Handle for descendants
    pub fn context(&self) -> FormControlContext {
        self.context.clone()
    }

    /// Child scope in which leaves see this form control
    pub fn scope(&self, cx: &RenderCx) -> RenderCx {
        cx.with_form_control(self.context())
    }

    /// Render the wrapper, building children inside this control's scope
    pub fn render<F>(&self, cx: &RenderCx, children: F) -> Result<Element>
    where
        F: FnOnce(&RenderCx) -> Result<Vec<Element>>,
    {
        let rules = cx.compose(&FORM_CONTROL_STYLES, &self.style)?;
        let scope = self.scope(cx);
        let mut element = Root::new(&rules, "div", self.style.component.as_deref())
            .render(&self.style.attrs, &POLICY)?;
        for child in children(&scope)? {
            element = element.child(child);
        }
        Ok(element)
    }
}

impl Styled for FormControl {
    fn style_props(&mut self) -> &mut StyleProps {
        &mut self.style
    }
}

/// Create a form control with an id
pub fn form_control(id: impl Into<String>) -> FormControl {
    FormControl::new(id)
}
