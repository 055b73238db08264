//! Props and state resolution shared by every component

use hui_core::{Attrs, Color, ElementRef};

use super::form_control::FormControlContext;

/// Styling props every component accepts
#[derive(Clone, Debug, Default)]
pub struct StyleProps {
    /// Base color; the template's default role when unset
    pub color: Option<Color>,
    /// Surface the component sits on; the scope's surface when unset
    pub surface: Option<Color>,
    /// Tag override for the root element
    pub component: Option<String>,
    /// Pass-through attributes
    pub attrs: Attrs,
}

/// Builder methods for components carrying [`StyleProps`]
pub trait Styled: Sized {
    fn style_props(&mut self) -> &mut StyleProps;

    fn color(mut self, color: Color) -> Self {
        self.style_props().color = Some(color);
        self
    }

    fn surface(mut self, surface: Color) -> Self {
        self.style_props().surface = Some(surface);
        self
    }

    /// Render the root as `tag` instead of the component's default
    fn component(mut self, tag: impl Into<String>) -> Self {
        self.style_props().component = Some(tag.into());
        self
    }

    fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.style_props().attrs.set(name, value);
        self
    }

    fn attrs(mut self, attrs: Attrs) -> Self {
        self.style_props().attrs.extend(attrs);
        self
    }

    fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        let attrs = &mut self.style_props().attrs;
        let merged = match attrs.get("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class,
        };
        attrs.set("class", merged);
        self
    }
}

/// Explicit state props; `None` defers to the form-control context
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StateProps {
    pub focused: Option<bool>,
    pub has_error: Option<bool>,
    pub disabled: Option<bool>,
}

/// Effective state of a form leaf
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StateFlags {
    pub focused: bool,
    pub has_error: bool,
    pub disabled: bool,
}

impl StateFlags {
    /// Explicit prop, else the context's value, else `false`
    pub fn resolve(props: &StateProps, context: Option<&FormControlContext>) -> Self {
        Self {
            focused: props
                .focused
                .or_else(|| context.map(FormControlContext::focused))
                .unwrap_or(false),
            has_error: props
                .has_error
                .or_else(|| context.map(FormControlContext::has_error))
                .unwrap_or(false),
            disabled: props
                .disabled
                .or_else(|| context.map(FormControlContext::disabled))
                .unwrap_or(false),
        }
    }
}

/// Explicit id, else the form control's id
pub fn resolve_id(explicit: Option<&str>, context: Option<&FormControlContext>) -> Option<String> {
    explicit
        .or_else(|| context.and_then(FormControlContext::id))
        .map(str::to_string)
}

/// Point `input_ref` at the element, when one was passed
pub(crate) fn bind_ref(input_ref: Option<&ElementRef>, element: &hui_core::Element) {
    if let Some(handle) = input_ref {
        handle.bind(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::form_control::FormControl;

    #[test]
    fn test_no_props_no_context_is_all_false() {
        assert_eq!(
            StateFlags::resolve(&StateProps::default(), None),
            StateFlags::default()
        );
    }

    #[test]
    fn test_prop_wins_over_context() {
        let control = FormControl::new("email").has_error(true).disabled(true);
        let ctx = control.context();
        let props = StateProps {
            has_error: Some(false),
            ..StateProps::default()
        };
        let flags = StateFlags::resolve(&props, Some(&ctx));
        assert!(!flags.has_error);
        assert!(flags.disabled);
        assert!(!flags.focused);
    }

    #[test]
    fn test_id_resolution() {
        let control = FormControl::new("email");
        let ctx = control.context();
        assert_eq!(resolve_id(None, Some(&ctx)).as_deref(), Some("email"));
        assert_eq!(resolve_id(Some("other"), Some(&ctx)).as_deref(), Some("other"));
        assert_eq!(resolve_id(None, None), None);
    }
}
