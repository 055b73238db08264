//! Render scope passed down the component tree
//!
//! A [`RenderCx`] carries what ancestors provide to descendants: the theme,
//! the style engine, an optional surface override, the viewport width and
//! the nearest form-control and radio-group contexts. Scopes are cheap to
//! clone; `with_*` returns a child scope and leaves the parent untouched.

use std::sync::Arc;

use hui_core::Color;
use hui_style::{Result, RuleMap, StyleContext, StyleEngine, StyleTemplate};
use hui_theme::{default_theme, DeviceClass, Theme};

use crate::components::form_control::FormControlContext;
use crate::components::radio::RadioGroupContext;
use crate::components::shared::StyleProps;

#[derive(Clone, Debug)]
pub struct RenderCx {
    theme: Arc<Theme>,
    engine: Arc<StyleEngine>,
    surface: Option<Color>,
    viewport_width: Option<u32>,
    form_control: Option<FormControlContext>,
    radio_group: Option<RadioGroupContext>,
}

impl RenderCx {
    /// Root scope using the process-wide default theme and engine
    pub fn new() -> Self {
        Self::with_engine(default_theme(), StyleEngine::global())
    }

    pub fn with_engine(theme: Arc<Theme>, engine: Arc<StyleEngine>) -> Self {
        Self {
            theme,
            engine,
            surface: None,
            viewport_width: None,
            form_control: None,
            radio_group: None,
        }
    }

    /// Child scope with `theme` overriding the inherited one
    pub fn with_theme(&self, theme: Arc<Theme>) -> Self {
        Self {
            theme,
            ..self.clone()
        }
    }

    /// Child scope whose components sit on `surface`
    pub fn with_surface(&self, surface: Color) -> Self {
        Self {
            surface: Some(surface),
            ..self.clone()
        }
    }

    pub fn with_viewport(&self, width: u32) -> Self {
        Self {
            viewport_width: Some(width),
            ..self.clone()
        }
    }

    pub fn with_form_control(&self, context: FormControlContext) -> Self {
        Self {
            form_control: Some(context),
            ..self.clone()
        }
    }

    pub fn with_radio_group(&self, context: RadioGroupContext) -> Self {
        Self {
            radio_group: Some(context),
            ..self.clone()
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn theme_arc(&self) -> Arc<Theme> {
        Arc::clone(&self.theme)
    }

    pub fn engine(&self) -> &StyleEngine {
        &self.engine
    }

    /// Active surface: the nearest override or the theme's surface
    pub fn surface(&self) -> Color {
        self.surface.unwrap_or(self.theme.colors.surface)
    }

    pub fn viewport_width(&self) -> Option<u32> {
        self.viewport_width
    }

    /// Device class of the viewport, when the host reported a width
    pub fn device_class(&self) -> Option<DeviceClass> {
        self.viewport_width
            .map(|w| self.theme.breakpoints.device_class(w))
    }

    pub fn form_control(&self) -> Option<&FormControlContext> {
        self.form_control.as_ref()
    }

    pub fn radio_group(&self) -> Option<&RadioGroupContext> {
        self.radio_group.as_ref()
    }

    /// Compose `template` for a component's style props in this scope
    pub fn compose(&self, template: &StyleTemplate, style: &StyleProps) -> Result<Arc<RuleMap>> {
        let mut context = StyleContext::new().surface(style.surface.unwrap_or(self.surface()));
        if let Some(color) = style.color {
            context = context.color(color);
        }
        self.engine.compose(&self.theme, context, template)
    }
}

impl Default for RenderCx {
    fn default() -> Self {
        Self::new()
    }
}
