//! Drawer overlay
//!
//! While open, the drawer owns exactly one container on the [`MountHost`]
//! holding a backdrop and the drawer panel. Closing removes the container,
//! so repeated open/close cycles never leave containers behind.

use std::sync::Arc;

use hui_core::{ClickHandler, Color, Element, Node};
use hui_style::{
    AttrPolicy, Property, Result, Root, RuleBuilder, StyleEnv, StyleRule, StyleTemplate,
};
use hui_theme::{ColorRole, ShadowToken, ZIndexToken};
use tracing::{debug, warn};

use super::shared::{StyleProps, Styled};
use crate::context::RenderCx;
use crate::host::{ContainerId, MountHost};

fn root(env: &StyleEnv<'_>) -> StyleRule {
    let theme = env.theme;
    StyleRule::new()
        .set(Property::BackgroundColor, theme.color(ColorRole::Surface))
        .set(Property::BoxShadow, theme.shadow(ShadowToken::Standard))
        .set(Property::Width, theme.block(3.0))
        .set(Property::MaxWidth, "100%")
        .set(Property::Height, "100%")
        .set(Property::ZIndex, theme.z_index(ZIndexToken::Drawer))
}

fn container(_: &StyleEnv<'_>) -> StyleRule {
    StyleRule::new()
        .set(Property::Position, "fixed")
        .set(Property::Width, "100vw")
        .set(Property::Height, "100vh")
        .set(Property::Top, 0)
        .set(Property::Left, 0)
        .set(Property::Display, "flex")
}

fn backdrop(env: &StyleEnv<'_>) -> StyleRule {
    StyleRule::new()
        .set(Property::Position, "fixed")
        .set(Property::Top, 0)
        .set(Property::Left, 0)
        .set(Property::Bottom, 0)
        .set(Property::Right, 0)
        .set(Property::BackgroundColor, Color::BLACK.with_alpha(0.5))
        .set(Property::ZIndex, env.theme.z_index(ZIndexToken::Drawer))
}

const RULES: &[(&str, RuleBuilder)] = &[
    ("root", root),
    ("container", container),
    ("backdrop", backdrop),
];

pub const DRAWER_STYLES: StyleTemplate = StyleTemplate::new("drawer", RULES);

const POLICY: AttrPolicy = AttrPolicy::new("Drawer", &[]);

/// Side panel rendered into its own overlay container
#[derive(Default)]
pub struct Drawer {
    style: StyleProps,
    open: bool,
    on_close: Option<ClickHandler>,
    children: Vec<Node>,
    container: Option<ContainerId>,
    container_class: Option<String>,
}

impl Drawer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Called when the backdrop is clicked
    pub fn on_close<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_close = Some(Arc::new(handler));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Takes effect on the next [`Drawer::render`]
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Container currently owned by this drawer
    pub fn container(&self) -> Option<ContainerId> {
        self.container
    }

    /// Sync the host with the `open` flag
    ///
    /// Opening mounts a container carrying the `container` class and fills
    /// it with the backdrop and the panel; closing unmounts it. A container
    /// whose class no longer matches the composed `container` rule is
    /// replaced. Returns the container in use, if any.
    pub fn render(
        &mut self,
        cx: &RenderCx,
        host: &mut dyn MountHost,
    ) -> Result<Option<ContainerId>> {
        if !self.open {
            self.unmount(host);
            return Ok(None);
        }

        let rules = cx.compose(&DRAWER_STYLES, &self.style)?;
        let panel = Root::new(&rules, "div", self.style.component.as_deref())
            .render(&self.style.attrs, &POLICY)?;
        let panel = Element {
            children: self.children.clone(),
            ..panel
        };
        let backdrop = Element::new("div").class(rules.class("backdrop")?);
        let children = vec![backdrop, panel];

        let class = rules.class("container")?;
        if self.container.is_some() && self.container_class.as_deref() != Some(class) {
            debug!(class, "drawer container class changed, remounting");
            self.unmount(host);
        }
        let id = match self.container {
            Some(id) => id,
            None => self.mount(host, class),
        };
        let id = if host.render_into(id, children.clone()) {
            id
        } else {
            // The host dropped the container behind our back
            warn!(?id, "drawer container vanished, remounting");
            let id = self.mount(host, class);
            host.render_into(id, children);
            id
        };
        Ok(Some(id))
    }

    fn mount(&mut self, host: &mut dyn MountHost, class: &str) -> ContainerId {
        let id = host.mount_container(class);
        debug!(?id, "drawer opened");
        self.container = Some(id);
        self.container_class = Some(class.to_string());
        id
    }

    /// Remove the container, if one is mounted
    pub fn unmount(&mut self, host: &mut dyn MountHost) {
        self.container_class = None;
        if let Some(id) = self.container.take() {
            host.unmount_container(id);
            debug!(?id, "drawer closed");
        }
    }

    /// Backdrop clicked: forward to `on_close`
    ///
    /// The drawer stays open until the caller flips `open` and renders again.
    pub fn dismiss(&self) {
        if let Some(handler) = &self.on_close {
            handler();
        }
    }
}

impl Styled for Drawer {
    fn style_props(&mut self) -> &mut StyleProps {
        &mut self.style
    }
}

/// Create a closed drawer
pub fn drawer() -> Drawer {
    Drawer::new()
}
