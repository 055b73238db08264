//! hui Component Library
//!
//! Themed components that compose their class tokens through `hui_style`
//! and share state through an explicit [`RenderCx`] scope.
//!
//! # Overview
//!
//! - **Scope**: [`RenderCx`] carries the theme, the style engine, the
//!   surface and the nearest form-control and radio-group contexts
//! - **Components**: [`Anchor`](components::Anchor), [`Drawer`](components::Drawer),
//!   [`FormControl`](components::FormControl), [`Label`](components::Label),
//!   [`Radio`](components::Radio), [`RadioGroup`](components::RadioGroup),
//!   [`TableHead`](components::TableHead), [`TextArea`](components::TextArea)
//!   and [`Typography`](components::Typography)
//! - **Overlays** render through a [`MountHost`](host::MountHost)
//!
//! # Example
//!
//! ```rust
//! use hui_cn::prelude::*;
//!
//! let cx = RenderCx::new();
//! let field = form_control("email")
//!     .has_error(true)
//!     .render(&cx, |scope| {
//!         Ok(vec![
//!             label().text("Email").render(scope)?,
//!             text_area().filled().render(scope)?,
//!         ])
//!     })
//!     .unwrap();
//!
//! let input = field.find_by_tag("textarea").unwrap();
//! assert_eq!(input.attrs.get("aria-invalid"), Some("true"));
//! ```

pub mod components;
pub mod context;
pub mod host;

pub use context::RenderCx;

/// Everything needed to build and render components
pub mod prelude {
    pub use crate::components::{
        anchor, drawer, form_control, label, radio, radio_group, table_head, text_area,
        typography, Anchor, Drawer, FormControl, FormControlContext, Label, Radio, RadioGroup,
        RadioSize, Styled, TableHead, TextArea, TextAreaVariant, Typography,
    };
    pub use crate::context::RenderCx;
    pub use crate::host::{ContainerId, MemoryHost, MountHost};
    pub use hui_core::{Attrs, Color, Element, ElementRef};
}
