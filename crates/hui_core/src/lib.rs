//! hui Core
//!
//! Foundational primitives shared by every hui crate:
//!
//! - **Color**: sRGB color type with blending, alpha and WCAG contrast math
//! - **Elements**: the render description components produce (tag, classes,
//!   attributes, children) and shared element refs
//! - **Events**: focus/change payloads and callback aliases
//!
//! # Example
//!
//! ```rust
//! use hui_core::Color;
//!
//! let accent: Color = "#2962ff".parse().unwrap();
//! let hover = accent.mix(Color::WHITE, 0.93);
//! assert!(Color::contrast_ratio(&accent, &Color::WHITE) > 4.5);
//! assert_eq!(accent.mix(Color::WHITE, 0.0), accent);
//! # let _ = hover;
//! ```

pub mod color;
pub mod element;
pub mod events;

pub use color::{Color, ColorParseError};
pub use element::{
    is_valid_attr_name, is_valid_tag, Attrs, Element, ElementRef, Node, RefTarget, VOID_ELEMENTS,
};
pub use events::{
    event_types, ChangeEvent, ChangeHandler, ClickHandler, EventType, FocusEvent, FocusHandler,
};
