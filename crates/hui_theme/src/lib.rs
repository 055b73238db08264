//! hui Theme System
//!
//! Design tokens and the derived values every hui component styles itself
//! from.
//!
//! # Overview
//!
//! - **Tokens**: typography per role, semantic colors, transition durations,
//!   shadows, z-index layers, spacing scales and responsive breakpoints
//! - **Theme**: the immutable record bundling all tokens, loadable from TOML
//! - **Readable palettes**: a legible foreground for any `(base, surface)`
//! - **Presets**: built-in light and dark themes
//!
//! # Quick Start
//!
//! ```rust
//! use hui_theme::{default_theme, ColorRole, ReadablePalette};
//!
//! let theme = default_theme();
//! let palette = ReadablePalette::derive(theme.color(ColorRole::Bland), theme.colors.surface);
//! assert_eq!(theme.space(1.0).to_string(), "16px");
//! assert_ne!(palette.readable, palette.decorative);
//! ```
//!
//! # Responsive rules
//!
//! ```rust
//! use hui_theme::Theme;
//!
//! let bp = Theme::light().breakpoints;
//! assert_eq!(bp.down(bp.tablet).to_string(), "@media (max-width: 768px)");
//! assert_eq!(bp.up(bp.tablet).to_string(), "@media (min-width: 769px)");
//! ```

pub mod error;
pub mod palette;
pub mod presets;
pub mod state;
pub mod theme;
pub mod tokens;

pub use error::{Result, ThemeError};
pub use palette::{ReadablePalette, MIN_READABLE_CONTRAST};
pub use presets::ThemePreset;
pub use state::{default_theme, init_default_theme, try_default_theme};
pub use theme::Theme;
pub use tokens::*;
