//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a theme:
//! - Colors
//! - Typography (one rule per font role)
//! - Spacing (space/gap/block scales)
//! - Durations
//! - Shadows
//! - Z-index layers
//! - Breakpoints

mod breakpoints;
mod color;
mod duration;
mod shadow;
mod spacing;
mod typography;
mod z_index;

pub use breakpoints::*;
pub use color::*;
pub use duration::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
pub use z_index::*;
