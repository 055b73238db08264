//! Process-wide default theme
//!
//! Components never require a theme to be installed: reading the default
//! falls back to [`Theme::light`] when nothing was set at startup.

use std::sync::{Arc, OnceLock};

use tracing::{debug, warn};

use crate::theme::Theme;

/// Global theme instance
static DEFAULT_THEME: OnceLock<Arc<Theme>> = OnceLock::new();

/// Install the process-wide default theme (call once at startup)
///
/// Returns `false` if a default was already installed; the first theme wins.
pub fn init_default_theme(theme: Theme) -> bool {
    let name = theme.name.clone();
    let installed = DEFAULT_THEME.set(Arc::new(theme)).is_ok();
    if installed {
        debug!(%name, "installed default theme");
    } else {
        warn!(%name, "default theme already initialized, ignoring");
    }
    installed
}

/// The process-wide default theme, initializing it to the light theme on
/// first access
pub fn default_theme() -> Arc<Theme> {
    DEFAULT_THEME
        .get_or_init(|| Arc::new(Theme::light()))
        .clone()
}

/// The installed default theme, if any
pub fn try_default_theme() -> Option<Arc<Theme>> {
    DEFAULT_THEME.get().cloned()
}
