//! The theme record every component reads from

use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;

use hui_core::Color;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ThemeError};
use crate::tokens::*;

/// A complete, immutable theme
///
/// Every field is required when loading from TOML; partial themes are
/// built by cloning a full one and editing it.
#[derive(Clone, Debug, Hash, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    pub name: String,
    pub fonts: FontTokens,
    pub colors: ColorTokens,
    pub durations: DurationTokens,
    pub shadows: ShadowTokens,
    pub z_index: ZIndexTokens,
    pub spacing: SpacingScale,
    pub breakpoints: Breakpoints,
}

impl Theme {
    /// The default light theme
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            fonts: FontTokens::default(),
            colors: ColorTokens::light(),
            durations: DurationTokens::default(),
            shadows: ShadowTokens::light(),
            z_index: ZIndexTokens::default(),
            spacing: SpacingScale::default(),
            breakpoints: Breakpoints::default(),
        }
    }

    /// Dark counterpart of [`Theme::light`]
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            fonts: FontTokens::with_muted(Color::from_hex(0xBBBBBB)),
            colors: ColorTokens::dark(),
            shadows: ShadowTokens::dark(),
            ..Self::light()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Copy of this theme with one color replaced
    pub fn with_color(mut self, role: ColorRole, color: Color) -> Self {
        self.colors.set(role, color);
        self
    }

    // ========== Token accessors ==========

    pub fn color(&self, role: ColorRole) -> Color {
        self.colors.get(role)
    }

    pub fn font(&self, role: FontRole) -> &TypographyRule {
        self.fonts.get(role)
    }

    pub fn duration(&self, token: DurationToken) -> Millis {
        self.durations.get(token)
    }

    pub fn shadow(&self, token: ShadowToken) -> &Shadow {
        self.shadows.get(token)
    }

    pub fn z_index(&self, token: ZIndexToken) -> i32 {
        self.z_index.get(token)
    }

    pub fn space(&self, factor: f32) -> Length {
        self.spacing.space(factor)
    }

    pub fn gap(&self, factor: f32) -> Length {
        self.spacing.gap(factor)
    }

    pub fn block(&self, factor: f32) -> Length {
        self.spacing.block(factor)
    }

    /// Deterministic structural hash, used as the theme's version in
    /// composition cache keys
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }

    // ========== Config I/O ==========

    /// Check the invariants serde cannot express
    pub fn validate(&self) -> Result<()> {
        if !self.spacing.is_valid() {
            return Err(ThemeError::InvalidScale {
                space: self.spacing.space_unit,
                gap: self.spacing.gap_unit,
                block: self.spacing.block_unit,
            });
        }
        if !self.breakpoints.is_ascending() {
            return Err(ThemeError::InvalidBreakpoints);
        }
        Ok(())
    }

    /// Parse and validate a theme from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let theme: Theme = toml::from_str(source)?;
        theme.validate()?;
        debug!(name = %theme.name, fingerprint = theme.fingerprint(), "parsed theme");
        Ok(theme)
    }

    /// Load a theme file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading theme");
        Self::from_toml_str(&source)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the theme to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_toml()?).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_values() {
        let theme = Theme::default();
        assert_eq!(theme.space(1.0).to_string(), "16px");
        assert_eq!(theme.space(2.0).to_string(), "32px");
        assert_eq!(theme.gap(1.0).to_string(), "48px");
        assert_eq!(theme.block(1.0).to_string(), "96px");
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let a = Theme::light();
        let b = Theme::light();
        assert_eq!(a.fingerprint(), b.fingerprint());

        let edited = Theme::light().with_color(ColorRole::Accent, Color::from_hex(0x00C853));
        assert_ne!(a.fingerprint(), edited.fingerprint());
        assert_ne!(Theme::light().fingerprint(), Theme::dark().fingerprint());
    }

    #[test]
    fn test_validate_rejects_bad_scale() {
        let mut theme = Theme::light();
        theme.spacing.gap_unit = 8.0;
        assert!(matches!(
            theme.validate(),
            Err(ThemeError::InvalidScale { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unordered_breakpoints() {
        let mut theme = Theme::light();
        theme.breakpoints.desktop = 500;
        assert!(matches!(
            theme.validate(),
            Err(ThemeError::InvalidBreakpoints)
        ));
    }

    #[test]
    fn test_token_accessors() {
        let theme = Theme::light();
        assert_eq!(theme.duration(DurationToken::Standard).to_string(), "250ms");
        assert_eq!(theme.z_index(ZIndexToken::Drawer), 1200);
        assert_eq!(theme.font(FontRole::H4).font_size, Length::Px(24.0));
        assert_eq!(theme.color(ColorRole::Surface), Color::WHITE);
    }
}
