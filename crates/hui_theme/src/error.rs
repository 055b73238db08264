//! Error types for theme loading

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or saving a theme
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme file could not be read or written
    #[error("failed to access theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The theme source is not valid TOML or is missing a field
    #[error("failed to parse theme: {0}")]
    Parse(#[from] toml::de::Error),

    /// The theme could not be serialized
    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Spacing units must be positive and ordered space < gap < block
    #[error("invalid spacing scale: space={space}, gap={gap}, block={block}")]
    InvalidScale { space: f32, gap: f32, block: f32 },

    /// Breakpoint widths must be strictly increasing
    #[error("breakpoints must be strictly increasing (mobile < tablet < desktop < desktop_large)")]
    InvalidBreakpoints,

    /// A color override could not be parsed
    #[error(transparent)]
    Color(#[from] hui_core::ColorParseError),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
