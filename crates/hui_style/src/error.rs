//! Error types for style composition

use thiserror::Error;

/// Errors raised while composing or applying styles
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A component asked for a rule its template does not define
    #[error("template `{template}` has no rule named `{rule}`")]
    UnknownRule { template: String, rule: String },

    /// Every template must define a `root` rule
    #[error("template `{template}` does not define a `root` rule")]
    MissingRootRule { template: String },

    /// Rule names must be unique within a template
    #[error("template `{template}` defines rule `{rule}` more than once")]
    DuplicateRule { template: String, rule: String },

    /// A composition-only name was passed as a pass-through attribute
    #[error("`{name}` is a styling prop and cannot be forwarded as an attribute")]
    ReservedAttribute { name: String },

    /// The `component` override is not a usable tag name
    #[error("`{tag}` is not a valid tag name")]
    InvalidTag { tag: String },

    /// The attribute name could not be written into markup as-is
    #[error("`{name}` is not a valid attribute name")]
    InvalidAttributeName { name: String },

    /// The attribute is not on the component's allow-list
    #[error("attribute `{name}` is not allowed on `{component}`")]
    DisallowedAttribute { component: String, name: String },
}

/// Result type for style operations
pub type Result<T> = std::result::Result<T, StyleError>;
