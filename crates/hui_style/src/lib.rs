//! hui Style Composition
//!
//! Turns a theme, a caller-selected color/surface pair and a component's
//! [`StyleTemplate`] into a [`RuleMap`]: one class token and one block of
//! CSS per named rule.
//!
//! - **Rules** are structured ([`StyleRule`]): declarations keyed by a closed
//!   [`Property`] enum, nested [`Selector`] blocks and media blocks
//! - **Tokens** are deterministic: `{template}-{rule}-{hash}` where the hash
//!   covers the template, the theme fingerprint, the color and the surface
//! - **Caching** is explicit: [`StyleEngine`] keeps an LRU of rule maps keyed
//!   by [`StyleKey`]
//! - **Roots**: [`Root`] applies the `root` class and forwards validated
//!   pass-through attributes
//!
//! # Example
//!
//! ```rust
//! use hui_style::{Property, RuleBuilder, StyleContext, StyleEngine, StyleEnv, StyleRule, StyleTemplate};
//! use hui_theme::Theme;
//!
//! fn root(env: &StyleEnv<'_>) -> StyleRule {
//!     StyleRule::new()
//!         .set(Property::Color, env.color.readable)
//!         .set(Property::Padding, env.theme.space(0.5))
//! }
//!
//! const RULES: &[(&str, RuleBuilder)] = &[("root", root)];
//! const BADGE: StyleTemplate = StyleTemplate::new("badge", RULES);
//!
//! let engine = StyleEngine::new();
//! let theme = Theme::light();
//! let first = engine.compose(&theme, StyleContext::new(), &BADGE).unwrap();
//! let again = engine.compose(&theme, StyleContext::new(), &BADGE).unwrap();
//! assert_eq!(first.class("root").unwrap(), again.class("root").unwrap());
//! assert!(first.stylesheet().contains("padding: 8px;"));
//! ```

pub mod class_set;
pub mod engine;
pub mod error;
pub mod key;
pub mod property;
pub mod root;
pub mod rule;
pub mod rule_map;
pub mod selector;
pub mod template;

pub use class_set::ClassSet;
pub use engine::{compose_uncached, CacheStats, StyleEngine, DEFAULT_CACHE_CAPACITY};
pub use error::{Result, StyleError};
pub use key::StyleKey;
pub use property::Property;
pub use root::{AttrPolicy, Root, GLOBAL_ATTRIBUTES, RESERVED_ATTRIBUTES};
pub use rule::StyleRule;
pub use rule_map::{RealizedRule, RuleMap};
pub use selector::{Segment, Selector};
pub use template::{RuleBuilder, StyleContext, StyleEnv, StyleTemplate, ROOT_RULE};
