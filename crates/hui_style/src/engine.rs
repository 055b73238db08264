//! The style composition engine
//!
//! `compose` turns `(theme, color/surface, template)` into a [`RuleMap`].
//! Results are memoized in an LRU cache keyed by [`StyleKey`]; because the
//! key covers every input, a cached map is always the map a fresh
//! composition would produce.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use hui_theme::Theme;
use indexmap::IndexMap;
use lru::LruCache;
use tracing::{debug, trace};

use crate::error::Result;
use crate::key::StyleKey;
use crate::rule_map::{RealizedRule, RuleMap};
use crate::template::{StyleContext, StyleEnv, StyleTemplate};

/// Compositions kept by [`StyleEngine::new`]
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Global engine instance
static GLOBAL_ENGINE: OnceLock<Arc<StyleEngine>> = OnceLock::new();

/// Cache counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Composes style templates and caches the results
pub struct StyleEngine {
    cache: Mutex<LruCache<StyleKey, Arc<RuleMap>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl StyleEngine {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Engine holding at most `capacity` compositions (minimum one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Process-wide engine shared by render scopes that don't bring their own
    pub fn global() -> Arc<StyleEngine> {
        GLOBAL_ENGINE
            .get_or_init(|| Arc::new(StyleEngine::new()))
            .clone()
    }

    /// Compose `template` for `theme` and `context`, reusing a cached map
    /// when the same inputs were composed before
    pub fn compose(
        &self,
        theme: &Theme,
        context: StyleContext,
        template: &StyleTemplate,
    ) -> Result<Arc<RuleMap>> {
        let (color, surface) = context.resolve(theme, template);
        let key = StyleKey::new(template, theme, color, surface);

        if let Some(map) = self.lock().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(template = template.name(), "style cache hit");
            return Ok(Arc::clone(map));
        }

        // Built outside the lock; a concurrent miss for the same key builds
        // an identical map.
        let map = Arc::new(realize(key, theme, context, template)?);
        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(
            template = template.name(),
            theme = %theme.name,
            rules = map.len(),
            "composed style template"
        );
        self.lock().put(key, Arc::clone(&map));
        Ok(map)
    }

    /// Drop every cached composition
    pub fn clear(&self) {
        self.lock().clear();
        debug!("style cache cleared");
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }

    /// CSS of every cached composition, ordered by template then root class
    pub fn stylesheet(&self) -> String {
        let mut maps: Vec<Arc<RuleMap>> = self.lock().iter().map(|(_, m)| Arc::clone(m)).collect();
        maps.sort_by(|a, b| {
            a.template()
                .cmp(b.template())
                .then_with(|| a.root_class().ok().cmp(&b.root_class().ok()))
        });
        maps.iter().map(|map| map.stylesheet()).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<StyleKey, Arc<RuleMap>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StyleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleEngine")
            .field("stats", &self.stats())
            .finish()
    }
}

/// Compose without caching
///
/// Every rule builder runs exactly once, whether or not the component ends
/// up applying the rule.
pub fn compose_uncached(
    theme: &Theme,
    context: StyleContext,
    template: &StyleTemplate,
) -> Result<RuleMap> {
    let (color, surface) = context.resolve(theme, template);
    let key = StyleKey::new(template, theme, color, surface);
    realize(key, theme, context, template)
}

fn realize(
    key: StyleKey,
    theme: &Theme,
    context: StyleContext,
    template: &StyleTemplate,
) -> Result<RuleMap> {
    template.validate()?;
    let (color, surface) = context.resolve(theme, template);
    let env = StyleEnv::new(theme, color, surface);

    let mut rules = IndexMap::with_capacity(template.rules().len());
    for (name, build) in template.rules() {
        let rule = build(&env);
        let class = key.class_token(name);
        let css = rule.to_css(&format!(".{class}"));
        rules.insert(*name, RealizedRule { class, css });
    }
    Ok(RuleMap::new(key, rules))
}
