// SPDX-License-Identifier: MPL-2.0
//! Per-locale memoization of localized trees.
//!
//! The canonical tree and translation table are immutable after load, so
//! localizing a tree for a given locale always produces the same result.
//! [`LocalizedTrees`] caches that result per locale behind an LRU map and
//! hands out shared references. The cache is optional and thread-unaware;
//! recomputing an entry is idempotent, so callers needing concurrency can
//! simply wrap it or skip it.

use crate::locale::Locale;
use crate::tree::{localize, ContentNode, TranslationTable};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Default capacity, comfortably above the site's locale count.
pub const DEFAULT_MAX_LOCALES: usize = 32;

/// Lazily-populated cache of localized trees, keyed by locale code.
#[derive(Debug)]
pub struct LocalizedTrees {
    cache: LruCache<String, Arc<ContentNode>>,
}

impl LocalizedTrees {
    /// Creates a cache holding at most `max_locales` localized trees.
    /// A capacity of zero is clamped to one.
    #[must_use]
    pub fn new(max_locales: usize) -> Self {
        let capacity = NonZeroUsize::new(max_locales).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Returns the localized tree for `locale`, computing and caching it on
    /// first use.
    pub fn get_or_localize(
        &mut self,
        tree: &ContentNode,
        locale: &Locale,
        table: &TranslationTable,
    ) -> Arc<ContentNode> {
        if let Some(cached) = self.cache.get(locale.code()) {
            return Arc::clone(cached);
        }
        let localized = Arc::new(localize(tree, locale, table));
        self.cache.put(locale.code().to_string(), Arc::clone(&localized));
        localized
    }

    /// Returns `true` if a tree is cached for `locale`.
    #[must_use]
    pub fn contains(&self, locale: &Locale) -> bool {
        self.cache.contains(locale.code())
    }

    /// Number of cached locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if nothing is cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drops every cached tree.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl Default for LocalizedTrees {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LOCALES)
    }
}
