use std::collections::HashMap;
use std::sync::Arc;

use crate::foundation::core::Canvas;
use crate::foundation::error::MoodwallResult;
use crate::mood::category::MoodCategory;
use crate::render::synth::Wallpaper;

/// Producer of wallpapers on cache misses.
pub trait WallpaperSource {
    fn synthesize(&self, mood: MoodCategory, canvas: Canvas) -> MoodwallResult<Wallpaper>;
}

/// Key of one cached wallpaper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    pub mood: MoodCategory,
    pub width: u32,
    pub height: u32,
}

impl CacheKey {
    pub fn new(mood: MoodCategory, canvas: Canvas) -> Self {
        Self {
            mood,
            width: canvas.width,
            height: canvas.height,
        }
    }
}

/// Append-only wallpaper cache keyed by `(mood, width, height)`.
///
/// Entries never expire and are never evicted; a hit is returned verbatim however old it is.
/// Callers bound the key space (moods x observed viewport sizes).
pub struct WallpaperCache<S> {
    source: S,
    entries: HashMap<CacheKey, Arc<Wallpaper>>,
    misses: u64,
    hits: u64,
}

impl<S: WallpaperSource> WallpaperCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: HashMap::new(),
            misses: 0,
            hits: 0,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Return the cached wallpaper or synthesize, store, and return a new one.
    pub fn get_or_create(
        &mut self,
        mood: MoodCategory,
        canvas: Canvas,
    ) -> MoodwallResult<Arc<Wallpaper>> {
        canvas.validate()?;
        let key = CacheKey::new(mood, canvas);
        if let Some(hit) = self.entries.get(&key) {
            self.hits = self.hits.saturating_add(1);
            tracing::debug!(?key, "wallpaper cache hit");
            return Ok(Arc::clone(hit));
        }

        self.misses = self.misses.saturating_add(1);
        tracing::debug!(?key, "wallpaper cache miss");
        let wallpaper = Arc::new(self.source.synthesize(mood, canvas)?);
        // Last write wins; a racing synthesis for the same key is equally valid.
        self.entries.insert(key, Arc::clone(&wallpaper));
        Ok(wallpaper)
    }

    pub fn get(&self, mood: MoodCategory, canvas: Canvas) -> Option<Arc<Wallpaper>> {
        self.entries.get(&CacheKey::new(mood, canvas)).cloned()
    }

    pub fn contains(&self, mood: MoodCategory, canvas: Canvas) -> bool {
        self.entries.contains_key(&CacheKey::new(mood, canvas))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups that ran the source.
    pub fn miss_count(&self) -> u64 {
        self.misses
    }

    pub fn hit_count(&self) -> u64 {
        self.hits
    }

    /// Cached keys in sorted order.
    pub fn keys(&self) -> Vec<CacheKey> {
        let mut keys: Vec<CacheKey> = self.entries.keys().copied().collect();
        keys.sort();
        keys
    }
}

#[cfg(test)]
#[path = "../tests/unit/cache.rs"]
mod tests;
