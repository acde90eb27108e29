use std::sync::Arc;
use std::time::Duration;

use crate::cache::{WallpaperCache, WallpaperSource};
use crate::foundation::clock::Clock;
use crate::foundation::core::{Canvas, MAX_CANVAS_DIM, Viewport};
use crate::foundation::error::{MoodwallError, MoodwallResult};
use crate::mood::category::MoodCategory;
use crate::trigger::debounce::{Debouncer, TaskHandle};
use crate::trigger::display::{Backdrop, DisplaySurface, ViewportSource};

/// Resolution and scheduling knobs for [`RegenerationTrigger`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RegenConfig {
    /// Supersampling factor applied on top of the device pixel ratio.
    pub quality: f64,
    pub dpr_cap: f64,
    pub min_width: u32,
    pub min_height: u32,
    pub resize_debounce_ms: u64,
    /// Initial state of the wallpaper feature toggle.
    pub enabled: bool,
}

impl Default for RegenConfig {
    fn default() -> Self {
        Self {
            quality: 1.8,
            dpr_cap: 3.0,
            min_width: 1280,
            min_height: 720,
            resize_debounce_ms: 200,
            enabled: true,
        }
    }
}

impl RegenConfig {
    pub fn validate(&self) -> MoodwallResult<()> {
        if !self.quality.is_finite() || self.quality <= 0.0 {
            return Err(MoodwallError::config("regen.quality must be finite and > 0"));
        }
        if !self.dpr_cap.is_finite() || self.dpr_cap <= 0.0 {
            return Err(MoodwallError::config("regen.dpr_cap must be finite and > 0"));
        }
        if self.min_width == 0 || self.min_height == 0 {
            return Err(MoodwallError::config("regen minimum dimensions must be > 0"));
        }
        if self.min_width > MAX_CANVAS_DIM || self.min_height > MAX_CANVAS_DIM {
            return Err(MoodwallError::config(format!(
                "regen minimum dimensions must be <= {MAX_CANVAS_DIM}"
            )));
        }
        Ok(())
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Render resolution for a viewport: scaled by quality x capped DPR, floored at the minimums.
    pub fn target_canvas(&self, viewport: Viewport) -> MoodwallResult<Canvas> {
        let scale = self.quality * viewport.effective_dpr(self.dpr_cap);
        let edge = |logical: f64, min: u32| -> u32 {
            let px = if logical.is_finite() && logical > 0.0 {
                (logical * scale).round()
            } else {
                0.0
            };
            let px = px.min(f64::from(MAX_CANVAS_DIM)) as u32;
            px.max(min).min(MAX_CANVAS_DIM)
        };
        Canvas::new(
            edge(viewport.width, self.min_width),
            edge(viewport.height, self.min_height),
        )
    }
}

/// Reacts to stable-mood changes and debounced resizes by presenting a cached wallpaper.
///
/// All event handling is synchronous; a request arriving during a synthesis runs after it.
pub struct RegenerationTrigger<S, D, V> {
    cfg: RegenConfig,
    enabled: bool,
    current: MoodCategory,
    cache: WallpaperCache<S>,
    display: D,
    viewport: V,
    resize: Debouncer<()>,
    clock: Arc<dyn Clock>,
    presented: u64,
}

impl<S, D, V> RegenerationTrigger<S, D, V>
where
    S: WallpaperSource,
    D: DisplaySurface,
    V: ViewportSource,
{
    pub fn new(
        cfg: RegenConfig,
        source: S,
        display: D,
        viewport: V,
        clock: Arc<dyn Clock>,
    ) -> MoodwallResult<Self> {
        cfg.validate()?;
        Ok(Self {
            enabled: cfg.enabled,
            current: MoodCategory::Neutral,
            cache: WallpaperCache::new(source),
            display,
            viewport,
            resize: Debouncer::new(cfg.resize_debounce()),
            clock,
            presented: 0,
            cfg,
        })
    }

    pub fn config(&self) -> &RegenConfig {
        &self.cfg
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Mood used for resize-driven and manual regenerations.
    pub fn current_mood(&self) -> MoodCategory {
        self.current
    }

    pub fn cache(&self) -> &WallpaperCache<S> {
        &self.cache
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Number of backdrops handed to the display surface.
    pub fn presented_count(&self) -> u64 {
        self.presented
    }

    pub fn pending_resize(&self) -> Option<TaskHandle> {
        self.resize.pending()
    }

    /// Track a newly committed stable mood and, when enabled, present its wallpaper.
    pub fn on_mood_changed(&mut self, mood: MoodCategory) -> MoodwallResult<Option<Backdrop>> {
        self.current = mood;
        if !self.enabled {
            return Ok(None);
        }
        self.present(mood).map(Some)
    }

    /// Record a resize event; regeneration fires from [`Self::poll`] after the quiet period.
    pub fn on_resize(&mut self) -> Option<TaskHandle> {
        if !self.enabled {
            return None;
        }
        let handle = self.resize.schedule(self.clock.monotonic(), ());
        tracing::debug!(?handle, "resize debounce rescheduled");
        Some(handle)
    }

    /// Run a due resize regeneration, if any.
    pub fn poll(&mut self) -> MoodwallResult<Option<Backdrop>> {
        if self.resize.poll(self.clock.monotonic()).is_none() || !self.enabled {
            return Ok(None);
        }
        self.present(self.current).map(Some)
    }

    /// Re-present the current mood at the current viewport.
    pub fn regenerate_current(&mut self) -> MoodwallResult<Option<Backdrop>> {
        if !self.enabled {
            return Ok(None);
        }
        self.present(self.current).map(Some)
    }

    /// Present `mood` directly, leaving the tracked mood untouched.
    pub fn apply_override(&mut self, mood: MoodCategory) -> MoodwallResult<Option<Backdrop>> {
        if !self.enabled {
            return Ok(None);
        }
        self.present(mood).map(Some)
    }

    /// Flip the feature toggle. Enabling presents the current mood; disabling clears the surface.
    pub fn set_enabled(&mut self, enabled: bool) -> MoodwallResult<Option<Backdrop>> {
        let was = self.enabled;
        self.enabled = enabled;
        match (was, enabled) {
            (false, true) => self.present(self.current).map(Some),
            (true, false) => {
                self.resize.cancel_all();
                self.display.clear();
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn present(&mut self, mood: MoodCategory) -> MoodwallResult<Backdrop> {
        let canvas = self.cfg.target_canvas(self.viewport.viewport())?;
        let wallpaper = self.cache.get_or_create(mood, canvas)?;
        let backdrop = Backdrop::new(mood, wallpaper);
        self.display.present(&backdrop);
        self.presented = self.presented.saturating_add(1);
        tracing::info!(%mood, %canvas, "wallpaper presented");
        Ok(backdrop)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/regen.rs"]
mod tests;
