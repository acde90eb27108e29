use std::sync::Arc;

use crate::cache::WallpaperSource;
use crate::config::MoodwallConfig;
use crate::foundation::clock::Clock;
use crate::foundation::error::MoodwallResult;
use crate::mood::category::MoodCategory;
use crate::mood::detection::DetectionFrame;
use crate::mood::stabilizer::{MoodChange, MoodStabilizer, Observation, StabilizationState};
use crate::render::synth::WallpaperSynthesizer;
use crate::trigger::debounce::TaskHandle;
use crate::trigger::display::{Backdrop, DisplaySurface, ViewportSource};
use crate::trigger::regen::RegenerationTrigger;

/// Result of handling one detector frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutcome {
    pub observation: Observation,
    /// Backdrop presented because this frame committed a new stable mood.
    pub presented: Option<Backdrop>,
}

impl FrameOutcome {
    /// Mood-changed notification for listeners such as theme switchers.
    pub fn mood_changed(&self) -> Option<MoodChange> {
        self.observation.changed
    }
}

/// Owned context wiring the stabilizer, cache and trigger for one running session.
pub struct MoodSession<S, D, V> {
    stabilizer: MoodStabilizer,
    trigger: RegenerationTrigger<S, D, V>,
}

impl<D, V> MoodSession<WallpaperSynthesizer, D, V>
where
    D: DisplaySurface,
    V: ViewportSource,
{
    /// Session backed by the clock-seeded synthesizer; `clock` drives both seeds and debouncing.
    pub fn with_synthesizer(
        cfg: MoodwallConfig,
        display: D,
        viewport: V,
        clock: Arc<dyn Clock>,
    ) -> MoodwallResult<Self> {
        let synth = WallpaperSynthesizer::new(Arc::clone(&clock), cfg.synth);
        Self::new(cfg, synth, display, viewport, clock)
    }
}

impl<S, D, V> MoodSession<S, D, V>
where
    S: WallpaperSource,
    D: DisplaySurface,
    V: ViewportSource,
{
    pub fn new(
        cfg: MoodwallConfig,
        source: S,
        display: D,
        viewport: V,
        clock: Arc<dyn Clock>,
    ) -> MoodwallResult<Self> {
        cfg.validate()?;
        Ok(Self {
            stabilizer: MoodStabilizer::new(cfg.stabilizer),
            trigger: RegenerationTrigger::new(cfg.regen, source, display, viewport, clock)?,
        })
    }

    /// Present the initial (neutral) wallpaper.
    pub fn start(&mut self) -> MoodwallResult<Option<Backdrop>> {
        self.trigger.regenerate_current()
    }

    #[tracing::instrument(skip_all)]
    pub fn on_frame(&mut self, frame: &DetectionFrame) -> MoodwallResult<FrameOutcome> {
        let observation = self.stabilizer.observe(frame);
        let presented = match observation.changed {
            Some(change) => self.trigger.on_mood_changed(change.to)?,
            None => None,
        };
        Ok(FrameOutcome {
            observation,
            presented,
        })
    }

    pub fn on_resize(&mut self) -> Option<TaskHandle> {
        self.trigger.on_resize()
    }

    /// Drive timers; call from the host's event loop.
    pub fn poll(&mut self) -> MoodwallResult<Option<Backdrop>> {
        self.trigger.poll()
    }

    pub fn regenerate_current(&mut self) -> MoodwallResult<Option<Backdrop>> {
        self.trigger.regenerate_current()
    }

    /// Force a wallpaper for `mood` outside the stabilizer's hysteresis.
    pub fn apply_override(&mut self, mood: MoodCategory) -> MoodwallResult<Option<Backdrop>> {
        self.trigger.apply_override(mood)
    }

    pub fn set_enabled(&mut self, enabled: bool) -> MoodwallResult<Option<Backdrop>> {
        self.trigger.set_enabled(enabled)
    }

    pub fn stable_mood(&self) -> MoodCategory {
        self.stabilizer.stable_mood()
    }

    pub fn stabilization_state(&self) -> StabilizationState {
        self.stabilizer.state()
    }

    pub fn trigger(&self) -> &RegenerationTrigger<S, D, V> {
        &self.trigger
    }
}
