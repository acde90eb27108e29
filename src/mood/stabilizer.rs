use crate::foundation::error::{MoodwallError, MoodwallResult};
use crate::mood::category::MoodCategory;
use crate::mood::detection::{DetectionFrame, EmotionScore};

/// Hysteresis knobs for [`MoodStabilizer`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StabilizerConfig {
    /// Top scores below this read as a neutral candidate.
    pub min_confidence: f64,
    /// Consecutive equal candidates required before committing a new stable mood.
    pub stable_frames: u32,
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.35,
            stable_frames: 6,
        }
    }
}

impl StabilizerConfig {
    pub fn validate(&self) -> MoodwallResult<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(MoodwallError::config(
                "stabilizer.min_confidence must be in [0, 1]",
            ));
        }
        if self.stable_frames == 0 {
            return Err(MoodwallError::config(
                "stabilizer.stable_frames must be > 0",
            ));
        }
        Ok(())
    }
}

/// Mutable hysteresis state. Starts at neutral/neutral/0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct StabilizationState {
    pub last_observed: MoodCategory,
    pub stable: MoodCategory,
    /// Repeats of `last_observed` after its first sighting in the current run.
    pub repeat_count: u32,
}

/// Committed transition of the stable mood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MoodChange {
    pub from: MoodCategory,
    pub to: MoodCategory,
}

/// Result of feeding one frame to the stabilizer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Observation {
    /// Top emotion of the first face, if any face reported emotions.
    pub top: Option<EmotionScore>,
    /// Candidate mood after the confidence gate; `None` when no transition ran.
    pub candidate: Option<MoodCategory>,
    /// Set when this frame committed a new stable mood.
    pub changed: Option<MoodChange>,
}

/// Debounces noisy per-frame emotions into a stable mood signal.
#[derive(Clone, Debug, Default)]
pub struct MoodStabilizer {
    cfg: StabilizerConfig,
    state: StabilizationState,
}

impl MoodStabilizer {
    pub fn new(cfg: StabilizerConfig) -> Self {
        Self {
            cfg,
            state: StabilizationState::default(),
        }
    }

    pub fn config(&self) -> StabilizerConfig {
        self.cfg
    }

    pub fn state(&self) -> StabilizationState {
        self.state
    }

    pub fn stable_mood(&self) -> MoodCategory {
        self.state.stable
    }

    /// Map a top emotion to a candidate mood; low confidence reads as neutral.
    pub fn candidate_for(&self, top: EmotionScore) -> MoodCategory {
        if top.score >= self.cfg.min_confidence {
            top.category
        } else {
            MoodCategory::Neutral
        }
    }

    /// Run one transition. Frames without emotion data leave the state untouched.
    pub fn observe(&mut self, frame: &DetectionFrame) -> Observation {
        let Some(top) = frame.top_emotion() else {
            return Observation::default();
        };

        let candidate = self.candidate_for(top);
        let changed = self.push_candidate(candidate);
        Observation {
            top: Some(top),
            candidate: Some(candidate),
            changed,
        }
    }

    fn push_candidate(&mut self, candidate: MoodCategory) -> Option<MoodChange> {
        let s = &mut self.state;
        if candidate == s.last_observed {
            s.repeat_count = s.repeat_count.saturating_add(1);
        } else {
            s.repeat_count = 0;
            s.last_observed = candidate;
        }

        // Run length includes the first sighting.
        let run_len = s.repeat_count.saturating_add(1);
        if run_len < self.cfg.stable_frames || candidate == s.stable {
            return None;
        }

        let change = MoodChange {
            from: s.stable,
            to: candidate,
        };
        s.stable = candidate;
        tracing::debug!(from = %change.from, to = %change.to, "stable mood committed");
        Some(change)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mood/stabilizer.rs"]
mod tests;
