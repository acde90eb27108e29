use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{MoodwallError, MoodwallResult};
use crate::mood::stabilizer::StabilizerConfig;
use crate::render::synth::SynthConfig;
use crate::trigger::regen::RegenConfig;

/// All tuning knobs. Every field is optional in JSON and falls back to its default.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MoodwallConfig {
    pub stabilizer: StabilizerConfig,
    pub regen: RegenConfig,
    pub synth: SynthConfig,
}

impl MoodwallConfig {
    pub fn validate(&self) -> MoodwallResult<()> {
        self.stabilizer.validate()?;
        self.regen.validate()?;
        self.synth.validate()
    }

    pub fn from_json_str(s: &str) -> MoodwallResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| MoodwallError::config(format!("parse: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_path(path: &Path) -> MoodwallResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
