use std::str::FromStr;

use crate::foundation::error::{MoodwallError, MoodwallResult};

/// Closed set of mood labels the backdrop reacts to.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Happy,
    Sad,
    Angry,
    Surprised,
    Fearful,
    Disgusted,
    #[default]
    Neutral,
}

impl MoodCategory {
    /// Every category, in style-table order.
    pub const ALL: [MoodCategory; 7] = [
        MoodCategory::Happy,
        MoodCategory::Sad,
        MoodCategory::Angry,
        MoodCategory::Surprised,
        MoodCategory::Fearful,
        MoodCategory::Disgusted,
        MoodCategory::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Surprised => "surprised",
            Self::Fearful => "fearful",
            Self::Disgusted => "disgusted",
            Self::Neutral => "neutral",
        }
    }

    /// Parse a detector label, returning `None` for anything unrecognized.
    ///
    /// Case-insensitive; accepts the detector's short forms (`surprise`, `fear`, `disgust`).
    pub fn from_label(label: &str) -> Option<Self> {
        let l = label.trim().to_ascii_lowercase();
        let m = match l.as_str() {
            "happy" => Self::Happy,
            "sad" => Self::Sad,
            "angry" => Self::Angry,
            "surprised" | "surprise" => Self::Surprised,
            "fearful" | "fear" => Self::Fearful,
            "disgusted" | "disgust" => Self::Disgusted,
            "neutral" => Self::Neutral,
            _ => return None,
        };
        Some(m)
    }

    /// Parse a label, falling back to [`MoodCategory::Neutral`] for unknown input.
    pub fn from_label_lenient(label: &str) -> Self {
        Self::from_label(label).unwrap_or_default()
    }

    /// Theme class name for shells that switch CSS themes on mood changes.
    pub fn theme_class(self) -> String {
        format!("theme-{}", self.as_str())
    }
}

impl std::fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodCategory {
    type Err = MoodwallError;

    fn from_str(s: &str) -> MoodwallResult<Self> {
        Self::from_label(s).ok_or_else(|| MoodwallError::validation(format!("unknown mood \"{s}\"")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mood/category.rs"]
mod tests;
