use crate::mood::category::MoodCategory;

/// One emotion score reported for a face.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EmotionScore {
    /// Detector label; unknown labels read as neutral.
    #[serde(rename = "emotion", deserialize_with = "de_lenient_category")]
    pub category: MoodCategory,
    /// Confidence in `[0, 1]`.
    pub score: f64,
}

impl EmotionScore {
    pub fn new(category: MoodCategory, score: f64) -> Self {
        Self { category, score }
    }
}

/// Emotion distribution for a single detected face.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FaceEmotions {
    #[serde(default)]
    pub emotion: Vec<EmotionScore>,
}

/// Detector output for one video frame. Faces are in detector order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DetectionFrame {
    #[serde(default, rename = "face", alias = "faces")]
    pub faces: Vec<FaceEmotions>,
}

impl DetectionFrame {
    /// Frame with a single face carrying the given scores.
    pub fn single_face(scores: impl IntoIterator<Item = EmotionScore>) -> Self {
        Self {
            faces: vec![FaceEmotions {
                emotion: scores.into_iter().collect(),
            }],
        }
    }

    /// Frame with one face whose only emotion is `category@score`.
    pub fn one(category: MoodCategory, score: f64) -> Self {
        Self::single_face([EmotionScore::new(category, score)])
    }

    /// Frame with no detected faces.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Highest-scoring emotion of the first face.
    ///
    /// Only the first face is consulted. Ties keep the earlier entry; NaN scores are skipped.
    pub fn top_emotion(&self) -> Option<EmotionScore> {
        let face = self.faces.first()?;
        let mut best: Option<EmotionScore> = None;
        for e in face.emotion.iter().filter(|e| !e.score.is_nan()) {
            match best {
                Some(b) if e.score <= b.score => {}
                _ => best = Some(*e),
            }
        }
        best
    }
}

fn de_lenient_category<'de, D>(deserializer: D) -> Result<MoodCategory, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let label = <String as serde::Deserialize>::deserialize(deserializer)?;
    Ok(MoodCategory::from_label_lenient(&label))
}

#[cfg(test)]
#[path = "../../tests/unit/mood/detection.rs"]
mod tests;
