use super::*;

fn feed(s: &mut MoodStabilizer, mood: MoodCategory, score: f64, n: usize) -> Vec<MoodChange> {
    (0..n)
        .filter_map(|_| s.observe(&DetectionFrame::one(mood, score)).changed)
        .collect()
}

#[test]
fn initial_state_is_neutral() {
    let s = MoodStabilizer::default();
    assert_eq!(s.state(), StabilizationState::default());
    assert_eq!(s.stable_mood(), MoodCategory::Neutral);
}

#[test]
fn five_frames_do_not_commit_sixth_does() {
    let mut s = MoodStabilizer::default();
    assert!(feed(&mut s, MoodCategory::Happy, 0.9, 5).is_empty());
    assert_eq!(s.stable_mood(), MoodCategory::Neutral);

    let obs = s.observe(&DetectionFrame::one(MoodCategory::Happy, 0.9));
    assert_eq!(
        obs.changed,
        Some(MoodChange {
            from: MoodCategory::Neutral,
            to: MoodCategory::Happy
        })
    );
    assert_eq!(s.stable_mood(), MoodCategory::Happy);

    // Holding the same mood never re-fires.
    assert!(feed(&mut s, MoodCategory::Happy, 0.9, 20).is_empty());
}

#[test]
fn low_confidence_is_a_neutral_candidate() {
    let mut s = MoodStabilizer::default();
    let obs = s.observe(&DetectionFrame::one(MoodCategory::Angry, 0.2));
    assert_eq!(obs.candidate, Some(MoodCategory::Neutral));
    assert_eq!(obs.top.unwrap().category, MoodCategory::Angry);
    assert_eq!(s.state().last_observed, MoodCategory::Neutral);
}

#[test]
fn threshold_is_inclusive() {
    let s = MoodStabilizer::default();
    assert_eq!(
        s.candidate_for(EmotionScore::new(MoodCategory::Sad, 0.35)),
        MoodCategory::Sad
    );
    assert_eq!(
        s.candidate_for(EmotionScore::new(MoodCategory::Sad, 0.3499)),
        MoodCategory::Neutral
    );
}

#[test]
fn low_confidence_run_returns_to_neutral() {
    let mut s = MoodStabilizer::default();
    feed(&mut s, MoodCategory::Happy, 0.9, 6);
    let changes = feed(&mut s, MoodCategory::Happy, 0.1, 6);
    assert_eq!(
        changes,
        vec![MoodChange {
            from: MoodCategory::Happy,
            to: MoodCategory::Neutral
        }]
    );
}

#[test]
fn interruption_resets_the_run() {
    let mut s = MoodStabilizer::default();
    feed(&mut s, MoodCategory::Sad, 0.8, 5);
    s.observe(&DetectionFrame::one(MoodCategory::Angry, 0.8));
    assert_eq!(s.state().repeat_count, 0);
    assert!(feed(&mut s, MoodCategory::Sad, 0.8, 5).is_empty());
    assert_eq!(s.stable_mood(), MoodCategory::Neutral);
    assert_eq!(feed(&mut s, MoodCategory::Sad, 0.8, 1).len(), 1);
}

#[test]
fn frames_without_faces_hold_state() {
    let mut s = MoodStabilizer::default();
    feed(&mut s, MoodCategory::Fearful, 0.9, 5);
    let before = s.state();
    for _ in 0..10 {
        let obs = s.observe(&DetectionFrame::empty());
        assert_eq!(obs, Observation::default());
    }
    assert_eq!(s.state(), before);
    assert_eq!(feed(&mut s, MoodCategory::Fearful, 0.9, 1).len(), 1);
}

#[test]
fn custom_thresholds_apply() {
    let mut s = MoodStabilizer::new(StabilizerConfig {
        min_confidence: 0.9,
        stable_frames: 2,
    });
    assert!(feed(&mut s, MoodCategory::Happy, 0.95, 1).is_empty());
    assert_eq!(feed(&mut s, MoodCategory::Happy, 0.95, 1).len(), 1);
    assert_eq!(s.candidate_for(EmotionScore::new(MoodCategory::Sad, 0.8)), MoodCategory::Neutral);
}

#[test]
fn config_validation() {
    assert!(StabilizerConfig::default().validate().is_ok());
    assert!(
        StabilizerConfig {
            min_confidence: 1.5,
            ..StabilizerConfig::default()
        }
        .validate()
        .is_err()
    );
    assert!(
        StabilizerConfig {
            stable_frames: 0,
            ..StabilizerConfig::default()
        }
        .validate()
        .is_err()
    );
}
