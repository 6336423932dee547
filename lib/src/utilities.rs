use crate::service::common_structs::{Emotion, EmotionScores};

/// `None` for absent, empty or whitespace-only text; otherwise the text unchanged.
pub fn validate_text(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

/// Emotion with the highest score.
/// Ties go to the earliest emotion in [`Emotion::ALL`] order.
pub fn dominant_emotion(scores: &EmotionScores) -> Emotion {
    Emotion::ALL.into_iter().fold(Emotion::Anger, |dominant, emotion| {
        if scores.get(emotion) > scores.get(dominant) {
            emotion
        } else {
            dominant
        }
    })
}
