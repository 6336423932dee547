//! Keyword classifier used while the emotion service cannot be reached.
//!
//! Deterministic: the same text always maps to the same fixed score vector.

use tracing::debug;

use super::common_structs::{Emotion, EmotionScoreSet, EmotionScores};

struct KeywordRule {
    emotion: Emotion,
    keywords: &'static [&'static str],
    scores: EmotionScores,
}

// Priority order: the first rule with any keyword in the text wins.
static KEYWORD_RULES: [KeywordRule; 5] = [
    KeywordRule {
        emotion: Emotion::Joy,
        keywords: &["happy", "joy", "love", "glad", "delighted", "pleased"],
        scores: EmotionScores::new(0.05, 0.02, 0.03, 0.85, 0.06),
    },
    KeywordRule {
        emotion: Emotion::Anger,
        keywords: &["hate", "angry", "anger", "mad", "furious", "irritated", "annoyed"],
        scores: EmotionScores::new(0.8, 0.6, 0.3, 0.05, 0.25),
    },
    KeywordRule {
        emotion: Emotion::Disgust,
        keywords: &["disgusted", "disgust", "gross", "revolting", "nauseating"],
        scores: EmotionScores::new(0.15, 0.8, 0.1, 0.02, 0.1),
    },
    KeywordRule {
        emotion: Emotion::Fear,
        keywords: &["afraid", "scared", "fear", "terrified", "worried", "anxious"],
        scores: EmotionScores::new(0.05, 0.03, 0.82, 0.02, 0.12),
    },
    KeywordRule {
        emotion: Emotion::Sadness,
        keywords: &["sad", "unhappy", "depressed", "down", "mournful", "sorrow"],
        scores: EmotionScores::new(0.05, 0.03, 0.08, 0.02, 0.82),
    },
];

pub const NEUTRAL_SCORES: EmotionScores = EmotionScores::new(0.1, 0.1, 0.15, 0.2, 0.45);


#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackService;

impl FallbackService {
    pub fn new() -> Self {
        Self
    }

    /// Emotion of the first keyword rule matching `text`, case-insensitively.
    pub fn matched_emotion(&self, text: &str) -> Option<Emotion> {
        matched_rule(&text.to_lowercase()).map(|rule| rule.emotion)
    }

    pub fn get_emotion_scores(&self, text: &str) -> EmotionScoreSet {
        let text_lower = text.to_lowercase();
        let scores = match matched_rule(&text_lower) {
            Some(rule) => {
                debug!(emotion = %rule.emotion, "fallback keyword match");
                rule.scores
            },
            None => {
                debug!("no fallback keyword matched, using neutral scores");
                NEUTRAL_SCORES
            },
        };
        EmotionScoreSet::from_scores(scores)
    }
}

fn matched_rule(text_lower: &str) -> Option<&'static KeywordRule> {
    KEYWORD_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| text_lower.contains(keyword)))
}
