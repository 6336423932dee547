
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utilities::dominant_emotion;


#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    /// Enumeration order. Also the tie-break order for the dominant emotion.
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    pub const fn new(anger: f64, disgust: f64, fear: f64, joy: f64, sadness: f64) -> Self {
        Self { anger, disgust, fear, joy, sadness }
    }

    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }
}


/// Result of one classification.
///
/// Either every field is `None` (blank input, or the service rejected the
/// text with a 400) or every field is set and `dominant_emotion` names the
/// highest score. The constructors are the only way to build one.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct EmotionScoreSet {
    anger: Option<f64>,
    disgust: Option<f64>,
    fear: Option<f64>,
    joy: Option<f64>,
    sadness: Option<f64>,
    dominant_emotion: Option<Emotion>,
}

impl EmotionScoreSet {
    pub fn blank() -> Self {
        Self {
            anger: None,
            disgust: None,
            fear: None,
            joy: None,
            sadness: None,
            dominant_emotion: None,
        }
    }

    pub fn from_scores(scores: EmotionScores) -> Self {
        Self {
            anger: Some(scores.anger),
            disgust: Some(scores.disgust),
            fear: Some(scores.fear),
            joy: Some(scores.joy),
            sadness: Some(scores.sadness),
            dominant_emotion: Some(dominant_emotion(&scores)),
        }
    }

    pub fn anger(&self) -> Option<f64> {
        self.anger
    }

    pub fn disgust(&self) -> Option<f64> {
        self.disgust
    }

    pub fn fear(&self) -> Option<f64> {
        self.fear
    }

    pub fn joy(&self) -> Option<f64> {
        self.joy
    }

    pub fn sadness(&self) -> Option<f64> {
        self.sadness
    }

    pub fn dominant_emotion(&self) -> Option<Emotion> {
        self.dominant_emotion
    }

    pub fn is_blank(&self) -> bool {
        self.dominant_emotion.is_none()
    }

    pub fn scores(&self) -> Option<EmotionScores> {
        Some(EmotionScores {
            anger: self.anger?,
            disgust: self.disgust?,
            fear: self.fear?,
            joy: self.joy?,
            sadness: self.sadness?,
        })
    }
}
