pub mod common_structs;
pub mod fallback_service;
pub mod watson_service;

use tracing::{debug, error, warn};

use crate::config::ClassifierConfig;
use crate::error::{ClassifyError, ConfigError, RemoteError};
use crate::utilities::validate_text;
use common_structs::EmotionScoreSet;


/// Validates text, scores it remotely, and falls back to keywords when the
/// emotion service is unreachable.
///
/// Cheap to clone; clones share the underlying HTTP connection pool.
#[derive(Debug, Clone)]
pub struct EmotionClassifier {
    pub watson: watson_service::WatsonService,
    pub fallback: fallback_service::FallbackService,
}

impl EmotionClassifier {
    pub fn new(config: &ClassifierConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            watson: watson_service::WatsonService::new(config)?,
            fallback: fallback_service::FallbackService::new(),
        })
    }

    pub async fn classify(&self, text: Option<&str>) -> Result<EmotionScoreSet, ClassifyError> {
        let Some(text) = validate_text(text) else {
            debug!("blank text, skipping emotion service");
            return Ok(EmotionScoreSet::blank());
        };

        match self.watson.get_emotion_scores(text).await {
            Ok(result) => Ok(result),
            Err(RemoteError::Unreachable(error)) => {
                warn!(error = %error, "emotion service unreachable, using keyword fallback");
                Ok(self.fallback.get_emotion_scores(text))
            },
            Err(RemoteError::Classify(error)) => {
                error!(error = %error, "emotion service returned an unusable response");
                Err(error)
            },
        }
    }
}
