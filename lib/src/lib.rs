pub mod config;
pub mod env_keys;
pub mod error;
pub mod service;
pub mod utilities;

pub use config::ClassifierConfig;
pub use error::{ClassifyError, ConfigError};
pub use service::common_structs::{Emotion, EmotionScoreSet, EmotionScores};
pub use service::EmotionClassifier;
