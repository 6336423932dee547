//! Classifier configuration.
//!
//! The endpoint and timeout default to the public Watson NLP deployment.
//! Deployments can override both through the variables in
//! [`env_keys`](crate::env_keys).

use crate::env_keys::{EMOTION_SERVICE_TIMEOUT_SECONDS, EMOTION_SERVICE_URL};
use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// URL of the EmotionPredict endpoint.
    pub endpoint: String,
    /// Request timeout in seconds. Expiry is handled like any other transport failure.
    pub timeout_seconds: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ClassifierConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each key in
    /// [`env_keys`](crate::env_keys).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(EMOTION_SERVICE_URL) {
            config.endpoint = endpoint;
        }

        if let Some(timeout) = lookup(EMOTION_SERVICE_TIMEOUT_SECONDS) {
            config.timeout_seconds = timeout.trim().parse().map_err(|e| {
                ConfigError::Invalid(format!(
                    "{EMOTION_SERVICE_TIMEOUT_SECONDS} must be a whole number of seconds: {e}"
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Checks:
    /// - `endpoint` must not be blank
    /// - `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint must not be empty".into()));
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
