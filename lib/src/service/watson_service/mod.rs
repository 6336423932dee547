
pub mod shapes;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tracing::debug;

use crate::config::ClassifierConfig;
use crate::error::{ClassifyError, ConfigError, RemoteError};
use super::common_structs::EmotionScoreSet;

const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";
pub const MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";


/// Client for the Watson NLP EmotionPredict endpoint.
#[derive(Debug, Clone)]
pub struct WatsonService {
    client: Client,
    endpoint: String,
    headers: HeaderMap,
}

impl WatsonService {
    pub fn new(config: &ClassifierConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(MODEL_ID_HEADER), HeaderValue::from_static(MODEL_ID));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ConfigError::HttpClient(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.to_owned(),
            headers,
        })
    }

    /// One EmotionPredict call for already validated text.
    ///
    /// A 400 means the service rejected the text and yields a blank set.
    /// Only [`RemoteError::Unreachable`] should be recovered from locally.
    pub async fn get_emotion_scores(&self, text: &str) -> Result<EmotionScoreSet, RemoteError> {
        let body = json!({
            "raw_document": {
                "text": text
            }
        });

        let response = self.client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .body(body.to_string())
            .send()
            .await
            .map_err(RemoteError::Unreachable)?;

        let status = response.status();
        debug!(status = status.as_u16(), "emotion service responded");

        match status {
            StatusCode::OK => {},
            StatusCode::BAD_REQUEST => return Ok(EmotionScoreSet::blank()),
            other => return Err(ClassifyError::UnexpectedStatus(other.as_u16()).into()),
        }

        let body_string = response.text().await.map_err(RemoteError::Unreachable)?;
        debug!(body = %body_string, "emotion service response body");

        let body = serde_json::from_str::<Value>(&body_string)
            .map_err(|_| ClassifyError::InvalidResponseFormat)?;
        let scores = shapes::extract_scores(&body)?;

        Ok(EmotionScoreSet::from_scores(scores))
    }
}
