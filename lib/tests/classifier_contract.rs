//! Contract tests for the emotion classifier against a mock EmotionPredict
//! service.
//!
//! Covers the outbound request format, every known response shape, and the
//! split between outcomes that fall back to keywords (transport failures)
//! and outcomes surfaced as errors (bad status, bad body).

use std::net::TcpListener;
use std::time::Duration;

use emotion_detection::{
    ClassifierConfig, ClassifyError, Emotion, EmotionClassifier, EmotionScoreSet, EmotionScores,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PREDICT_PATH: &str = "/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";

const JOY_FALLBACK: EmotionScores = EmotionScores::new(0.05, 0.02, 0.03, 0.85, 0.06);

fn classifier_for(server: &MockServer) -> EmotionClassifier {
    let config = ClassifierConfig::default().with_endpoint(format!("{}{}", server.uri(), PREDICT_PATH));
    EmotionClassifier::new(&config).unwrap()
}

/// Endpoint on a local port nothing listens on.
fn unreachable_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{address}{PREDICT_PATH}")
}

async fn mount_response(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(PREDICT_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

// ────────────────────────────────────────────────────────────────────────────
// Request format
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn request_carries_raw_document_and_model_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(PREDICT_PATH))
        .and(header("grpc-metadata-mm-model-id", "emotion_aggregated-workflow_lang_en_stock"))
        .and(body_json(json!({"raw_document": {"text": "I love this new technology."}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "emotionPredictions": [{
                "emotion": {"anger": 0.01, "disgust": 0.003, "fear": 0.01, "joy": 0.97, "sadness": 0.03}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = classifier_for(&server)
        .classify(Some("I love this new technology."))
        .await
        .unwrap();

    assert_eq!(result.dominant_emotion(), Some(Emotion::Joy));
    assert_eq!(result.joy(), Some(0.97));
}

#[tokio::test]
async fn blank_text_never_reaches_the_service() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let classifier = classifier_for(&server);
    for text in [None, Some(""), Some("   "), Some("\n\t ")] {
        let result = classifier.classify(text).await.unwrap();
        assert_eq!(result, EmotionScoreSet::blank());
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response shapes
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn predictions_shape_with_nested_scores() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "predictions": [{
                "emotion": {
                    "emotionScores": {"anger": 0.62, "disgust": 0.1, "fear": 0.05, "joy": 0.01, "sadness": 0.2}
                }
            }]
        })),
    )
    .await;

    let result = classifier_for(&server).classify(Some("I am furious")).await.unwrap();
    assert_eq!(
        result.scores(),
        Some(EmotionScores::new(0.62, 0.1, 0.05, 0.01, 0.2))
    );
    assert_eq!(result.dominant_emotion(), Some(Emotion::Anger));
}

#[tokio::test]
async fn top_level_emotion_shape() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "emotion": {"anger": 0.1, "disgust": 0.1, "fear": 0.71, "joy": 0.02, "sadness": 0.3}
        })),
    )
    .await;

    let result = classifier_for(&server).classify(Some("The storm is coming")).await.unwrap();
    assert_eq!(result.dominant_emotion(), Some(Emotion::Fear));
}

#[tokio::test]
async fn partial_scores_default_to_zero() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"emotion": {"sadness": 0.4}})),
    )
    .await;

    let result = classifier_for(&server).classify(Some("It rained all week")).await.unwrap();
    assert_eq!(result.scores(), Some(EmotionScores::new(0.0, 0.0, 0.0, 0.0, 0.4)));
    assert_eq!(result.dominant_emotion(), Some(Emotion::Sadness));
}

#[tokio::test]
async fn remote_ties_resolve_in_enumeration_order() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "emotion": {"anger": 0.2, "disgust": 0.2, "fear": 0.45, "joy": 0.45, "sadness": 0.1}
        })),
    )
    .await;

    let result = classifier_for(&server).classify(Some("Mixed feelings")).await.unwrap();
    assert_eq!(result.dominant_emotion(), Some(Emotion::Fear));
}

#[tokio::test]
async fn unknown_shape_is_unexpected_response_format() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"result": {"label": "joy"}})),
    )
    .await;

    let result = classifier_for(&server).classify(Some("I am so happy")).await;
    assert_eq!(result, Err(ClassifyError::UnexpectedResponseFormat));
}

// ────────────────────────────────────────────────────────────────────────────
// Status codes and malformed bodies
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn bad_request_yields_blank_result() {
    let server = MockServer::start().await;
    mount_response(&server, ResponseTemplate::new(400)).await;

    let result = classifier_for(&server).classify(Some("I love it")).await.unwrap();
    assert!(result.is_blank());
    assert_eq!(result, EmotionScoreSet::blank());
}

#[tokio::test]
async fn server_error_is_unexpected_status() {
    let server = MockServer::start().await;
    mount_response(&server, ResponseTemplate::new(500)).await;

    let result = classifier_for(&server).classify(Some("I love it")).await;
    assert_eq!(result, Err(ClassifyError::UnexpectedStatus(500)));
}

#[tokio::test]
async fn non_200_success_is_unexpected_status() {
    let server = MockServer::start().await;
    mount_response(&server, ResponseTemplate::new(204)).await;

    let result = classifier_for(&server).classify(Some("I love it")).await;
    assert_eq!(result, Err(ClassifyError::UnexpectedStatus(204)));
}

#[tokio::test]
async fn non_json_body_is_invalid_response_format() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>gateway error</html>"),
    )
    .await;

    let result = classifier_for(&server).classify(Some("I love it")).await;
    assert_eq!(result, Err(ClassifyError::InvalidResponseFormat));
}

// ────────────────────────────────────────────────────────────────────────────
// Keyword fallback
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn unreachable_service_falls_back_to_keywords() {
    let config = ClassifierConfig::default()
        .with_endpoint(unreachable_endpoint())
        .with_timeout_seconds(2);
    let classifier = EmotionClassifier::new(&config).unwrap();

    let cases = [
        ("I am glad this happened", Emotion::Joy, JOY_FALLBACK),
        (
            "I am really mad about this",
            Emotion::Anger,
            EmotionScores::new(0.8, 0.6, 0.3, 0.05, 0.25),
        ),
        (
            "I feel disgusted just hearing about this",
            Emotion::Disgust,
            EmotionScores::new(0.15, 0.8, 0.1, 0.02, 0.1),
        ),
        (
            "I am so sad about this",
            Emotion::Sadness,
            EmotionScores::new(0.05, 0.03, 0.08, 0.02, 0.82),
        ),
        (
            "I am really afraid that this will happen",
            Emotion::Fear,
            EmotionScores::new(0.05, 0.03, 0.82, 0.02, 0.12),
        ),
        (
            "The meeting is at noon",
            Emotion::Sadness,
            EmotionScores::new(0.1, 0.1, 0.15, 0.2, 0.45),
        ),
    ];

    for (text, emotion, scores) in cases {
        let result = classifier.classify(Some(text)).await.unwrap();
        assert_eq!(result.dominant_emotion(), Some(emotion), "text: {text}");
        assert_eq!(result.scores(), Some(scores), "text: {text}");
    }
}

#[tokio::test]
async fn timeout_falls_back_to_keywords() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"emotion": {"anger": 0.9}}))
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let config = ClassifierConfig::default()
        .with_endpoint(format!("{}{}", server.uri(), PREDICT_PATH))
        .with_timeout_seconds(1);
    let classifier = EmotionClassifier::new(&config).unwrap();

    let result = classifier.classify(Some("So happy right now")).await.unwrap();
    assert_eq!(result.scores(), Some(JOY_FALLBACK));
}

#[tokio::test]
async fn repeated_calls_are_identical() {
    let config = ClassifierConfig::default()
        .with_endpoint(unreachable_endpoint())
        .with_timeout_seconds(2);
    let classifier = EmotionClassifier::new(&config).unwrap();

    let first = classifier.classify(Some("I hate waiting but love the view")).await;
    let second = classifier.classify(Some("I hate waiting but love the view")).await;
    assert_eq!(first, second);
    assert_eq!(first.unwrap().dominant_emotion(), Some(Emotion::Joy));
}

#[test]
fn invalid_config_is_rejected() {
    let config = ClassifierConfig::default().with_timeout_seconds(0);
    assert!(EmotionClassifier::new(&config).is_err());
}
