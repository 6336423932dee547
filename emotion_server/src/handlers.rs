
use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use emotion_detection::{EmotionClassifier, EmotionScoreSet};
use serde::Deserialize;
use tracing::{error, info};

pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Emotion Detector</title>
</head>
<body>
    <h1>Emotion Detector</h1>
    <form action="/emotionDetector" method="get">
        <textarea name="textToAnalyze" rows="4" cols="60" placeholder="Type the text to analyze"></textarea>
        <br>
        <button type="submit">Run Sentiment Analysis</button>
    </form>
</body>
</html>
"#;


#[derive(Debug, Deserialize)]
pub struct EmotionQuery {
    #[serde(rename = "textToAnalyze")]
    pub text_to_analyze: Option<String>,
}


fn build_text_response(status: StatusCode, body: String) -> Response {
    let mut text_header = HeaderMap::new();
    text_header.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    (status, text_header, body).into_response()
}

/// Sentence shown to the user, `None` for a blank result.
pub fn format_result(result: &EmotionScoreSet) -> Option<String> {
    let scores = result.scores()?;
    let dominant_emotion = result.dominant_emotion()?;
    Some(format!(
        "For the given statement, the system response is 'anger': {}, 'disgust': {}, 'fear': {}, 'joy': {}, 'sadness': {}. The dominant emotion is {}.",
        scores.anger, scores.disgust, scores.fear, scores.joy, scores.sadness, dominant_emotion
    ))
}


pub async fn render_index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub async fn emotion_detector(
    State(classifier): State<EmotionClassifier>,
    Query(params): Query<EmotionQuery>,
) -> Response {
    let result = match classifier.classify(params.text_to_analyze.as_deref()).await {
        Ok(result) => result,
        Err(error) => {
            error!(error = %error, "classification failed");
            return build_text_response(StatusCode::BAD_GATEWAY, error.to_string());
        },
    };

    match format_result(&result) {
        Some(message) => {
            info!(dominant_emotion = ?result.dominant_emotion(), "text classified");
            build_text_response(StatusCode::OK, message)
        },
        None => build_text_response(StatusCode::OK, INVALID_TEXT_MESSAGE.to_owned()),
    }
}
