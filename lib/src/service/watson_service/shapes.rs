//! Known EmotionPredict response layouts.
//!
//! Each matcher either finds the object holding the five scores or returns
//! `None`. Matchers are tried in [`SHAPE_MATCHERS`] order and the first hit wins.

use serde_json::{Map, Value};

use crate::error::ClassifyError;
use crate::service::common_structs::{Emotion, EmotionScores};

const PREDICTIONS: &str = "predictions";
const EMOTION_PREDICTIONS: &str = "emotionPredictions";
const EMOTION: &str = "emotion";
const EMOTION_SCORES: &str = "emotionScores";

type ShapeMatcher = fn(&Value) -> Option<&Map<String, Value>>;

const SHAPE_MATCHERS: &[ShapeMatcher] = &[
    predictions_shape,
    emotion_predictions_shape,
    top_level_shape,
];

// {"predictions": [{"emotion": {...} | {"emotionScores": {...}}}]}
fn predictions_shape(body: &Value) -> Option<&Map<String, Value>> {
    let emotion = body
        .get(PREDICTIONS)?
        .as_array()?
        .first()?
        .get(EMOTION)?
        .as_object()?;
    Some(unwrap_scores(emotion))
}

// {"emotionPredictions": [{"emotion": {...}}]}
fn emotion_predictions_shape(body: &Value) -> Option<&Map<String, Value>> {
    body.get(EMOTION_PREDICTIONS)?
        .as_array()?
        .first()?
        .get(EMOTION)?
        .as_object()
}

// {"emotion": {...} | {"emotionScores": {...}}}
fn top_level_shape(body: &Value) -> Option<&Map<String, Value>> {
    body.get(EMOTION)?.as_object().map(unwrap_scores)
}

fn unwrap_scores(emotion: &Map<String, Value>) -> &Map<String, Value> {
    emotion
        .get(EMOTION_SCORES)
        .and_then(Value::as_object)
        .unwrap_or(emotion)
}

/// Object holding the scores, if any known shape matches.
pub fn locate_scores(body: &Value) -> Option<&Map<String, Value>> {
    SHAPE_MATCHERS.iter().find_map(|matcher| matcher(body))
}

/// Five scores from a 200 response body.
///
/// Missing or non-numeric scores become 0.0 as long as at least one of the
/// five is present. When none is present, or no shape matches, the result is
/// [`ClassifyError::UnexpectedResponseFormat`].
pub fn extract_scores(body: &Value) -> Result<EmotionScores, ClassifyError> {
    let empty = Map::new();
    let mapping = locate_scores(body).unwrap_or(&empty);

    let [anger, disgust, fear, joy, sadness] =
        Emotion::ALL.map(|emotion| mapping.get(emotion.as_str()).and_then(Value::as_f64));

    if [anger, disgust, fear, joy, sadness].iter().all(Option::is_none) {
        return Err(ClassifyError::UnexpectedResponseFormat);
    }

    Ok(EmotionScores::new(
        anger.unwrap_or(0.0),
        disgust.unwrap_or(0.0),
        fear.unwrap_or(0.0),
        joy.unwrap_or(0.0),
        sadness.unwrap_or(0.0),
    ))
}
