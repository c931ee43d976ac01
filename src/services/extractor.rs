//! Recovery of structured payloads from free-form model replies.
//!
//! Quiz and flashcard replies are expected to carry one JSON object
//! somewhere in the text, often wrapped in prose or a code fence. The
//! object is located by taking everything from the first `{` to the last
//! `}`. When that span does not parse, the first depth-balanced object is
//! tried before giving up, which rescues replies that contain a second,
//! unrelated object after the payload.

use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::{
    errors::AppError,
    models::domain::{Feature, Flashcard, QuizQuestion},
};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    NoJsonFound,
    ParseError,
    ShapeError,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::NoJsonFound => write!(f, "no_json_found"),
            FailureReason::ParseError => write!(f, "parse_error"),
            FailureReason::ShapeError => write!(f, "shape_error"),
        }
    }
}

/// Typed payload of a successful extraction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Extracted {
    Prose(String),
    Quiz(Vec<QuizQuestion>),
    Flashcards(Vec<Flashcard>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractionFailure {
    pub reason: FailureReason,
    pub detail: String,
    /// The complete model reply, preserved for display.
    pub raw: String,
}

pub type ExtractionResult = Result<Extracted, ExtractionFailure>;

impl ExtractionFailure {
    fn new(reason: FailureReason, detail: impl Into<String>, raw: &str) -> Self {
        Self {
            reason,
            detail: detail.into(),
            raw: raw.to_string(),
        }
    }

    /// User-facing message for a failure while handling `feature`.
    pub fn message(&self, feature: Feature) -> String {
        match self.reason {
            FailureReason::NoJsonFound => {
                "Failed to find JSON in the response. Please try again.".to_string()
            }
            FailureReason::ParseError | FailureReason::ShapeError => {
                let noun = match feature {
                    Feature::Flashcards => "flashcard",
                    other => other.noun(),
                };
                format!("Failed to parse {} response: {}", noun, self.detail)
            }
        }
    }

    pub fn into_app_error(self, feature: Feature) -> AppError {
        AppError::ExtractionError {
            reason: self.reason,
            message: self.message(feature),
            raw: self.raw,
        }
    }
}

/// Turns a raw model reply into the structure `feature` expects.
///
/// Explain and Summarize replies are prose and pass through untouched.
pub fn extract(feature: Feature, raw_text: &str) -> ExtractionResult {
    match feature {
        Feature::Explain | Feature::Summarize => Ok(Extracted::Prose(raw_text.to_string())),
        Feature::Quiz => {
            let payload = parse_payload(raw_text)?;
            let questions = records::<QuizQuestion>(&payload, "questions", raw_text, |question| {
                question.normalize()
            })?;
            Ok(Extracted::Quiz(questions))
        }
        Feature::Flashcards => {
            let payload = parse_payload(raw_text)?;
            let cards = records::<Flashcard>(&payload, "flashcards", raw_text, |card| {
                card.validate().map_err(|e| e.to_string())
            })?;
            Ok(Extracted::Flashcards(cards))
        }
    }
}

/// Span from the first `{` to the last `}` of `raw_text`, inclusive.
pub fn outer_brace_span(raw_text: &str) -> Option<&str> {
    let start = raw_text.find('{')?;
    let end = raw_text.rfind('}')?;
    (end > start).then(|| &raw_text[start..=end])
}

/// First top-level object whose braces balance, ignoring braces inside
/// JSON string literals.
pub fn first_balanced_object(raw_text: &str) -> Option<&str> {
    let start = raw_text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in raw_text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw_text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

fn parse_payload(raw_text: &str) -> Result<Value, ExtractionFailure> {
    let candidate = outer_brace_span(raw_text).ok_or_else(|| {
        ExtractionFailure::new(
            FailureReason::NoJsonFound,
            "reply contains no {...} span",
            raw_text,
        )
    })?;

    match serde_json::from_str::<Value>(candidate) {
        Ok(value) => Ok(value),
        Err(outer_err) => {
            let fallback = first_balanced_object(raw_text)
                .filter(|balanced| balanced.len() < candidate.len())
                .and_then(|balanced| serde_json::from_str::<Value>(balanced).ok());

            match fallback {
                Some(value) => {
                    log::debug!("Recovered JSON payload from first balanced object");
                    Ok(value)
                }
                None => Err(ExtractionFailure::new(
                    FailureReason::ParseError,
                    outer_err.to_string(),
                    raw_text,
                )),
            }
        }
    }
}

/// Pulls `field` out of the payload and converts every element, running
/// `check` on each so a malformed record is reported here rather than when
/// it is rendered. A missing field is an empty list.
fn records<T>(
    payload: &Value,
    field: &str,
    raw_text: &str,
    check: impl Fn(&mut T) -> Result<(), String>,
) -> Result<Vec<T>, ExtractionFailure>
where
    T: DeserializeOwned,
{
    let items = match payload.get(field) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(ExtractionFailure::new(
                FailureReason::ShapeError,
                format!("`{}` is not an array", field),
                raw_text,
            ))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut record = T::deserialize(item).map_err(|e| {
                ExtractionFailure::new(
                    FailureReason::ShapeError,
                    format!("{} item {}: {}", field, index + 1, e),
                    raw_text,
                )
            })?;
            check(&mut record).map_err(|e| {
                ExtractionFailure::new(
                    FailureReason::ShapeError,
                    format!("{} item {}: {}", field, index + 1, e),
                    raw_text,
                )
            })?;
            Ok(record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{
        FLASHCARD_REPLY, MIXED_QUIZ_REPLY, NO_JSON_REPLY, TWO_OBJECT_REPLY,
    };

    #[test]
    fn extracts_flashcards_wrapped_in_prose() {
        let result = extract(Feature::Flashcards, FLASHCARD_REPLY);

        assert_eq!(
            result,
            Ok(Extracted::Flashcards(vec![Flashcard::new("A", "B")]))
        );
    }

    #[test]
    fn reports_no_json_found() {
        let failure = extract(Feature::Quiz, NO_JSON_REPLY).unwrap_err();

        assert_eq!(failure.reason, FailureReason::NoJsonFound);
        assert_eq!(failure.raw, NO_JSON_REPLY);
        assert_eq!(
            failure.message(Feature::Quiz),
            "Failed to find JSON in the response. Please try again."
        );
    }

    #[test]
    fn closing_brace_before_opening_brace_is_not_json() {
        let failure = extract(Feature::Flashcards, "} oops {").unwrap_err();
        assert_eq!(failure.reason, FailureReason::NoJsonFound);
    }

    #[test]
    fn reports_parse_error_for_invalid_span() {
        let raw = "Sure! {flashcards: [front: A]} hope that helps";
        let failure = extract(Feature::Flashcards, raw).unwrap_err();

        assert_eq!(failure.reason, FailureReason::ParseError);
        assert_eq!(failure.raw, raw);
        assert!(failure
            .message(Feature::Flashcards)
            .starts_with("Failed to parse flashcard response:"));
    }

    #[test]
    fn record_count_matches_array_length() {
        let Ok(Extracted::Quiz(questions)) = extract(Feature::Quiz, MIXED_QUIZ_REPLY) else {
            panic!("expected quiz extraction to succeed");
        };

        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].answer_text(), "Carbon dioxide");
        assert_eq!(questions[1].answer_text(), "True");
    }

    #[test]
    fn code_fenced_reply_is_extracted() {
        let raw = "```json\n{\"questions\": []}\n```";
        assert_eq!(extract(Feature::Quiz, raw), Ok(Extracted::Quiz(vec![])));
    }

    #[test]
    fn missing_array_field_is_an_empty_list() {
        let raw = "{\"cards\": [{\"front\": \"A\", \"back\": \"B\"}]}";
        assert_eq!(
            extract(Feature::Flashcards, raw),
            Ok(Extracted::Flashcards(vec![]))
        );
    }

    #[test]
    fn sibling_objects_fall_back_to_first_balanced_object() {
        let Ok(Extracted::Flashcards(cards)) = extract(Feature::Flashcards, TWO_OBJECT_REPLY)
        else {
            panic!("expected balanced-object fallback to succeed");
        };

        assert_eq!(cards, vec![Flashcard::new("Gene", "Unit of heredity")]);
    }

    #[test]
    fn balanced_scan_ignores_braces_in_strings() {
        let raw = r#"x {"a": "}{", "b": {"c": "\"}"}} y {"z": 1}"#;
        assert_eq!(
            first_balanced_object(raw),
            Some(r#"{"a": "}{", "b": {"c": "\"}"}}"#)
        );
    }

    #[test]
    fn missing_required_field_is_a_shape_error() {
        let raw = r#"{"questions": [{"type": "true_false", "question": "S", "correct": true}]}"#;
        let failure = extract(Feature::Quiz, raw).unwrap_err();

        assert_eq!(failure.reason, FailureReason::ShapeError);
        assert!(failure.detail.contains("questions item 1"));
        assert!(failure.detail.contains("explanation"));
    }

    #[test]
    fn non_array_field_is_a_shape_error() {
        let raw = r#"{"flashcards": "none"}"#;
        let failure = extract(Feature::Flashcards, raw).unwrap_err();
        assert_eq!(failure.reason, FailureReason::ShapeError);
    }

    #[test]
    fn prose_features_pass_raw_text_through() {
        let raw = "Photosynthesis is how plants {sort of} eat light.";

        assert_eq!(
            extract(Feature::Explain, raw),
            Ok(Extracted::Prose(raw.to_string()))
        );
        assert_eq!(
            extract(Feature::Summarize, "no json here"),
            Ok(Extracted::Prose("no json here".to_string()))
        );
    }

    #[test]
    fn failure_converts_to_extraction_app_error() {
        let failure = extract(Feature::Flashcards, NO_JSON_REPLY).unwrap_err();

        match failure.into_app_error(Feature::Flashcards) {
            AppError::ExtractionError { reason, raw, .. } => {
                assert_eq!(reason, FailureReason::NoJsonFound);
                assert_eq!(raw, NO_JSON_REPLY);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
