use serde::Deserialize;
use validator::Validate;

use crate::models::domain::feature::{
    QuizType, SummaryLength, FLASHCARD_COUNT_DEFAULT, QUIZ_COUNT_DEFAULT,
};

/// Longest input accepted from the text area, in characters.
pub const MAX_INPUT_LEN: u64 = 50_000;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExplainRequest {
    #[validate(length(max = MAX_INPUT_LEN))]
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SummarizeRequest {
    #[validate(length(max = MAX_INPUT_LEN))]
    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub length: SummaryLength,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(length(max = MAX_INPUT_LEN))]
    #[serde(default)]
    pub input: String,

    #[validate(range(min = 3, max = 15))]
    #[serde(default = "default_quiz_count")]
    pub count: u8,

    #[serde(default)]
    pub quiz_type: QuizType,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FlashcardsRequest {
    #[validate(length(max = MAX_INPUT_LEN))]
    #[serde(default)]
    pub input: String,

    #[validate(range(min = 3, max = 20))]
    #[serde(default = "default_flashcard_count")]
    pub count: u8,
}

fn default_quiz_count() -> u8 {
    QUIZ_COUNT_DEFAULT
}

fn default_flashcard_count() -> u8 {
    FLASHCARD_COUNT_DEFAULT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_request_applies_slider_defaults() {
        let request: QuizRequest = serde_json::from_str(r#"{"input": "Volcanoes"}"#).unwrap();

        assert_eq!(request.count, 5);
        assert_eq!(request.quiz_type, QuizType::Mixed);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn quiz_request_rejects_count_outside_bounds() {
        let request: QuizRequest =
            serde_json::from_str(r#"{"input": "Volcanoes", "count": 16}"#).unwrap();
        assert!(request.validate().is_err());

        let request: QuizRequest =
            serde_json::from_str(r#"{"input": "Volcanoes", "count": 2}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn flashcards_request_bounds() {
        let request: FlashcardsRequest = serde_json::from_str(r#"{"input": "Cells"}"#).unwrap();
        assert_eq!(request.count, 8);

        let request: FlashcardsRequest =
            serde_json::from_str(r#"{"input": "Cells", "count": 20}"#).unwrap();
        assert!(request.validate().is_ok());

        let request: FlashcardsRequest =
            serde_json::from_str(r#"{"input": "Cells", "count": 21}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn summarize_request_accepts_ui_label() {
        let request: SummarizeRequest =
            serde_json::from_str(r#"{"notes": "n", "length": "Detailed (2-3 paragraphs)"}"#)
                .unwrap();
        assert_eq!(request.length, SummaryLength::Detailed);
    }

    #[test]
    fn oversized_input_is_rejected() {
        let request = ExplainRequest {
            topic: "x".repeat(MAX_INPUT_LEN as usize + 1),
        };
        assert!(request.validate().is_err());
    }
}
