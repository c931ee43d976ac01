use crate::models::domain::{Flashcard, QuizQuestion};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Reply with one flashcard wrapped in chatty prose.
    pub const FLASHCARD_REPLY: &str =
        "Here you go:\n{\"flashcards\":[{\"front\":\"A\",\"back\":\"B\"}]}\nEnjoy!";

    pub const NO_JSON_REPLY: &str = "no json here";

    /// One question of each kind; the multiple-choice answer is given as a label.
    pub const MIXED_QUIZ_REPLY: &str = r#"Sure, here is your quiz:
{
  "questions": [
    {
      "type": "mcq",
      "question": "Which gas do plants absorb?",
      "options": ["Oxygen", "Carbon dioxide", "Nitrogen", "Helium"],
      "correct": "B",
      "explanation": "Plants take in carbon dioxide for photosynthesis."
    },
    {
      "type": "true_false",
      "question": "Plants need sunlight for photosynthesis.",
      "correct": true,
      "explanation": "Light drives the reaction."
    },
    {
      "type": "short_answer",
      "question": "Which pigment makes leaves green?",
      "answer": "Chlorophyll",
      "explanation": "Chlorophyll reflects green light."
    }
  ]
}
Good luck!"#;

    /// Two sibling objects, so the outer brace span is not valid JSON.
    pub const TWO_OBJECT_REPLY: &str = r#"{"flashcards":[{"front":"Gene","back":"Unit of heredity"}]}
Also: {"note": "generated for biology class"}"#;

    pub fn sample_flashcards() -> Vec<Flashcard> {
        vec![
            Flashcard::new("Mitochondria", "Powerhouse of the cell"),
            Flashcard::new("Ribosome", "Site of protein synthesis"),
            Flashcard::new("Nucleus", "Holds the cell's DNA"),
        ]
    }

    pub fn sample_quiz() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion::MultipleChoice {
                question: "Which gas do plants absorb?".to_string(),
                options: vec![
                    "Oxygen".to_string(),
                    "Carbon dioxide".to_string(),
                    "Nitrogen".to_string(),
                    "Helium".to_string(),
                ],
                correct: "Carbon dioxide".to_string(),
                explanation: "Plants take in carbon dioxide for photosynthesis.".to_string(),
            },
            QuizQuestion::TrueFalse {
                question: "Plants need sunlight for photosynthesis.".to_string(),
                correct: true,
                explanation: "Light drives the reaction.".to_string(),
            },
            QuizQuestion::ShortAnswer {
                question: "Which pigment makes leaves green?".to_string(),
                answer: "Chlorophyll".to_string(),
                explanation: "Chlorophyll reflects green light.".to_string(),
            },
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_sample_quiz_covers_every_kind() {
        let quiz = sample_quiz();
        assert_eq!(quiz.len(), 3);
        assert!(matches!(quiz[0], crate::models::domain::QuizQuestion::MultipleChoice { .. }));
        assert!(matches!(quiz[1], crate::models::domain::QuizQuestion::TrueFalse { .. }));
        assert!(matches!(quiz[2], crate::models::domain::QuizQuestion::ShortAnswer { .. }));
    }

    #[test]
    fn test_sample_flashcards() {
        let cards = sample_flashcards();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].front, "Mitochondria");
    }
}
