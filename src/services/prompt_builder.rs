//! Feature-specific prompt construction.
//!
//! Everything here is pure: the same feature, input and options always
//! produce the same prompt, and no combination of options can fail.

use crate::{
    constants::prompts::{
        EXPLAIN_INSTRUCTION, FLASHCARD_EXAMPLE, FLASHCARD_FORMAT, JSON_FORMAT_HEADER,
        MCQ_EXAMPLE, MCQ_QUIZ_FORMAT, MIXED_QUIZ_FORMAT, SHORT_ANSWER_EXAMPLE,
        SUMMARIZE_FOCUS, TRUE_FALSE_EXAMPLE,
    },
    models::domain::{Feature, PromptOptions, QuizType},
};

/// Builds the prompt sent to the generation endpoint for `feature`.
pub fn build_prompt(feature: Feature, input_text: &str, options: &PromptOptions) -> String {
    match feature {
        Feature::Explain => explain_prompt(input_text),
        Feature::Summarize => format!(
            "Summarize the following text {}. {}\n\n{}",
            options.length.instruction(),
            SUMMARIZE_FOCUS,
            input_text
        ),
        Feature::Quiz => quiz_prompt(input_text, options.quiz_count(), options.quiz_type),
        Feature::Flashcards => format!(
            "Create {} flashcards based on: {}\n\n{}\n{}",
            options.flashcard_count(),
            input_text,
            FLASHCARD_FORMAT,
            json_shape("flashcards", &[FLASHCARD_EXAMPLE])
        ),
    }
}

fn explain_prompt(topic: &str) -> String {
    format!("Explain '{}' {}", topic, EXPLAIN_INSTRUCTION)
}

fn quiz_prompt(input_text: &str, count: u8, quiz_type: QuizType) -> String {
    match quiz_type {
        QuizType::Mixed => format!(
            "Create a quiz with {} questions based on: {}\n\n{}\n{}",
            count,
            input_text,
            MIXED_QUIZ_FORMAT,
            json_shape("questions", &[MCQ_EXAMPLE, TRUE_FALSE_EXAMPLE])
        ),
        QuizType::McqOnly => format!(
            "Create {} multiple choice questions based on: {}\n\n{}\n{}",
            count,
            input_text,
            MCQ_QUIZ_FORMAT,
            json_shape("questions", &[MCQ_EXAMPLE])
        ),
        QuizType::TrueFalseOnly => format!(
            "Create {} true/false questions based on: {}\n\n{}",
            count,
            input_text,
            json_shape("questions", &[TRUE_FALSE_EXAMPLE])
        ),
        QuizType::ShortAnswerOnly => format!(
            "Create {} short answer questions based on: {}\n\n{}",
            count,
            input_text,
            json_shape("questions", &[SHORT_ANSWER_EXAMPLE])
        ),
    }
}

/// Renders the "Return in this exact JSON format" block with one example
/// element per expected variant under `array_field`.
fn json_shape(array_field: &str, examples: &[&str]) -> String {
    format!(
        "{}\n{{\n    \"{}\": [\n{}\n    ]\n}}",
        JSON_FORMAT_HEADER,
        array_field,
        examples.join(",\n")
    )
}
